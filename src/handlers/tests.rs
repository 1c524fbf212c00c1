use super::*;
use astra_core::context::RequestContext;
use astra_core::request::{Intent, IntentRequestBody, Request, RequestBody, SessionEndedBody};
use astra_i18n::{resolve, LocaleTable, MessageKey};

fn body(locale: &str) -> RequestBody {
    RequestBody {
        locale: locale.to_string(),
        ..RequestBody::default()
    }
}

fn launch(locale: &str) -> RequestContext {
    let view = resolve(locale, &LocaleTable::builtin()).unwrap();
    RequestContext::new(Request::LaunchRequest(body(locale)), view)
}

fn intent(locale: &str, name: &str) -> RequestContext {
    let view = resolve(locale, &LocaleTable::builtin()).unwrap();
    RequestContext::new(
        Request::IntentRequest(IntentRequestBody {
            body: body(locale),
            intent: Intent {
                name: name.to_string(),
                slots: None,
            },
        }),
        view,
    )
}

fn session_ended(locale: &str) -> RequestContext {
    let view = resolve(locale, &LocaleTable::builtin()).unwrap();
    RequestContext::new(
        Request::SessionEndedRequest(SessionEndedBody {
            body: body(locale),
            reason: Some("USER_INITIATED".to_string()),
        }),
        view,
    )
}

fn dispatched_speech(ctx: &RequestContext) -> String {
    build_dispatcher(false)
        .dispatch(ctx)
        .unwrap()
        .speech_text
        .unwrap()
}

#[test]
fn test_launch_routes_to_fact_handler() {
    let ctx = launch("en-US");
    let speech = dispatched_speech(&ctx);
    assert!(speech.starts_with("Here's your fact: "), "got: {speech}");
}

#[test]
fn test_fact_intent_routes_to_fact_handler() {
    let ctx = intent("en-US", "GetNewFactIntent");
    let response = build_dispatcher(false).dispatch(&ctx).unwrap();

    let speech = response.speech_text.unwrap();
    let fact = speech.strip_prefix("Here's your fact: ").unwrap();
    let card = response.card.unwrap();
    assert_eq!(card.title, "American Space Facts");
    assert_eq!(card.content, fact);
    assert!(ctx
        .view()
        .list(MessageKey::Facts)
        .unwrap()
        .contains(&fact.to_string()));
    assert!(response.end_session);
}

#[test]
fn test_keep_session_open_adds_reprompt() {
    let ctx = launch("en-US");
    let response = build_dispatcher(true).dispatch(&ctx).unwrap();
    assert_eq!(
        response.reprompt_text.as_deref(),
        Some("What can I help you with?")
    );
    assert!(!response.end_session);
}

#[test]
fn test_help_intent_routes_to_help_handler() {
    let ctx = intent("en-US", "AMAZON.HelpIntent");
    let response = build_dispatcher(false).dispatch(&ctx).unwrap();
    assert_eq!(
        response.speech_text.as_deref(),
        Some("You can say tell me a space fact, or, you can say exit... What can I help you with?")
    );
    assert!(!response.end_session);
}

#[test]
fn test_stop_and_cancel_route_to_exit_handler() {
    for name in ["AMAZON.StopIntent", "AMAZON.CancelIntent"] {
        let ctx = intent("en-US", name);
        let response = build_dispatcher(false).dispatch(&ctx).unwrap();
        assert_eq!(response.speech_text.as_deref(), Some("Goodbye!"));
        assert!(response.end_session);
    }
}

#[test]
fn test_exit_speaks_localized_stop_message() {
    let ctx = intent("de-DE", "AMAZON.StopIntent");
    assert_eq!(dispatched_speech(&ctx), "Auf Wiedersehen!");
}

#[test]
fn test_fallback_intent_routes_to_fallback_handler() {
    let ctx = intent("fr-FR", "AMAZON.FallbackIntent");
    let speech = dispatched_speech(&ctx);
    assert!(speech.starts_with("La skill des anecdotes"), "got: {speech}");
}

#[test]
fn test_fallback_without_strings_uses_error_responder() {
    // ja never shipped fallback strings; the handler's lookup fails and
    // the generic error response comes back instead.
    let ctx = intent("ja-JP", "AMAZON.FallbackIntent");
    let response = build_dispatcher(false).dispatch(&ctx).unwrap();
    assert_eq!(
        response.speech_text.as_deref(),
        Some("申し訳ありませんが、エラーが発生しました")
    );
    assert!(response.reprompt_text.is_some());
}

#[test]
fn test_session_ended_yields_empty_response() {
    let ctx = session_ended("en-GB");
    let response = build_dispatcher(false).dispatch(&ctx).unwrap();
    assert!(response.speech_text.is_none());
    assert!(response.card.is_none());
    assert!(response.end_session);
}

#[test]
fn test_unknown_intent_has_no_handler() {
    use astra_core::error::SkillError;
    let ctx = intent("en-US", "ComplimentIntent");
    assert!(matches!(
        build_dispatcher(false).dispatch(&ctx),
        Err(SkillError::NoHandlerMatched(_))
    ));
}

#[test]
fn test_default_error_response_is_well_formed() {
    let response = default_error_response();
    assert_eq!(response.speech_text.as_deref(), Some("Sorry, an error occurred."));
    assert!(!response.end_session);
}
