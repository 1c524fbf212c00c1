//! First-match request dispatch with an error-responder fallback.

use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::response::SkillResponse;
use astra_core::traits::{ErrorResponder, RequestHandler};
use tracing::{debug, error};

/// Routes each request to exactly one handler.
///
/// Handlers are consulted in registration order and the first matching
/// predicate wins — predicates are not mutually exclusive, so order is
/// part of the configuration. A failed action is answered by the error
/// responder instead; a failure in the responder itself propagates.
pub struct Dispatcher {
    handlers: Vec<Box<dyn RequestHandler>>,
    error_responder: Box<dyn ErrorResponder>,
}

impl Dispatcher {
    pub fn new(error_responder: Box<dyn ErrorResponder>) -> Self {
        Self {
            handlers: Vec::new(),
            error_responder,
        }
    }

    /// Append a handler. Registration order is selection order.
    pub fn register(mut self, handler: Box<dyn RequestHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Dispatch one request. Exactly one handler action runs: the first
    /// match, or the error responder as its substitute.
    pub fn dispatch(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
        let handler = self
            .handlers
            .iter()
            .find(|h| h.can_handle(ctx))
            .ok_or_else(|| SkillError::NoHandlerMatched(ctx.request.type_name().to_string()))?;

        debug!(
            request_id = %ctx.id,
            handler = handler.name(),
            request_type = ctx.request.type_name(),
            "dispatching"
        );

        match handler.handle(ctx) {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(
                    request_id = %ctx.id,
                    handler = handler.name(),
                    "handler failed: {e}"
                );
                self.error_responder.handle(ctx, &e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_core::request::{Request, RequestBody};
    use astra_i18n::{resolve, LocaleTable};

    struct StaticHandler {
        name: &'static str,
        matches: bool,
        fail: bool,
    }

    impl RequestHandler for StaticHandler {
        fn name(&self) -> &'static str {
            self.name
        }

        fn can_handle(&self, _ctx: &RequestContext) -> bool {
            self.matches
        }

        fn handle(&self, _ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
            if self.fail {
                return Err(SkillError::Handler("boom".to_string()));
            }
            Ok(SkillResponse::builder().speak(self.name).build())
        }
    }

    struct StaticResponder;

    impl ErrorResponder for StaticResponder {
        fn handle(
            &self,
            _ctx: &RequestContext,
            _error: &SkillError,
        ) -> Result<SkillResponse, SkillError> {
            Ok(SkillResponse::builder().speak("error response").build())
        }
    }

    struct FailingResponder;

    impl ErrorResponder for FailingResponder {
        fn handle(
            &self,
            _ctx: &RequestContext,
            _error: &SkillError,
        ) -> Result<SkillResponse, SkillError> {
            Err(SkillError::Handler("responder down".to_string()))
        }
    }

    fn launch_context() -> RequestContext {
        let request = Request::LaunchRequest(RequestBody {
            locale: "en-US".to_string(),
            ..RequestBody::default()
        });
        let view = resolve("en-US", &LocaleTable::builtin()).unwrap();
        RequestContext::new(request, view)
    }

    #[test]
    fn test_first_registered_match_wins() {
        let dispatcher = Dispatcher::new(Box::new(StaticResponder))
            .register(Box::new(StaticHandler {
                name: "first",
                matches: true,
                fail: false,
            }))
            .register(Box::new(StaticHandler {
                name: "second",
                matches: true,
                fail: false,
            }));

        let response = dispatcher.dispatch(&launch_context()).unwrap();
        assert_eq!(response.speech_text.as_deref(), Some("first"));
    }

    #[test]
    fn test_non_matching_handlers_are_skipped() {
        let dispatcher = Dispatcher::new(Box::new(StaticResponder))
            .register(Box::new(StaticHandler {
                name: "skipped",
                matches: false,
                fail: false,
            }))
            .register(Box::new(StaticHandler {
                name: "chosen",
                matches: true,
                fail: false,
            }));

        let response = dispatcher.dispatch(&launch_context()).unwrap();
        assert_eq!(response.speech_text.as_deref(), Some("chosen"));
    }

    #[test]
    fn test_no_match_is_an_explicit_error() {
        let dispatcher = Dispatcher::new(Box::new(StaticResponder)).register(Box::new(
            StaticHandler {
                name: "never",
                matches: false,
                fail: false,
            },
        ));

        match dispatcher.dispatch(&launch_context()) {
            Err(SkillError::NoHandlerMatched(kind)) => assert_eq!(kind, "LaunchRequest"),
            other => panic!("expected NoHandlerMatched, got {other:?}"),
        }
    }

    #[test]
    fn test_failing_action_routes_through_error_responder() {
        let dispatcher = Dispatcher::new(Box::new(StaticResponder)).register(Box::new(
            StaticHandler {
                name: "broken",
                matches: true,
                fail: true,
            },
        ));

        let response = dispatcher.dispatch(&launch_context()).unwrap();
        assert_eq!(response.speech_text.as_deref(), Some("error response"));
    }

    #[test]
    fn test_failing_responder_propagates() {
        let dispatcher = Dispatcher::new(Box::new(FailingResponder)).register(Box::new(
            StaticHandler {
                name: "broken",
                matches: true,
                fail: true,
            },
        ));

        assert!(matches!(
            dispatcher.dispatch(&launch_context()),
            Err(SkillError::Handler(_))
        ));
    }
}
