use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::response::SkillResponse;
use astra_core::traits::ErrorResponder;
use astra_i18n::MessageKey;
use tracing::warn;

/// Spoken when even the localized error message cannot be resolved.
const DEFAULT_ERROR_SPEECH: &str = "Sorry, an error occurred.";

/// Converts any handler failure into a single generic spoken response.
///
/// The original error is logged by the dispatcher and never reaches the
/// end user. When the request's own view lacks an error message, a
/// fixed English string is used so the user always hears something.
pub struct GenericErrorResponder;

impl ErrorResponder for GenericErrorResponder {
    fn handle(
        &self,
        ctx: &RequestContext,
        _error: &SkillError,
    ) -> Result<SkillResponse, SkillError> {
        let speech = match ctx.t(MessageKey::ErrorMessage) {
            Ok(text) => text.to_string(),
            Err(e) => {
                warn!(request_id = %ctx.id, "error message not localized: {e}");
                DEFAULT_ERROR_SPEECH.to_string()
            }
        };
        Ok(SkillResponse::builder()
            .speak(speech.clone())
            .reprompt(speech)
            .build())
    }
}

/// The locale-agnostic response used by the host when no request
/// context exists yet (malformed envelope, unsupported locale).
pub fn default_error_response() -> SkillResponse {
    SkillResponse::builder()
        .speak(DEFAULT_ERROR_SPEECH)
        .reprompt(DEFAULT_ERROR_SPEECH)
        .build()
}
