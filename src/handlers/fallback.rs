use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::response::SkillResponse;
use astra_core::traits::RequestHandler;
use astra_i18n::MessageKey;

/// Answers the platform fallback intent (unrecognized utterances).
///
/// Locales that never shipped fallback strings (ja) fail the lookup
/// here and route through the error responder instead.
pub struct FallbackHandler;

impl RequestHandler for FallbackHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_handle(&self, ctx: &RequestContext) -> bool {
        ctx.intent_name() == Some("AMAZON.FallbackIntent")
    }

    fn handle(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
        Ok(SkillResponse::builder()
            .speak(ctx.t(MessageKey::FallbackMessage)?)
            .reprompt(ctx.t(MessageKey::FallbackReprompt)?)
            .build())
    }
}
