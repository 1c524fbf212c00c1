use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::response::SkillResponse;
use astra_core::traits::RequestHandler;
use astra_i18n::MessageKey;

/// Says goodbye on the platform stop and cancel intents.
pub struct ExitHandler;

impl RequestHandler for ExitHandler {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn can_handle(&self, ctx: &RequestContext) -> bool {
        matches!(
            ctx.intent_name(),
            Some("AMAZON.CancelIntent" | "AMAZON.StopIntent")
        )
    }

    fn handle(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
        Ok(SkillResponse::builder()
            .speak(ctx.t(MessageKey::StopMessage)?)
            .build())
    }
}
