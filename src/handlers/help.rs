use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::response::SkillResponse;
use astra_core::traits::RequestHandler;
use astra_i18n::MessageKey;

/// Answers the platform help intent.
pub struct HelpHandler;

impl RequestHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn can_handle(&self, ctx: &RequestContext) -> bool {
        ctx.intent_name() == Some("AMAZON.HelpIntent")
    }

    fn handle(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
        Ok(SkillResponse::builder()
            .speak(ctx.t(MessageKey::HelpMessage)?)
            .reprompt(ctx.t(MessageKey::HelpReprompt)?)
            .build())
    }
}
