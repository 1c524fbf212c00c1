use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::response::SkillResponse;
use astra_core::traits::RequestHandler;
use astra_i18n::{pick_random, MessageKey};

/// The primary handler: speaks a random fact on launch or when the
/// fact intent fires.
pub struct FactHandler {
    /// Reprompt after the fact and keep the session open, so the user
    /// can ask for another without relaunching.
    pub keep_session_open: bool,
}

impl RequestHandler for FactHandler {
    fn name(&self) -> &'static str {
        "fact"
    }

    fn can_handle(&self, ctx: &RequestContext) -> bool {
        ctx.request.type_name() == "LaunchRequest"
            || ctx.intent_name() == Some("GetNewFactIntent")
    }

    fn handle(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
        let facts = ctx.view().list(MessageKey::Facts)?;
        let fact = pick_random(facts)?;
        let speech = format!("{}{fact}", ctx.t(MessageKey::GetFactMessage)?);

        let mut builder = SkillResponse::builder()
            .speak(speech)
            .with_simple_card(ctx.t(MessageKey::SkillName)?, fact);
        if self.keep_session_open {
            builder = builder.reprompt(ctx.t(MessageKey::HelpReprompt)?);
        }
        Ok(builder.build())
    }
}
