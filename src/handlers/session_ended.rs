use astra_core::context::RequestContext;
use astra_core::error::SkillError;
use astra_core::request::Request;
use astra_core::response::SkillResponse;
use astra_core::traits::RequestHandler;
use tracing::info;

/// Acknowledges the platform ending a session. Nothing is spoken; the
/// reason is logged for observability.
pub struct SessionEndedHandler;

impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, ctx: &RequestContext) -> bool {
        matches!(ctx.request, Request::SessionEndedRequest(_))
    }

    fn handle(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError> {
        if let Request::SessionEndedRequest(ref req) = ctx.request {
            info!(
                request_id = %ctx.id,
                "session ended with reason: {}",
                req.reason.as_deref().unwrap_or("unknown")
            );
        }
        Ok(SkillResponse::empty())
    }
}
