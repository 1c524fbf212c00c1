use crate::context::RequestContext;
use crate::error::SkillError;
use crate::response::SkillResponse;

/// A request handler: a predicate plus an action.
///
/// Handlers are stateless and registered in a fixed order; the
/// dispatcher runs the first one whose predicate matches.
pub trait RequestHandler: Send + Sync {
    /// Handler name, used in logs.
    fn name(&self) -> &'static str;

    /// Can this handler answer the request?
    fn can_handle(&self, ctx: &RequestContext) -> bool;

    /// Produce the response. Errors route through the error responder.
    fn handle(&self, ctx: &RequestContext) -> Result<SkillResponse, SkillError>;
}

/// The substitute invoked when a matched handler's action fails.
///
/// Must itself be infallible in practice: an error here is fatal and
/// propagates out of the dispatcher.
pub trait ErrorResponder: Send + Sync {
    fn handle(&self, ctx: &RequestContext, error: &SkillError)
        -> Result<SkillResponse, SkillError>;
}
