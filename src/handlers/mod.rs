//! The skill's request handlers, one per request shape, mirrored from
//! the platform intents: facts, help, exit, fallback, session end.

mod error;
mod exit;
mod fact;
mod fallback;
mod help;
mod session_ended;

#[cfg(test)]
mod tests;

pub use error::{default_error_response, GenericErrorResponder};
pub use exit::ExitHandler;
pub use fact::FactHandler;
pub use fallback::FallbackHandler;
pub use help::HelpHandler;
pub use session_ended::SessionEndedHandler;

use crate::dispatch::Dispatcher;

/// Build the dispatcher with the skill's full handler chain.
///
/// Registration order is significant: the fact handler also claims
/// `LaunchRequest`, and later handlers only see what earlier predicates
/// decline.
pub fn build_dispatcher(keep_session_open: bool) -> Dispatcher {
    Dispatcher::new(Box::new(GenericErrorResponder))
        .register(Box::new(FactHandler { keep_session_open }))
        .register(Box::new(HelpHandler))
        .register(Box::new(ExitHandler))
        .register(Box::new(FallbackHandler))
        .register(Box::new(SessionEndedHandler))
}
