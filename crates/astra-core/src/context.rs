use crate::request::Request;
use astra_i18n::{LocaleError, MessageKey, ResolvedView};
use uuid::Uuid;

/// Everything a handler needs for one request.
///
/// Created at request entry after locale resolution, dropped at response
/// emission. Never shared across requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for logs; generated here when the platform
    /// doesn't supply a request id.
    pub id: Uuid,
    pub request: Request,
    view: ResolvedView,
}

impl RequestContext {
    pub fn new(request: Request, view: ResolvedView) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
            view,
        }
    }

    pub fn locale(&self) -> &str {
        self.view.locale()
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent_name()
    }

    /// The resolved message view for this request's locale.
    pub fn view(&self) -> &ResolvedView {
        &self.view
    }

    /// Shorthand for a single-string message lookup.
    pub fn t(&self, key: MessageKey) -> Result<&str, LocaleError> {
        self.view.text(key)
    }
}
