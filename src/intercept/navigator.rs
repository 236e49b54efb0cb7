use tracing::debug;

/// Client-side navigation as an injected collaborator.
///
/// The host owns routing; the interceptor only asks it to move to the
/// login view when the server forces a logout.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator for hosts without a navigation surface.
///
/// Records the intent in the log and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, path: &str) {
        debug!(path, "Navigation requested");
    }
}
