use std::sync::Arc;

use portal_kv::PortalStore;
use portal_servicem8::ServiceM8Client;

use crate::error::ApiError;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: PortalStore,
    pub servicem8: Option<Arc<ServiceM8Client>>,
    pub debug_routes: bool,
}

impl AppState {
    #[must_use]
    pub fn new(store: PortalStore) -> Self {
        Self {
            store,
            servicem8: None,
            debug_routes: false,
        }
    }

    #[must_use]
    pub fn with_servicem8(mut self, client: ServiceM8Client) -> Self {
        self.servicem8 = Some(Arc::new(client));
        self
    }

    #[must_use]
    pub fn with_debug_routes(mut self, enabled: bool) -> Self {
        self.debug_routes = enabled;
        self
    }

    /// The ServiceM8 client, or a 500 when none is configured.
    pub fn servicem8(&self) -> Result<&ServiceM8Client, ApiError> {
        self.servicem8
            .as_deref()
            .ok_or_else(|| ApiError::Internal("ServiceM8 is not configured".into()))
    }
}
