use std::sync::Arc;

use crate::actions::ActionContext;
use crate::auth::Authenticator;
use crate::cache::PageCache;
use crate::models::invoice::{InvoiceStore, ValidationMode};

/// Shared application state, registered once as `web::Data<AppState>`.
pub struct AppState {
    pub store: Arc<dyn InvoiceStore>,
    pub authenticator: Arc<dyn Authenticator>,
    pub cache: PageCache,
    pub validation_mode: ValidationMode,
}

impl AppState {
    pub fn new(
        store: Arc<dyn InvoiceStore>,
        authenticator: Arc<dyn Authenticator>,
        validation_mode: ValidationMode,
    ) -> Self {
        Self { store, authenticator, cache: PageCache::new(), validation_mode }
    }

    /// Action context for one request, dated today.
    pub fn action_context(&self) -> ActionContext<'_> {
        ActionContext::new(self.store.as_ref(), &self.cache, self.validation_mode)
    }
}
