//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the vault store handle; every request reads fresh snapshots through
//! it and nothing else is cached in process.

use std::sync::Arc;

use crate::store::VaultStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VaultStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn VaultStore>) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
