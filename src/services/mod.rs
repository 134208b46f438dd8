//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic over the `VaultStore` seam so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod dashboard;
pub mod passwords;
