//! MediTrack API Client
//!
//! Async adapter between the MediTrack domain ([`meditrack_core`]) and the
//! clinic's REST API.
//!
//! # Architecture
//!
//! ```text
//!   page controller ──► ApiClient ──► reqwest ──► MediTrack API
//!         │                 │
//!         │                 ├── bearer token from SessionStore
//!         │                 └── 401 → SessionStore::invalidate
//!         ▼
//!   PageState / Outcome (notices, redirects, field errors)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Base URL and timeout from the environment
//! - [`error`]: API error type and user-facing messages
//! - [`client`]: HTTP wrapper with auth hooks
//! - [`endpoints`]: Typed endpoint calls with legacy route fallbacks
//! - [`task`]: Cancellable fetches scoped to a view
//! - [`pages`]: Page controllers

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod pages;
pub mod task;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError, API_URL_VAR, DEFAULT_API_URL};
pub use endpoints::LoginResponse;
pub use error::{ApiError, ApiResult};
pub use pages::{Notice, Outcome, PageState};
pub use task::{ScopedTask, ViewScope};
