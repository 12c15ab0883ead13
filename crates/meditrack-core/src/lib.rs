//! MediTrack Core Library
//!
//! Domain model and client-side logic for the MediTrack imaging-clinic
//! client: who is logged in, what they may see, and what the forms and
//! dashboards do with the data before and after it crosses the wire.
//!
//! # Architecture
//!
//! ```text
//!   login ──► SessionStore ──► SessionStorage (SQLite / memory)
//!                 │
//!                 ├──► navigation: role-filtered navbar + sidebar
//!                 │
//!                 └──► meditrack-api: bearer token, 401 invalidation
//!
//!   forms ──validate──► payloads ──► meditrack-api endpoints
//!   API rows ──► normalize / reports ──► page view state
//! ```
//!
//! # Core Principle
//!
//! **Role filtering hides links; it does not authorize.** The server is the
//! only authority on what a role may do.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Role, Session, PatientRecord, Exam, Doctor, ...)
//! - [`storage`]: Persistent key/value session storage
//! - [`session`]: Session lifecycle and change notification
//! - [`routes`]: Page paths and role landing pages
//! - [`navigation`]: Navbar and sidebar link tables
//! - [`normalize`]: Header normalization for loosely keyed record rows
//! - [`forms`]: Client-side form validation
//! - [`reports`]: Bonus and revenue aggregation for dashboards
//! - [`locale`]: Mongolian UI strings

pub mod forms;
pub mod locale;
pub mod models;
pub mod navigation;
pub mod normalize;
pub mod reports;
pub mod routes;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use forms::{FieldError, Validate, ValidationErrors};
pub use models::{PatientRecord, Role, Session};
pub use navigation::{navbar_links, sidebar_links, visible_links, NavEntry, NavLink};
pub use normalize::RecordNormalizer;
pub use routes::{landing_route, Route};
pub use session::{SessionState, SessionStore};
pub use storage::{MemoryStorage, SessionStorage, SqliteStorage, StorageError, StorageResult};
