//! Domain models for the MediTrack client.

mod audit;
mod bonus;
mod doctor;
mod exam;
mod patient;
mod role;
mod session;
mod user;

pub use audit::*;
pub use bonus::*;
pub use doctor::*;
pub use exam::*;
pub use patient::*;
pub use role::*;
pub use session::*;
pub use user::*;
