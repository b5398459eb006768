//! Domain model for the AI Safety Incident Dashboard.
//!
//! Everything the view needs lives here: the incident records, the in-memory
//! store they belong to, the filtered/sorted derivation the list renders
//! from, and the creation-form draft. The crate is plain Rust with no UI
//! dependency so the whole behavior is testable natively.

pub mod draft;
pub mod incident;
pub mod store;
pub mod view;

pub use draft::{IncidentDraft, ValidationError};
pub use incident::{Incident, Severity};
pub use store::IncidentStore;
pub use view::{visible_incidents, DateSort, SeverityFilter};
