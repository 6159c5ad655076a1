//! Typed repository over the key-value store.
//!
//! Shift buckets and the hourly rate are exposed through [`ShiftStore`] and
//! [`SettingsStore`]; the key-naming convention stays in [`keys`].

pub mod keys;
pub mod repository;
pub mod settings;
pub mod shifts;

pub use repository::Repository;
pub use settings::{SettingsStore, parse_rate};
pub use shifts::{RecomputeSummary, SaveOutcome, ShiftStore};
