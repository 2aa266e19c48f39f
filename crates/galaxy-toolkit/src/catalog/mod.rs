//! Static reference data shared by the tools.
//!
//! Every table here is read-only; the tools borrow from it and never mutate it.

pub mod firmware;
pub mod good_lock;
pub mod phones;
pub mod pricing;
pub mod updates;

pub use phones::{PhoneModel, PhoneSpecs};
pub use pricing::UpgradeCandidate;
pub use updates::{UpdateRecord, UpdateStatus, UpdateType};
