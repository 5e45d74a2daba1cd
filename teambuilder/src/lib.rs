mod baseline;
mod eligibility;
mod options;
pub mod scoring;
mod snapshot;
mod stats;
mod suggest;
mod team;

pub use baseline::*;
pub use eligibility::*;
pub use options::*;
pub use snapshot::*;
pub use stats::*;
pub use suggest::*;
pub use team::*;
