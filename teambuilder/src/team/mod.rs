mod builder;
mod team;

pub use builder::*;
pub use team::*;
