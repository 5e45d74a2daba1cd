extern crate alloc;

mod datastore;
mod games;
mod mons;

#[cfg(test)]
pub mod test_util;

pub use datastore::*;
pub use games::*;
pub use mons::*;
