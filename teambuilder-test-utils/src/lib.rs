mod creature_builder;
mod data_store;
mod setup;

pub use creature_builder::CreatureBuilder;
pub use data_store::{
    TestDataStore,
    standard_type_chart,
    static_local_data_store,
};
pub use setup::setup_test_environment;
