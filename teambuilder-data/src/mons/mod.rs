mod creature_data;
mod generation;
mod stat;
mod r#type;

pub use creature_data::{
    CreatureData,
    CreatureId,
};
pub use generation::generation_of_species;
pub use stat::{
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
