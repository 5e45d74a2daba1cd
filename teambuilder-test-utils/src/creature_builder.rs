use teambuilder_data::{
    CreatureData,
    CreatureId,
    StatTable,
    Type,
};

/// Builder for [`CreatureData`] in tests.
///
/// Creatures start out as single-typed final evolutions with all base stats at zero, and a dex
/// number equal to their ID.
pub struct CreatureBuilder {
    data: CreatureData,
}

impl CreatureBuilder {
    pub fn new(id: CreatureId, name: &str, primary_type: Type) -> Self {
        Self {
            data: CreatureData {
                id,
                dex: id as u16,
                name: name.to_owned(),
                base_stats: StatTable::default(),
                primary_type,
                secondary_type: None,
                final_evolution: true,
                legendary: false,
                mythical: false,
                last_endpoint_generation: None,
            },
        }
    }

    pub fn dex(mut self, dex: u16) -> Self {
        self.data.dex = dex;
        self
    }

    pub fn secondary_type(mut self, secondary_type: Type) -> Self {
        self.data.secondary_type = Some(secondary_type);
        self
    }

    /// Sets base stats in table order: HP, Attack, Defense, Sp. Attack, Sp. Defense, Speed.
    pub fn stats(mut self, [hp, atk, def, spa, spd, spe]: [u16; 6]) -> Self {
        self.data.base_stats = StatTable {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        };
        self
    }

    pub fn not_final(mut self) -> Self {
        self.data.final_evolution = false;
        self
    }

    pub fn last_endpoint_generation(mut self, generation: u8) -> Self {
        self.data.last_endpoint_generation = Some(generation);
        self
    }

    pub fn legendary(mut self) -> Self {
        self.data.legendary = true;
        self
    }

    pub fn mythical(mut self) -> Self {
        self.data.mythical = true;
        self
    }

    pub fn build(self) -> CreatureData {
        self.data
    }
}
