use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single base stat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Sp.Atk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Sp.Def"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// All stats, in table order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];

    /// Stats that determine how hard and how early a creature hits.
    pub const OFFENSIVE: [Stat; 3] = [Stat::Atk, Stat::SpAtk, Stat::Spe];

    /// Stats that determine how well a creature takes hits.
    pub const DEFENSIVE: [Stat; 3] = [Stat::HP, Stat::Def, Stat::SpDef];

    /// Checks if the stat is one of [`Stat::OFFENSIVE`].
    pub fn is_offensive(&self) -> bool {
        Self::OFFENSIVE.contains(self)
    }
}

/// A full table of base stats.
///
/// Stats missing from serialized data are zero.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatTable {
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the stat table.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let stat = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *stat = value;
    }

    /// Creates an iterator over all stat entries, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// Sums up all stats in the table.
    pub fn sum(&self) -> u32 {
        self.entries().map(|(_, value)| value as u32).sum()
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}


#[cfg(test)]
mod stat_table_test {
    use crate::{
        Stat,
        StatTable,
    };

    #[test]
    fn missing_stats_deserialize_to_zero() {
        let table = serde_json::from_str::<StatTable>(r#"{ "hp": 45, "spe": 90 }"#).unwrap();
        pretty_assertions::assert_eq!(
            table,
            StatTable {
                hp: 45,
                atk: 0,
                def: 0,
                spa: 0,
                spd: 0,
                spe: 90,
            }
        );
    }

    #[test]
    fn sets_and_gets_associated_value() {
        let mut st = StatTable::default();
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            st.set(stat, i as u16 * 10);
        }
        assert_eq!(st.get(Stat::HP), 0);
        assert_eq!(st.get(Stat::Atk), 10);
        assert_eq!(st.get(Stat::Def), 20);
        assert_eq!(st.get(Stat::SpAtk), 30);
        assert_eq!(st.get(Stat::SpDef), 40);
        assert_eq!(st.get(Stat::Spe), 50);
    }

    #[test]
    fn sums() {
        let st = StatTable::from_iter([
            (Stat::HP, 100),
            (Stat::Atk, 120),
            (Stat::Def, 120),
            (Stat::SpAtk, 150),
            (Stat::SpDef, 100),
            (Stat::Spe, 90),
        ]);
        assert_eq!(st.sum(), 680);
    }
}
