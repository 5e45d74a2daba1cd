use serde::Serialize;
use teambuilder_data::{
    Stat,
    StatTable,
};

/// A value for each stat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Stats<T> {
    pub hp: T,
    pub atk: T,
    pub def: T,
    pub spa: T,
    pub spd: T,
    pub spe: T,
}

impl<T> Stats<T>
where
    T: Copy,
{
    /// Creates a table with the same value for every stat.
    pub fn splat(value: T) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> T {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given stat value.
    pub fn set(&mut self, stat: Stat, value: T) {
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
}

impl Stats<f64> {
    /// Averages base stats over a set of stat tables.
    ///
    /// An empty set averages to zero.
    pub fn average<'t, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'t StatTable>,
    {
        let mut sums = Self::default();
        let mut count = 0usize;
        for table in tables {
            for (stat, value) in table.entries() {
                sums.set(stat, sums.get(stat) + value as f64);
            }
            count += 1;
        }
        if count == 0 {
            return sums;
        }
        for stat in Stat::ALL {
            sums.set(stat, sums.get(stat) / count as f64);
        }
        sums
    }

    /// Sums the values of the given stats.
    pub fn sum_of(&self, stats: &[Stat]) -> f64 {
        stats.iter().map(|stat| self.get(*stat)).sum()
    }
}

#[cfg(test)]
mod stats_test {
    use teambuilder_data::{
        Stat,
        StatTable,
    };

    use crate::Stats;

    #[test]
    fn averages_stat_tables() {
        let tables = [
            StatTable {
                hp: 100,
                atk: 50,
                def: 0,
                spa: 10,
                spd: 20,
                spe: 30,
            },
            StatTable {
                hp: 50,
                atk: 50,
                def: 25,
                spa: 20,
                spd: 20,
                spe: 0,
            },
        ];
        pretty_assertions::assert_eq!(
            Stats::average(&tables),
            Stats {
                hp: 75.0,
                atk: 50.0,
                def: 12.5,
                spa: 15.0,
                spd: 20.0,
                spe: 15.0,
            }
        );
    }

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(Stats::average([]), Stats::splat(0.0));
    }

    #[test]
    fn sums_selected_stats() {
        let mut stats = Stats::<f64>::splat(1.0);
        stats.set(Stat::Atk, 5.0);
        assert_eq!(stats.sum_of(&Stat::OFFENSIVE), 7.0);
        assert_eq!(stats.sum_of(&Stat::DEFENSIVE), 3.0);
    }
}
