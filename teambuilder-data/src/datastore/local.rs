use std::{
    collections::BTreeMap,
    env,
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use log::debug;
use serde::{
    Deserialize,
    Serialize,
    de::DeserializeOwned,
};
use unicase::UniCase;

use crate::{
    Availability,
    CreatureData,
    CreatureId,
    DataStore,
    DataStoreByName,
    ExclusivityGroup,
    GameData,
    GameId,
    GroupId,
    TypeChart,
};

/// An exclusivity group as stored on disk, with its members inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializedExclusivityGroup {
    #[serde(flatten)]
    group: ExclusivityGroup,
    #[serde(default)]
    members: Vec<CreatureId>,
}

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// All files are read once, on construction.
pub struct LocalDataStore {
    root: PathBuf,
    pub type_chart: TypeChart,
    pub games: BTreeMap<GameId, GameData>,
    pub creatures: BTreeMap<CreatureId, CreatureData>,
    pub availability: HashMap<GameId, Vec<Availability>>,
    pub exclusivity_groups: BTreeMap<GroupId, ExclusivityGroup>,
    pub exclusivity_members: HashMap<GroupId, Vec<CreatureId>>,
}

impl LocalDataStore {
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Games file name.
    pub const GAMES_FILE: &str = "games.json";
    /// Availability file name.
    pub const AVAILABILITY_FILE: &str = "availability.json";
    /// Exclusivity groups file name.
    pub const EXCLUSIVITY_GROUPS_FILE: &str = "exclusivity-groups.json";
    /// Creatures directory name.
    pub const CREATURES_DIR: &str = "creatures";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }
        let mut store = Self {
            root,
            type_chart: TypeChart::new(),
            games: BTreeMap::default(),
            creatures: BTreeMap::default(),
            availability: HashMap::default(),
            exclusivity_groups: BTreeMap::default(),
            exclusivity_members: HashMap::default(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The root directory data is read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn initialize(&mut self) -> Result<()> {
        self.type_chart = self
            .read_file(Self::TYPE_CHART_FILE)
            .context("failed to read type chart")?;

        let games: Vec<GameData> = self
            .read_file(Self::GAMES_FILE)
            .context("failed to read games")?;
        self.games = games.into_iter().map(|game| (game.id, game)).collect();

        let availability: Vec<Availability> = self
            .read_file(Self::AVAILABILITY_FILE)
            .context("failed to read availability")?;
        for row in availability {
            self.availability.entry(row.game).or_default().push(row);
        }

        let groups: Vec<SerializedExclusivityGroup> = self
            .read_file(Self::EXCLUSIVITY_GROUPS_FILE)
            .context("failed to read exclusivity groups")?;
        for SerializedExclusivityGroup { group, members } in groups {
            self.exclusivity_members.insert(group.id, members);
            self.exclusivity_groups.insert(group.id, group);
        }

        for creature in self.read_all_files_in_directory::<CreatureData>(Self::CREATURES_DIR)? {
            let id = creature.id;
            if let Some(existing) = self.creatures.insert(id, creature) {
                return Err(Error::msg(format!(
                    "creature {id} ({}) is defined more than once",
                    existing.name
                )));
            }
        }

        debug!(
            "Loaded {} games and {} creatures from {}",
            self.games.len(),
            self.creatures.len(),
            self.root.display()
        );
        Ok(())
    }

    fn read_file<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.root.join(file);
        let path_name = path.to_string_lossy().to_string();
        serde_json::from_reader(BufReader::new(
            File::open(&path).context(format!("{path_name} could not be opened"))?,
        ))
        .context(format!("failed to parse {path_name}"))
    }

    fn read_all_files_in_directory<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let mut paths = self
            .root
            .join(dir)
            .read_dir()
            .context(format!("failed to read {dir} directory"))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|extension| extension == "json")
            })
            .collect::<Vec<_>>();
        paths.sort();
        let tables = paths
            .into_iter()
            .map(|path| {
                let path_name = path.to_string_lossy().to_string();
                serde_json::from_reader::<_, Vec<T>>(BufReader::new(
                    File::open(path).context(format!("{path_name} could not be opened"))?,
                ))
                .context(format!("failed to read {dir} data from {path_name}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(tables.into_iter().flatten().collect())
    }
}

impl DataStore for LocalDataStore {
    fn all_games(&self) -> Result<Vec<GameData>> {
        Ok(self.games.values().cloned().collect())
    }

    fn all_creatures(&self) -> Result<Vec<CreatureData>> {
        Ok(self.creatures.values().cloned().collect())
    }

    fn availability(&self, game: GameId) -> Result<Vec<Availability>> {
        Ok(self.availability.get(&game).cloned().unwrap_or_default())
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn exclusivity_groups(&self, game: GameId) -> Result<Vec<ExclusivityGroup>> {
        Ok(self
            .exclusivity_groups
            .values()
            .filter(|group| group.game == game)
            .cloned()
            .collect())
    }

    fn exclusivity_members(&self, group: GroupId) -> Result<Vec<CreatureId>> {
        Ok(self
            .exclusivity_members
            .get(&group)
            .cloned()
            .unwrap_or_default())
    }

    fn get_game(&self, id: GameId) -> Result<Option<GameData>> {
        Ok(self.games.get(&id).cloned())
    }
}

impl DataStoreByName for LocalDataStore {
    fn get_game_by_name(&self, name: &str) -> Result<Option<GameData>> {
        let name = UniCase::new(name);
        Ok(self
            .games
            .values()
            .find(|game| UniCase::new(game.name.as_str()) == name)
            .cloned())
    }

    fn get_creature_by_name(&self, name: &str) -> Result<Option<CreatureData>> {
        let name = UniCase::new(name);
        Ok(self
            .creatures
            .values()
            .find(|creature| UniCase::new(creature.name.as_str()) == name)
            .cloned())
    }
}
