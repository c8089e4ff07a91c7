// src/domain/record/entity.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One catalog entry as fetched from the remote catalog or restored from disk.
///
/// Fields are private: a Record never changes after construction.
/// Equality and hashing look at `id` only, which is what the fetch cache
/// de-duplicates on. Use [`Record::same_content`] for full comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id: u32,

    name: String,

    #[serde(default)]
    image_url: String,

    #[serde(default)]
    types: Vec<RecordType>,

    #[serde(default)]
    stats: Stats,
}

/// The six base stats. Absent values are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// Closed set of category tags. Serialized in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Record {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        image_url: impl Into<String>,
        types: Vec<RecordType>,
        stats: Stats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
            types,
            stats,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn types(&self) -> &[RecordType] {
        &self.types
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn has_type(&self, record_type: RecordType) -> bool {
        self.types.contains(&record_type)
    }

    /// Field-by-field comparison, unlike `==` which only compares ids.
    pub fn same_content(&self, other: &Record) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.image_url == other.image_url
            && self.types == other.types
            && self.stats == other.stats
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03} - {}", self.id, self.name.to_uppercase())
    }
}

impl Stats {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Sum of the six stats, widened so any catalog values fit
    pub fn total(&self) -> u64 {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }
}

impl RecordType {
    pub const ALL: [RecordType; 18] = [
        RecordType::Normal,
        RecordType::Fire,
        RecordType::Water,
        RecordType::Electric,
        RecordType::Grass,
        RecordType::Ice,
        RecordType::Fighting,
        RecordType::Poison,
        RecordType::Ground,
        RecordType::Flying,
        RecordType::Psychic,
        RecordType::Bug,
        RecordType::Rock,
        RecordType::Ghost,
        RecordType::Dragon,
        RecordType::Dark,
        RecordType::Steel,
        RecordType::Fairy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Normal => "NORMAL",
            RecordType::Fire => "FIRE",
            RecordType::Water => "WATER",
            RecordType::Electric => "ELECTRIC",
            RecordType::Grass => "GRASS",
            RecordType::Ice => "ICE",
            RecordType::Fighting => "FIGHTING",
            RecordType::Poison => "POISON",
            RecordType::Ground => "GROUND",
            RecordType::Flying => "FLYING",
            RecordType::Psychic => "PSYCHIC",
            RecordType::Bug => "BUG",
            RecordType::Rock => "ROCK",
            RecordType::Ghost => "GHOST",
            RecordType::Dragon => "DRAGON",
            RecordType::Dark => "DARK",
            RecordType::Steel => "STEEL",
            RecordType::Fairy => "FAIRY",
        }
    }

    /// Maps a catalog type name (`"grass"`, `"Fire"`, ...) to its tag.
    /// Anything outside the closed set yields `None`.
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_api_name(s).ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
