use rand::seq::SliceRandom;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Colour half of a room code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Color {
    Purple,
    Gold,
    Red,
    Blue,
    Green,
    Orange,
    Pink,
    Teal,
}

/// Animal half of a room code (Australian fauna)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Animal {
    Koala,
    Kangaroo,
    Echidna,
    Wombat,
    Platypus,
    Dingo,
    Quokka,
    Wallaby,
    Kookaburra,
    Cassowary,
    Bilby,
    Numbat,
}

/// Human-speakable room code of the form `COLOR-ANIMAL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomCode {
    pub color: Color,
    pub animal: Animal,
}

impl RoomCode {
    pub fn new(color: Color, animal: Animal) -> Self {
        Self { color, animal }
    }

    /// Every code in the fixed colour x animal space
    pub fn all() -> Vec<RoomCode> {
        Color::iter()
            .flat_map(|color| Animal::iter().map(move |animal| RoomCode::new(color, animal)))
            .collect()
    }

    /// Size of the code space
    pub fn space_size() -> usize {
        Color::iter().count() * Animal::iter().count()
    }

    /// Parses a code in any casing, e.g. `teal-wombat`
    pub fn parse(raw: &str) -> Option<RoomCode> {
        let (color, animal) = raw.trim().split_once('-')?;
        Some(RoomCode::new(color.parse().ok()?, animal.parse().ok()?))
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.color, self.animal)
    }
}

/// Canonical form used as the registry key: trimmed and uppercased
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Supplies candidate room codes in the order they should be tried
pub trait CodeGenerator: Send + Sync {
    fn candidates(&self) -> Vec<RoomCode>;
}

/// Tries every code exactly once in a random order, so creation is bounded
/// by the size of the space
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn candidates(&self) -> Vec<RoomCode> {
        let mut codes = RoomCode::all();
        codes.shuffle(&mut rand::rng());
        codes
    }
}
