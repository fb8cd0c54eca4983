//! Territory nodes and the factions that contest them.
//!
//! A territory is a node in the board graph. The static part (names, the
//! supply-center flag) comes from the territory-definition dataset; the
//! mutable part (owner, unit strength, unit type, score) is overwritten by
//! synchronization and the scoring pass each turn.

/// One of the seven great powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nationality {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

/// All seven nationalities in standard order.
pub const ALL_NATIONALITIES: [Nationality; 7] = [
    Nationality::Austria,
    Nationality::England,
    Nationality::France,
    Nationality::Germany,
    Nationality::Italy,
    Nationality::Russia,
    Nationality::Turkey,
];

impl Nationality {
    /// Returns the lowercase full name of this nationality.
    pub const fn name(self) -> &'static str {
        match self {
            Nationality::Austria => "austria",
            Nationality::England => "england",
            Nationality::France => "france",
            Nationality::Germany => "germany",
            Nationality::Italy => "italy",
            Nationality::Russia => "russia",
            Nationality::Turkey => "turkey",
        }
    }

    /// Parses a nationality from its lowercase full name.
    pub fn from_name(name: &str) -> Option<Nationality> {
        match name {
            "austria" => Some(Nationality::Austria),
            "england" => Some(Nationality::England),
            "france" => Some(Nationality::France),
            "germany" => Some(Nationality::Germany),
            "italy" => Some(Nationality::Italy),
            "russia" => Some(Nationality::Russia),
            "turkey" => Some(Nationality::Turkey),
            _ => None,
        }
    }
}

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the uppercase abbreviation used in order notation.
    pub const fn notation_char(self) -> char {
        match self {
            UnitType::Army => 'A',
            UnitType::Fleet => 'F',
        }
    }

    /// Parses a unit type from its lowercase name.
    pub fn from_name(name: &str) -> Option<UnitType> {
        match name {
            "army" => Some(UnitType::Army),
            "fleet" => Some(UnitType::Fleet),
            _ => None,
        }
    }
}

/// Tags an adjacency edge with the unit type that may traverse it.
///
/// A pair of territories may carry both an army edge and a fleet edge; the
/// board is a multigraph, not a simple graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Army,
    Fleet,
}

/// Dense index of a territory within a board.
///
/// Ids are assigned at build time in lexicographic short-name order, so a
/// given definition dataset always produces the same numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TerritoryId(pub(crate) usize);

impl TerritoryId {
    /// Returns the raw index for array lookups.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A territory node: static identity plus the per-turn overlay.
#[derive(Debug, Clone)]
pub struct Territory {
    /// Short identifier, e.g. "vie".
    pub short_name: String,
    /// Full display name, e.g. "Vienna".
    pub display_name: String,
    pub is_supply_center: bool,
    pub owner: Option<Nationality>,
    pub unit_strength: u32,
    pub unit_type: Option<UnitType>,
    pub score: f64,
}
