//! Clues: spatial predicates over a board
//!
//! Each clue asks whether a tile could hold the hidden habitat. Range clues
//! look for a matching tile within a fixed radius (the tile itself
//! included); a negated clue inverts the answer.

use crate::board::Board;
use crate::error::{Error, Result};
use crate::tile::{AnimalTerritory, Color, Shape, Terrain, Tile};
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// Two different terrains, stored sorted so `{A, B} == {B, A}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Terrain>", into = "Vec<Terrain>")]
pub struct TerrainPair([Terrain; 2]);

impl TerrainPair {
    pub fn new(a: Terrain, b: Terrain) -> Result<Self> {
        if a == b {
            return Err(Error::DuplicateTerrain(a));
        }
        Ok(Self([a.min(b), a.max(b)]))
    }

    pub fn terrains(&self) -> [Terrain; 2] {
        self.0
    }

    pub fn contains(&self, terrain: Terrain) -> bool {
        self.0.contains(&terrain)
    }
}

impl TryFrom<&[Terrain]> for TerrainPair {
    type Error = Error;

    fn try_from(terrains: &[Terrain]) -> Result<Self> {
        match *terrains {
            [a, b] => TerrainPair::new(a, b),
            _ => Err(Error::TerrainCount(terrains.len())),
        }
    }
}

impl TryFrom<Vec<Terrain>> for TerrainPair {
    type Error = Error;

    fn try_from(terrains: Vec<Terrain>) -> Result<Self> {
        TerrainPair::try_from(terrains.as_slice())
    }
}

impl From<TerrainPair> for Vec<Terrain> {
    fn from(pair: TerrainPair) -> Vec<Terrain> {
        pair.0.to_vec()
    }
}

/// The closed set of clue predicates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClueKind {
    /// Tile terrain is one of the pair
    OnOneOfTwoTerrain { terrains: TerrainPair },
    /// A tile within 1 has this terrain
    WithinOneSpaceOfTerrain { terrain: Terrain },
    /// A tile within 1 lies in any animal territory
    WithinOneSpaceOfEitherAnimalTerritory,
    /// A tile within 2 holds a structure of this shape
    WithinTwoSpacesOfShape { shape: Shape },
    /// A tile within 2 lies in this animal territory
    WithinTwoSpacesOfAnimalTerritory { animal_territory: AnimalTerritory },
    /// A tile within 3 holds a structure of this color
    WithinThreeSpacesOfColor { color: Color },
}

impl ClueKind {
    /// Search radius around the tile; 0 means only the tile itself
    pub fn radius(&self) -> u32 {
        match self {
            ClueKind::OnOneOfTwoTerrain { .. } => 0,
            ClueKind::WithinOneSpaceOfTerrain { .. }
            | ClueKind::WithinOneSpaceOfEitherAnimalTerritory => 1,
            ClueKind::WithinTwoSpacesOfShape { .. }
            | ClueKind::WithinTwoSpacesOfAnimalTerritory { .. } => 2,
            ClueKind::WithinThreeSpacesOfColor { .. } => 3,
        }
    }

    /// Whether a single tile is what the clue looks for
    fn matches(&self, tile: &Tile) -> bool {
        match *self {
            ClueKind::OnOneOfTwoTerrain { terrains } => terrains.contains(tile.terrain),
            ClueKind::WithinOneSpaceOfTerrain { terrain } => tile.terrain == terrain,
            ClueKind::WithinOneSpaceOfEitherAnimalTerritory => tile.animal_territory.is_some(),
            ClueKind::WithinTwoSpacesOfShape { shape } => tile.shape() == Some(shape),
            ClueKind::WithinTwoSpacesOfAnimalTerritory { animal_territory } => {
                tile.animal_territory == Some(animal_territory)
            }
            ClueKind::WithinThreeSpacesOfColor { color } => tile.color() == Some(color),
        }
    }
}

/// A clue kind plus a negation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clue {
    #[serde(flatten)]
    pub kind: ClueKind,
    #[serde(default)]
    pub negated: bool,
}

impl Clue {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub const fn new(kind: ClueKind) -> Self {
        Self { kind, negated: false }
    }

    pub fn on_one_of_two_terrain(a: Terrain, b: Terrain) -> Result<Self> {
        Ok(Self::new(ClueKind::OnOneOfTwoTerrain { terrains: TerrainPair::new(a, b)? }))
    }

    pub const fn within_one_space_of_terrain(terrain: Terrain) -> Self {
        Self::new(ClueKind::WithinOneSpaceOfTerrain { terrain })
    }

    pub const fn within_one_space_of_either_animal_territory() -> Self {
        Self::new(ClueKind::WithinOneSpaceOfEitherAnimalTerritory)
    }

    pub const fn within_two_spaces_of_shape(shape: Shape) -> Self {
        Self::new(ClueKind::WithinTwoSpacesOfShape { shape })
    }

    pub const fn within_two_spaces_of_animal_territory(animal_territory: AnimalTerritory) -> Self {
        Self::new(ClueKind::WithinTwoSpacesOfAnimalTerritory { animal_territory })
    }

    pub const fn within_three_spaces_of_color(color: Color) -> Self {
        Self::new(ClueKind::WithinThreeSpacesOfColor { color })
    }

    // ========================================================================
    // EVALUATION
    // ========================================================================

    pub fn radius(&self) -> u32 {
        self.kind.radius()
    }

    /// The predicate before negation. Stops at the first matching tile.
    pub fn resolve(&self, tile: &Tile, board: &Board) -> bool {
        let found = match self.kind {
            ClueKind::OnOneOfTwoTerrain { .. } => self.kind.matches(tile),
            _ => board
                .tiles_in_range(tile.hex.canonical(), self.radius())
                .any(|candidate| self.kind.matches(candidate)),
        };
        tracing::trace!("{:?} at {} resolved to {}", self.kind, tile.hex, found);
        found
    }

    /// Whether `tile` could hold the habitat under this clue
    pub fn check_space(&self, tile: &Tile, board: &Board) -> bool {
        self.resolve(tile, board) != self.negated
    }
}

impl Not for Clue {
    type Output = Clue;

    fn not(self) -> Clue {
        Clue { negated: !self.negated, ..self }
    }
}
