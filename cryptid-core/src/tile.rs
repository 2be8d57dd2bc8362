//! Tile attributes: terrain, animal territory, structures

use crate::axial::Axial;
use crate::error::Result;
use crate::hex::Hex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Terrain {
    Water,
    Mountain,
    Forest,
    Swamp,
    Desert,
}

impl Terrain {
    pub const ALL: [Terrain; 5] = [
        Terrain::Water,
        Terrain::Mountain,
        Terrain::Forest,
        Terrain::Swamp,
        Terrain::Desert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Terrain::Water => "WATER",
            Terrain::Mountain => "MOUNTAIN",
            Terrain::Forest => "FOREST",
            Terrain::Swamp => "SWAMP",
            Terrain::Desert => "DESERT",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimalTerritory {
    Bear,
    Cougar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    StandingStone,
    AbandonedShack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Green,
    Blue,
    Black,
}

/// A structure placed on a tile during setup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Structure {
    pub shape: Shape,
    pub color: Color,
}

impl Structure {
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }
}

/// One cell of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub hex: Hex,
    pub terrain: Terrain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal_territory: Option<AnimalTerritory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,
}

impl Tile {
    pub const fn new(hex: Hex, terrain: Terrain) -> Self {
        Self {
            hex,
            terrain,
            animal_territory: None,
            structure: None,
        }
    }

    pub fn with_animal_territory(mut self, animal_territory: Option<AnimalTerritory>) -> Self {
        self.animal_territory = animal_territory;
        self
    }

    pub fn with_structure(mut self, structure: Structure) -> Self {
        self.structure = Some(structure);
        self
    }

    /// Same attributes, hex moved by `offset` (layouts must match)
    pub fn translated(&self, offset: &Hex) -> Result<Tile> {
        Ok(self.relocated(self.hex.try_add(offset)?))
    }

    /// Same attributes at another hex
    pub fn relocated(&self, hex: Hex) -> Tile {
        Tile { hex, ..*self }
    }

    pub fn shape(&self) -> Option<Shape> {
        self.structure.map(|s| s.shape)
    }

    pub fn color(&self) -> Option<Color> {
        self.structure.map(|s| s.color)
    }
}

impl From<&Tile> for Axial {
    fn from(tile: &Tile) -> Axial {
        tile.hex.canonical()
    }
}
