//! Cryptid Core - Board geometry and clue engine
//!
//! This crate provides the spatial model of the Cryptid board game:
//! - Hex coordinates in eight interchangeable layouts (axial, cube, doubled, offset)
//! - Tiles, board sections and the assembled 108-tile board
//! - Clue predicates and habitat search
//! - Setup cards loaded from JSON

pub mod error;
pub mod axial;
pub mod layout;
pub mod hex;
pub mod tile;
pub mod section;
pub mod board;
pub mod clue;
pub mod setup;

// Re-exports for convenient access
pub use error::{Error, Result};
pub use axial::{Axial, AXIAL_DIRECTIONS, MAX_LENGTH};
pub use layout::{Layout, ALL_LAYOUTS};
pub use hex::Hex;
pub use tile::{AnimalTerritory, Color, Shape, Structure, Terrain, Tile};
pub use section::{standard_sections, BoardSection, SLOT_OFFSETS};
pub use board::{Board, BOARD_TILES};
pub use clue::{Clue, ClueKind, TerrainPair};
pub use setup::{SetupCard, StructurePlacement};
