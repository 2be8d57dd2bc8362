//! Error types

use crate::hex::Hex;
use crate::layout::Layout;
use crate::tile::Terrain;

/// Errors raised by coordinate construction, hex arithmetic, board assembly
/// and clue construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cube coordinates must satisfy q + r + s = 0, got q={q}, r={r}, s={s}")]
    NotPlanar { q: i32, r: i32, s: i32 },

    #[error("{layout} coordinates must share parity, got col={col}, row={row}")]
    ParityMismatch { layout: Layout, col: i64, row: i64 },

    #[error("location q={q}, r={r} is off the grid, which ends 2^28 steps from the origin")]
    OffGrid { q: i64, r: i64 },

    #[error("hex arithmetic is only defined within one layout, got {lhs} and {rhs}")]
    LayoutMismatch { lhs: Layout, rhs: Layout },

    #[error("{0} coordinates are a view only and do not support vector arithmetic")]
    NotAVector(Layout),

    #[error("a terrain pair needs two different terrains, got {0} twice")]
    DuplicateTerrain(Terrain),

    #[error("a terrain pair needs exactly 2 terrains, got {0}")]
    TerrainCount(usize),

    #[error("board section index must be in 1..=6, got {0}")]
    SectionIndex(u8),

    #[error("board section must hold exactly 18 tiles, got {0}")]
    SectionSize(usize),

    #[error("board must hold exactly 108 tiles, got {0}")]
    BoardSize(usize),

    #[error("setup cards cover 3 to 5 players, got {0}")]
    PlayerCount(usize),

    #[error("no tile at {0}")]
    MissingTile(Hex),

    #[error("tile at {0} already holds a structure")]
    StructureOccupied(Hex),
}

impl Error {
    /// Invalid input data (coordinates, clue parameters, setup values)
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::NotPlanar { .. }
                | Error::ParityMismatch { .. }
                | Error::OffGrid { .. }
                | Error::DuplicateTerrain(_)
                | Error::TerrainCount(_)
                | Error::SectionIndex(_)
                | Error::SectionSize(_)
                | Error::BoardSize(_)
                | Error::PlayerCount(_)
        )
    }

    /// Arithmetic between incompatible layouts
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::LayoutMismatch { .. } | Error::NotAVector(_))
    }

    /// An operation required a tile that the board does not hold (or holds
    /// in an incompatible state)
    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::MissingTile(_) | Error::StructureOccupied(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
