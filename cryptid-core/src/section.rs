//! Board sections: the six 18-tile building blocks of a board

use crate::axial::Axial;
use crate::error::{Error, Result};
use crate::hex::Hex;
use crate::layout::Layout;
use crate::tile::{AnimalTerritory, Terrain, Tile};
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Tiles per section
pub const SECTION_TILES: usize = 18;

/// Sections per board
pub const SECTION_COUNT: usize = 6;

/// Inverting a section maps each hex `h` to `anchor - h`, which swaps
/// doubled-height (0, 0) and (5, 5) and keeps the section in its 6x6 frame
pub const INVERSION_ANCHOR: Axial = doubled_height(5, 5);

/// Absolute doubled-height (col, row) offset of each placement slot
pub const SLOT_OFFSETS: [Hex; SECTION_COUNT] = [
    slot(0, 0),
    slot(0, 6),
    slot(0, 12),
    slot(6, 0),
    slot(6, 6),
    slot(6, 12),
];

const fn slot(col: i32, row: i32) -> Hex {
    Hex::on_grid(doubled_height(col, row), Layout::DoubledHeight)
}

/// Table coordinates only: small, even-parity pairs
const fn doubled_height(col: i32, row: i32) -> Axial {
    let (q, r) = Layout::DoubledHeight.axial_parts(col as i64, row as i64);
    Axial::new(q as i32, r as i32)
}

/// An 18-tile block keyed by canonical location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSection {
    tiles: FxHashMap<Axial, Tile>,
}

impl BoardSection {
    /// Build a section from exactly 18 tiles at distinct locations
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self> {
        let tiles: FxHashMap<Axial, Tile> = tiles
            .into_iter()
            .map(|tile| (tile.hex.canonical(), tile))
            .collect();
        if tiles.len() != SECTION_TILES {
            return Err(Error::SectionSize(tiles.len()));
        }
        Ok(Self { tiles })
    }

    /// One of the six standard sections, numbered 1..=6
    pub fn standard(number: u8) -> Result<&'static BoardSection> {
        match number {
            1..=6 => Ok(&standard_sections()[usize::from(number) - 1]),
            _ => Err(Error::SectionIndex(number)),
        }
    }

    pub fn tile(&self, at: impl Into<Axial>) -> Option<&Tile> {
        self.tiles.get(&at.into())
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// New section with every tile moved by `translation` and re-keyed
    pub fn offset(&self, translation: &Hex) -> Result<BoardSection> {
        let tiles = self
            .tiles
            .values()
            .map(|tile| {
                let moved = tile.translated(translation)?;
                Ok((moved.hex.canonical(), moved))
            })
            .collect::<Result<FxHashMap<_, _>>>()?;
        Ok(Self { tiles })
    }

    /// Point-reflect the section inside its frame when `inverted` is set;
    /// otherwise hand back the section itself. Fails only for sections built
    /// at the edge of the grid.
    pub fn invert(&self, inverted: bool) -> Result<Cow<'_, BoardSection>> {
        if !inverted {
            return Ok(Cow::Borrowed(self));
        }
        let tiles = self
            .tiles
            .values()
            .map(|tile| {
                let at = INVERSION_ANCHOR - tile.hex.canonical();
                Ok((at, tile.relocated(Hex::from_axial(at, tile.hex.layout())?)))
            })
            .collect::<Result<FxHashMap<_, _>>>()?;
        Ok(Cow::Owned(Self { tiles }))
    }
}

/// Built once from the data tables on first use
static STANDARD_SECTIONS: LazyLock<[BoardSection; SECTION_COUNT]> =
    LazyLock::new(|| SECTION_DATA.map(|cells| section_from_cells(&cells)));

/// The six standard sections, in catalog order
pub fn standard_sections() -> &'static [BoardSection; SECTION_COUNT] {
    &STANDARD_SECTIONS
}

fn section_from_cells(cells: &SectionCells) -> BoardSection {
    let tiles = cells
        .iter()
        .map(|&(col, row, terrain, animal_territory)| {
            let tile = Tile::new(slot(col, row), terrain).with_animal_territory(animal_territory);
            (tile.hex.canonical(), tile)
        })
        .collect();
    BoardSection { tiles }
}

// ============================================================================
// SECTION DATA
// ============================================================================

/// Section-local doubled-height (col, row), terrain, animal territory
type SectionCells = [(i32, i32, Terrain, Option<AnimalTerritory>); SECTION_TILES];

use AnimalTerritory::{Bear, Cougar};
use Terrain::{Desert, Forest, Mountain, Swamp, Water};

const SECTION_DATA: [SectionCells; SECTION_COUNT] =
    [SECTION_1, SECTION_2, SECTION_3, SECTION_4, SECTION_5, SECTION_6];

#[rustfmt::skip]
const SECTION_1: SectionCells = [
    (0, 0, Water, None), (0, 2, Swamp, None), (0, 4, Swamp, None),
    (1, 1, Water, None), (1, 3, Swamp, None), (1, 5, Swamp, None),
    (2, 0, Water, None), (2, 2, Water, None), (2, 4, Desert, None),
    (3, 1, Water, None), (3, 3, Desert, None), (3, 5, Desert, Some(Bear)),
    (4, 0, Forest, None), (4, 2, Forest, None), (4, 4, Desert, Some(Bear)),
    (5, 1, Forest, None), (5, 3, Forest, None), (5, 5, Forest, Some(Bear)),
];

#[rustfmt::skip]
const SECTION_2: SectionCells = [
    (0, 0, Swamp, Some(Cougar)), (0, 2, Swamp, None), (0, 4, Swamp, None),
    (1, 1, Forest, Some(Cougar)), (1, 3, Swamp, None), (1, 5, Mountain, None),
    (2, 0, Forest, Some(Cougar)), (2, 2, Forest, None), (2, 4, Mountain, None),
    (3, 1, Forest, None), (3, 3, Desert, None), (3, 5, Mountain, None),
    (4, 0, Forest, None), (4, 2, Desert, None), (4, 4, Mountain, None),
    (5, 1, Forest, None), (5, 3, Desert, None), (5, 5, Desert, None),
];

#[rustfmt::skip]
const SECTION_3: SectionCells = [
    (0, 0, Swamp, None), (0, 2, Swamp, Some(Cougar)), (0, 4, Mountain, Some(Cougar)),
    (1, 1, Swamp, None), (1, 3, Swamp, Some(Cougar)), (1, 5, Mountain, None),
    (2, 0, Forest, None), (2, 2, Forest, None), (2, 4, Mountain, None),
    (3, 1, Forest, None), (3, 3, Mountain, None), (3, 5, Mountain, None),
    (4, 0, Forest, None), (4, 2, Water, None), (4, 4, Water, None),
    (5, 1, Water, None), (5, 3, Water, None), (5, 5, Water, None),
];

#[rustfmt::skip]
const SECTION_4: SectionCells = [
    (0, 0, Desert, None), (0, 2, Desert, None), (0, 4, Desert, None),
    (1, 1, Desert, None), (1, 3, Desert, None), (1, 5, Desert, None),
    (2, 0, Mountain, None), (2, 2, Mountain, None), (2, 4, Desert, None),
    (3, 1, Mountain, None), (3, 3, Water, None), (3, 5, Forest, None),
    (4, 0, Mountain, None), (4, 2, Water, None), (4, 4, Forest, None),
    (5, 1, Mountain, None), (5, 3, Water, Some(Cougar)), (5, 5, Forest, Some(Cougar)),
];

#[rustfmt::skip]
const SECTION_5: SectionCells = [
    (0, 0, Swamp, None), (0, 2, Swamp, None), (0, 4, Desert, None),
    (1, 1, Swamp, None), (1, 3, Desert, None), (1, 5, Desert, None),
    (2, 0, Swamp, None), (2, 2, Desert, None), (2, 4, Water, None),
    (3, 1, Mountain, None), (3, 3, Water, None), (3, 5, Water, None),
    (4, 0, Mountain, None), (4, 2, Mountain, None), (4, 4, Water, Some(Bear)),
    (5, 1, Mountain, None), (5, 3, Mountain, Some(Bear)), (5, 5, Water, Some(Bear)),
];

#[rustfmt::skip]
const SECTION_6: SectionCells = [
    (0, 0, Desert, Some(Bear)), (0, 2, Mountain, Some(Bear)), (0, 4, Mountain, None),
    (1, 1, Desert, None), (1, 3, Mountain, None), (1, 5, Water, None),
    (2, 0, Swamp, None), (2, 2, Swamp, None), (2, 4, Water, None),
    (3, 1, Swamp, None), (3, 3, Swamp, None), (3, 5, Water, None),
    (4, 0, Swamp, None), (4, 2, Forest, None), (4, 4, Water, None),
    (5, 1, Forest, None), (5, 3, Forest, None), (5, 5, Forest, None),
];
