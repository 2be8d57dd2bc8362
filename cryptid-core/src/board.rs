//! The assembled 108-tile board

use crate::axial::Axial;
use crate::clue::Clue;
use crate::error::{Error, Result};
use crate::hex::Hex;
use crate::section::{BoardSection, SECTION_COUNT, SECTION_TILES, SLOT_OFFSETS};
use crate::setup::SetupCard;
use crate::tile::{Structure, Tile};
use rustc_hash::FxHashMap;

/// Tiles on every board
pub const BOARD_TILES: usize = SECTION_COUNT * SECTION_TILES;

/// Six sections merged into one map keyed by canonical location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: FxHashMap<Axial, Tile>,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Place section `order[i]` (numbered 1..=6) in slot `i`, point-reflected
    /// first when `orientation[i]` is set. Sections may repeat.
    pub fn from_board_sections(
        order: [u8; SECTION_COUNT],
        orientation: [bool; SECTION_COUNT],
    ) -> Result<Self> {
        let mut tiles = FxHashMap::default();
        tiles.reserve(BOARD_TILES);

        for ((number, inverted), slot) in order.into_iter().zip(orientation).zip(&SLOT_OFFSETS) {
            let placed = BoardSection::standard(number)?.invert(inverted)?.offset(slot)?;
            tiles.extend(placed.tiles().map(|tile| (tile.hex.canonical(), *tile)));
        }

        if tiles.len() != BOARD_TILES {
            return Err(Error::BoardSize(tiles.len()));
        }
        tracing::debug!("Assembled board: sections={:?}, inverted={:?}", order, orientation);
        Ok(Self { tiles })
    }

    /// Assemble the card's sections and attach its structures
    pub fn from_setup_card(card: &SetupCard) -> Result<Self> {
        card.structures.iter().try_fold(
            Self::from_board_sections(card.board_sections, card.board_sections_inverted)?,
            |board, placement| board.place_structure(placement.structure, &placement.location),
        )
    }

    // ========================================================================
    // SETUP
    // ========================================================================

    /// Attach a structure, return new board
    pub fn place_structure(&self, structure: Structure, location: &Hex) -> Result<Self> {
        let mut new_board = self.clone();
        let tile = new_board
            .tiles
            .get_mut(&location.canonical())
            .ok_or(Error::MissingTile(*location))?;
        if tile.structure.is_some() {
            return Err(Error::StructureOccupied(*location));
        }
        tile.structure = Some(structure);
        tracing::debug!("Placed {:?} at {}", structure, location);
        Ok(new_board)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

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

    /// Board tiles at distance `0..=radius`, the center included when present.
    /// Cells off the board are skipped.
    pub fn get_tiles_in_range(&self, center: impl Into<Axial>, radius: u32) -> Vec<&Tile> {
        center
            .into()
            .within_range(radius)
            .filter_map(|at| self.tiles.get(&at))
            .collect()
    }

    /// Lazy form of `get_tiles_in_range`
    pub(crate) fn tiles_in_range(&self, center: Axial, radius: u32) -> impl Iterator<Item = &Tile> {
        center.within_range(radius).filter_map(|at| self.tiles.get(&at))
    }

    /// Tiles that satisfy every clue, ordered by canonical location
    pub fn habitat_candidates(&self, clues: &[Clue]) -> Vec<&Tile> {
        let mut candidates: Vec<&Tile> = self
            .tiles
            .values()
            .filter(|tile| clues.iter().all(|clue| clue.check_space(tile, self)))
            .collect();
        candidates.sort_by_key(|tile| tile.hex.canonical());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{AnimalTerritory, Color, Shape, Terrain};
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn dh(col: i32, row: i32) -> Hex {
        Hex::doubled_height(col, row).unwrap()
    }

    fn standard_board() -> Board {
        Board::from_board_sections([1, 2, 3, 4, 5, 6], [false; 6]).unwrap()
    }

    fn terrain_counts(board: &Board) -> FxHashMap<Terrain, usize> {
        let mut counts = FxHashMap::default();
        for tile in board.tiles() {
            *counts.entry(tile.terrain).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_standard_board() {
        let board = standard_board();
        assert_eq!(board.len(), BOARD_TILES);

        let tile = board.tile(&dh(10, 10)).unwrap();
        assert_eq!(tile.terrain, Terrain::Water);
        assert_eq!(tile.animal_territory, Some(AnimalTerritory::Bear));
        assert!(tile.structure.is_none());
    }

    #[test]
    fn test_board_bounds() {
        let board = standard_board();
        let qs: Vec<i32> = board.tiles().map(|t| t.hex.q()).collect();
        let rs: Vec<i32> = board.tiles().map(|t| t.hex.r()).collect();
        assert_eq!(qs.iter().min(), Some(&0));
        assert_eq!(qs.iter().max(), Some(&11));
        assert_eq!(rs.iter().min(), Some(&-5));
        assert_eq!(rs.iter().max(), Some(&8));
    }

    #[test]
    fn test_repeated_sections_with_inversion() {
        let board =
            Board::from_board_sections([1; 6], [false, false, true, true, false, false]).unwrap();
        assert_eq!(board.len(), BOARD_TILES);

        let expected = [
            ((0, 0), Terrain::Water, None),
            ((0, 6), Terrain::Water, None),
            ((0, 12), Terrain::Forest, Some(AnimalTerritory::Bear)),
            ((6, 0), Terrain::Forest, Some(AnimalTerritory::Bear)),
            ((6, 6), Terrain::Water, None),
            ((6, 12), Terrain::Water, None),
        ];
        for ((col, row), terrain, animal) in expected {
            let tile = board.tile(&dh(col, row)).unwrap();
            assert_eq!(tile.terrain, terrain, "slot ({col}, {row})");
            assert_eq!(tile.animal_territory, animal, "slot ({col}, {row})");
        }
    }

    #[test]
    fn test_invalid_section_number() {
        let err = Board::from_board_sections([1, 2, 3, 4, 5, 7], [false; 6]).unwrap_err();
        assert_eq!(err, Error::SectionIndex(7));
        assert!(err.is_construction());
    }

    #[test]
    fn test_terrain_totals_for_random_layouts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            let mut order = [1, 2, 3, 4, 5, 6];
            order.shuffle(&mut rng);
            let orientation: [bool; 6] = std::array::from_fn(|_| rng.gen_bool(0.5));

            let board = Board::from_board_sections(order, orientation).unwrap();
            assert_eq!(board.len(), BOARD_TILES);

            let counts = terrain_counts(&board);
            assert_eq!(counts[&Terrain::Forest], 22);
            assert_eq!(counts[&Terrain::Water], 22);
            assert_eq!(counts[&Terrain::Desert], 21);
            assert_eq!(counts[&Terrain::Mountain], 22);
            assert_eq!(counts[&Terrain::Swamp], 21);

            let bears = board
                .tiles()
                .filter(|t| t.animal_territory == Some(AnimalTerritory::Bear))
                .count();
            let cougars = board
                .tiles()
                .filter(|t| t.animal_territory == Some(AnimalTerritory::Cougar))
                .count();
            assert_eq!((bears, cougars), (8, 8));
        }
    }

    #[test]
    fn test_random_repeated_sections_always_full() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let order: [u8; 6] = std::array::from_fn(|_| rng.gen_range(1..=6));
            let orientation: [bool; 6] = std::array::from_fn(|_| rng.gen_bool(0.5));
            let board = Board::from_board_sections(order, orientation).unwrap();
            assert_eq!(board.len(), BOARD_TILES);
        }
    }

    #[test]
    fn test_tiles_in_range_at_corner() {
        let board =
            Board::from_board_sections([1; 6], [false, false, true, true, false, false]).unwrap();
        assert_eq!(board.get_tiles_in_range(&dh(0, 0), 0).len(), 1);
        assert_eq!(board.get_tiles_in_range(&dh(0, 0), 1).len(), 3);
        assert_eq!(board.get_tiles_in_range(&dh(0, 0), 2).len(), 7);
        assert_eq!(board.get_tiles_in_range(&dh(0, 0), 3).len(), 12);
        assert_eq!(board.get_tiles_in_range(&dh(5, 5), 1).len(), 7);
        assert_eq!(board.get_tiles_in_range(&dh(5, 5), 3).len(), 36);
    }

    #[test]
    fn test_tiles_in_range_accepts_tiles_and_other_layouts() {
        let board = standard_board();
        let tile = *board.tile(&dh(5, 5)).unwrap();
        let from_tile = board.get_tiles_in_range(&tile, 2);
        let from_axial = board.get_tiles_in_range(dh(5, 5).to_layout(crate::Layout::OddColumn), 2);
        assert_eq!(from_tile.len(), from_axial.len());
        assert!(from_tile.iter().all(|t| t.hex.distance(&tile.hex) <= 2));

        // far off the board
        assert!(board.get_tiles_in_range(Axial::new(100, 100), 3).is_empty());
    }

    #[test]
    fn test_place_structure() {
        let board = standard_board();
        let shack = Structure::new(Shape::AbandonedShack, Color::Green);
        let placed = board.place_structure(shack, &dh(4, 2)).unwrap();

        assert_eq!(placed.tile(&dh(4, 2)).unwrap().structure, Some(shack));
        // copy on write
        assert!(board.tile(&dh(4, 2)).unwrap().structure.is_none());
        assert_eq!(placed.tiles().filter(|t| t.structure.is_some()).count(), 1);

        let stone = Structure::new(Shape::StandingStone, Color::Green);
        let err = placed.place_structure(stone, &dh(4, 2)).unwrap_err();
        assert_eq!(err, Error::StructureOccupied(dh(4, 2)));

        let err = board.place_structure(stone, &dh(20, 20)).unwrap_err();
        assert_eq!(err, Error::MissingTile(dh(20, 20)));
        assert!(err.is_lookup());
    }
}
