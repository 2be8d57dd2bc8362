//! Setup cards: everything needed to lay out one game

use crate::board::Board;
use crate::clue::Clue;
use crate::error::{Error, Result};
use crate::hex::Hex;
use crate::section::SECTION_COUNT;
use crate::tile::Structure;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A structure and the board location it goes on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructurePlacement {
    pub location: Hex,
    pub structure: Structure,
}

/// Board layout, structures and per-player-count clues of one game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupCard {
    #[serde(default)]
    pub name: String,
    /// Section number (1..=6) for each slot
    pub board_sections: [u8; SECTION_COUNT],
    #[serde(default)]
    pub board_sections_inverted: [bool; SECTION_COUNT],
    pub structures: Vec<StructurePlacement>,
    pub clues_3_player: [Clue; 3],
    pub clues_4_player: [Clue; 4],
    pub clues_5_player: [Clue; 5],
}

impl SetupCard {
    /// The clues dealt to a game with `players` players
    pub fn clues(&self, players: usize) -> Result<&[Clue]> {
        match players {
            3 => Ok(&self.clues_3_player),
            4 => Ok(&self.clues_4_player),
            5 => Ok(&self.clues_5_player),
            _ => Err(Error::PlayerCount(players)),
        }
    }

    pub fn to_board(&self) -> Result<Board> {
        Board::from_setup_card(self)
    }

    /// Check that the card assembles into a board with all structures placed
    pub fn validate(&self) -> Result<()> {
        self.to_board().map(|_| ())
    }

    /// Parse and validate a card
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let card: SetupCard = serde_json::from_str(json)?;
        card.validate()?;
        Ok(card)
    }

    /// Load card from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let card = Self::from_json(&content)?;
        tracing::debug!("Loaded setup card {:?} from {}", card.name, path.display());
        Ok(card)
    }

    /// Save card to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
