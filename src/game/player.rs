//! Who controls each side of a game.

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerType {
    #[default]
    Human,
    Computer,
    /// The opponent's moves arrive through a session broker.
    RemoteGuest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub player_type: PlayerType,
    /// Search depth for computer players; level 0 plays random legal moves.
    pub computer_level: Option<u8>,
}

impl Default for Player {
    fn default() -> Self {
        Self::human("Player")
    }
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_type: PlayerType::Human,
            computer_level: None,
        }
    }

    pub fn computer(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            player_type: PlayerType::Computer,
            computer_level: Some(level),
        }
    }

    pub fn remote_guest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_type: PlayerType::RemoteGuest,
            computer_level: None,
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.player_type == PlayerType::Human
    }

    #[inline]
    pub fn is_computer(&self) -> bool {
        self.player_type == PlayerType::Computer
    }

    #[inline]
    pub fn is_remote_guest(&self) -> bool {
        self.player_type == PlayerType::RemoteGuest
    }

    /// Engine matching the computer level, or `None` for non-computer players.
    pub fn engine(&self) -> Option<Box<dyn Engine>> {
        if !self.is_computer() {
            return None;
        }
        match self.computer_level {
            Some(0) => Some(Box::new(RandomEngine::new())),
            Some(level) => Some(Box::new(AlphaBetaEngine::new(level))),
            None => Some(Box::new(AlphaBetaEngine::default())),
        }
    }
}
