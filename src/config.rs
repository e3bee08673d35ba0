//! Session configuration
//!
//! Constants a session is created with. The engine is agnostic to the actual
//! board shape; the two layouts the site uses are just presets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Board, Cell, Direction};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board must have positive dimensions, got {width}x{height}")]
    NonPositiveBoard { width: i32, height: i32 },
    #[error("board needs at least two cells to place food next to the snake")]
    BoardTooSmall,
    #[error("start cell ({x}, {y}) is outside the {width}x{height} board")]
    StartOutOfBounds { x: i32, y: i32, width: i32, height: i32 },
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// How the board sits inside its on-screen container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardVariant {
    /// Container and board are the same 20x20 grid
    #[default]
    Square,
    /// 50x20 container with the 20x20 board centered in it
    Widescreen,
}

impl BoardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardVariant::Square => "Square",
            BoardVariant::Widescreen => "Widescreen",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(BoardVariant::Square),
            "widescreen" | "wide" => Some(BoardVariant::Widescreen),
            _ => None,
        }
    }

    /// Container size in cells (columns, rows)
    pub fn container(&self) -> (i32, i32) {
        match self {
            BoardVariant::Square => (GRID_SIZE, GRID_SIZE),
            BoardVariant::Widescreen => (WIDE_CONTAINER_COLUMNS, GRID_SIZE),
        }
    }
}

/// Engine constants supplied at session creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub start_cell: Cell,
    pub start_direction: Direction,
    /// Host timer period between ticks (ms)
    pub tick_interval_ms: u32,
    /// Score added per food item
    pub food_reward: u32,
    /// Minimum swipe distance along the dominant axis (px)
    pub swipe_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// The 20x20 board the site ships with
    pub fn classic() -> Self {
        Self {
            board_width: GRID_SIZE,
            board_height: GRID_SIZE,
            start_cell: Cell::new(GRID_SIZE / 2, GRID_SIZE / 2),
            start_direction: Direction::Right,
            tick_interval_ms: TICK_INTERVAL_MS,
            food_reward: FOOD_REWARD,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }

    /// Arbitrary board size, snake starting in the middle
    pub fn with_board(width: i32, height: i32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            start_cell: Cell::new(width / 2, height / 2),
            ..Self::classic()
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(ConfigError::NonPositiveBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.board().cell_count() < 2 {
            return Err(ConfigError::BoardTooSmall);
        }
        if !self.board().contains(self.start_cell) {
            return Err(ConfigError::StartOutOfBounds {
                x: self.start_cell.x,
                y: self.start_cell.y,
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
