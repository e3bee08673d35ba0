//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in [`GameState`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::board::Cell;
use crate::skills::Skill;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh board, waiting for START
    #[default]
    NotStarted,
    /// Active gameplay, ticks advance the snake
    Running,
    /// Gameplay suspended
    Paused,
    /// Hit a wall or itself
    GameOver,
    /// Snake fills the whole board, nowhere left to place food
    Cleared,
}

impl GamePhase {
    /// Terminal phases only leave via reset
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Cleared)
    }
}

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in board space (y grows downward)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The single food item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub cell: Cell,
    pub skill: Skill,
}

/// Why a run ended in `GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Signals emitted to session observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    PauseToggled { paused: bool },
    WallCollision { head: Cell },
    SelfCollision { head: Cell },
    FoodCollision { skill: Skill, score: u32 },
    BoardCleared { score: u32 },
    Reset,
}

/// Complete session state (snapshot-able, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    /// Current food; `None` only once the board is cleared
    pub food: Option<Food>,
    /// Direction applied by the most recent tick
    pub active_direction: Direction,
    /// Buffered input consumed by the next tick
    pub pending_direction: Direction,
    pub score: u32,
    /// Append-only, duplicates allowed
    pub collected: Vec<Skill>,
    pub phase: GamePhase,
    /// Ticks applied while running
    pub time_ticks: u64,
}

impl GameState {
    /// New state with a single-cell snake and no food yet
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self::with_snake([start], direction)
    }

    /// State with an explicit body (head first)
    ///
    /// # Panics
    ///
    /// Panics if `body` yields no cells.
    pub fn with_snake(body: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let snake: VecDeque<Cell> = body.into_iter().collect();
        assert!(!snake.is_empty(), "snake body needs at least one cell");
        Self {
            snake,
            food: None,
            active_direction: direction,
            pending_direction: direction,
            score: 0,
            collected: Vec::new(),
            phase: GamePhase::NotStarted,
            time_ticks: 0,
        }
    }

    /// Head cell. The body is never empty.
    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false for a constructed state
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Most recently collected skill
    pub fn latest_skill(&self) -> Option<&Skill> {
        self.collected.last()
    }

    /// Buffer a direction for the next tick.
    ///
    /// Reversals of the active direction are dropped, as is any request once
    /// the run has ended. Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.phase.is_terminal() || direction == self.active_direction.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }
}
