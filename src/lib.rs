//! Arcade Portfolio - a retro arcade-console portfolio site
//!
//! Core modules:
//! - `sim`: Deterministic Snake engine (board, tick, session, seeded RNG)
//! - `input`: Keyboard/swipe/tap input mapping with the reversal guard
//! - `layout`: Responsive board sizing and cell/pixel mapping
//! - `skills`: Skill catalog handed out as food
//! - `console`: Arcade console navigation and the insert-coin splash
//! - `audio`: Sound cues and Web Audio playback
//! - `api`: Project list and contact form I/O
//! - `renderer`: Frame geometry and the Canvas 2D painter

pub mod api;
pub mod audio;
pub mod config;
pub mod console;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod skills;

pub use config::{BoardVariant, ConfigError, GameConfig};
pub use settings::Settings;
pub use sim::{Session, SessionObserver};
pub use skills::{Skill, SkillCatalog};

/// Game configuration constants
pub mod consts {
    /// Default board edge length (cells)
    pub const GRID_SIZE: i32 = 20;
    /// Container width for the widescreen layout (cells)
    pub const WIDE_CONTAINER_COLUMNS: i32 = 50;
    /// Default tick period (ms)
    pub const TICK_INTERVAL_MS: u32 = 150;
    /// Score per food item
    pub const FOOD_REWARD: u32 = 10;

    /// Swipe must exceed this along its dominant axis (px)
    pub const SWIPE_THRESHOLD: f32 = 30.0;

    /// Viewports narrower than this use the mobile layout (px)
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
    /// Cell edge on mobile (px)
    pub const CELL_SIZE_MOBILE: f32 = 16.0;
    /// Cell edge on desktop (px)
    pub const CELL_SIZE_DESKTOP: f32 = 20.0;
    /// Gap between grid cells (px)
    pub const CELL_GAP: f32 = 1.0;
}
