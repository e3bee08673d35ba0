//! Arcade console shell
//!
//! Section navigation, the insert-coin splash that precedes it, and the
//! skills game HUD. All plain state; the host wires them to the DOM and plays
//! the cues they hand back.

use crate::audio::SoundCue;
use crate::sim::{GamePhase, GameState};
use crate::skills::{Skill, distinct_by_name};

pub use crate::layout::is_mobile;

/// Console sections, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    Game,
    Projects,
    #[default]
    About,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Game,
        Section::Projects,
        Section::About,
        Section::Experience,
        Section::Contact,
    ];

    /// Menu button label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Game => "SKILLS GAME",
            Section::Projects => "HIGH SCORES",
            Section::About => "PLAYER PROFILE",
            Section::Experience => "CAREER MODE",
            Section::Contact => "INSTRUCTIONS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Game => "Technical skills",
            Section::Projects => "Project Gallery",
            Section::About => "About Me",
            Section::Experience => "Work History",
            Section::Contact => "Contact & CV",
        }
    }

    /// Stable id used for DOM element ids
    pub fn id(&self) -> &'static str {
        match self {
            Section::Game => "game",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Console navigation state
#[derive(Debug, Clone, Default)]
pub struct ArcadeConsole {
    active: Section,
}

impl ArcadeConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch sections. Reselecting the active one does nothing.
    pub fn select(&mut self, section: Section) -> Option<SoundCue> {
        if section == self.active {
            return None;
        }
        log::debug!("Console section: {:?} -> {:?}", self.active, section);
        self.active = section;
        Some(SoundCue::MenuConfirm)
    }

    pub fn hover(&self) -> SoundCue {
        SoundCue::MenuBleep
    }
}

/// Text shown over the board, if any
pub fn overlay_text(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::NotStarted => Some("PRESS START TO BEGIN"),
        GamePhase::Paused => Some("PAUSED"),
        GamePhase::GameOver => Some("GAME OVER"),
        GamePhase::Cleared => Some("ALL SKILLS UNLOCKED"),
        GamePhase::Running => None,
    }
}

/// Skills game HUD contents derived from a session snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct HudView<'a> {
    pub score: u32,
    /// Every food eaten, duplicates included
    pub skills_count: usize,
    /// Latest collected skill, or the one on the board before any pickup
    pub featured: Option<&'a Skill>,
    pub featured_is_collected: bool,
    /// Collected skills, first pickup of each name only
    pub collected: Vec<&'a Skill>,
    pub overlay: Option<&'static str>,
    /// START visible only before the first tick
    pub show_start: bool,
    /// PLAY AGAIN visible once the run is over
    pub show_play_again: bool,
}

impl<'a> HudView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        let latest = state.latest_skill();
        Self {
            score: state.score,
            skills_count: state.collected.len(),
            featured: latest.or(state.food.as_ref().map(|f| &f.skill)),
            featured_is_collected: latest.is_some(),
            collected: distinct_by_name(&state.collected),
            overlay: overlay_text(state.phase),
            show_start: state.phase == GamePhase::NotStarted,
            show_play_again: state.phase.is_terminal(),
        }
    }
}

/// Loading bar step period (ms)
pub const SPLASH_STEP_MS: u32 = 50;
/// Progress added per step (%)
pub const SPLASH_STEP_PERCENT: u8 = 2;
/// Pause on a full bar before the console appears (ms)
pub const SPLASH_HOLD_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Idle,
    Loading {
        progress: u8,
    },
    Ready,
}

/// Insert-coin splash screen
#[derive(Debug, Clone, Default)]
pub struct InsertCoin {
    phase: SplashPhase,
    accumulator: u32,
    /// Remaining hold once the bar is full
    hold_ms: Option<u32>,
}

impl InsertCoin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        match self.phase {
            SplashPhase::Idle => 0,
            SplashPhase::Loading { progress } => progress,
            SplashPhase::Ready => 100,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SplashPhase::Ready
    }

    /// Click or Enter. Only the first coin counts.
    pub fn insert_coin(&mut self) -> Option<SoundCue> {
        if self.phase != SplashPhase::Idle {
            return None;
        }
        log::info!("Coin inserted");
        self.phase = SplashPhase::Loading { progress: 0 };
        self.accumulator = 0;
        self.hold_ms = None;
        Some(SoundCue::CoinDrop)
    }

    /// Advance the loading bar by wall-clock time. Returns true on the call
    /// that reaches `Ready`.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let SplashPhase::Loading { mut progress } = self.phase else {
            return false;
        };
        self.accumulator += elapsed_ms;

        while self.hold_ms.is_none() && self.accumulator >= SPLASH_STEP_MS {
            self.accumulator -= SPLASH_STEP_MS;
            if progress >= 100 {
                self.hold_ms = Some(SPLASH_HOLD_MS);
            } else {
                progress = (progress + SPLASH_STEP_PERCENT).min(100);
            }
        }
        self.phase = SplashPhase::Loading { progress };

        if let Some(remaining) = self.hold_ms {
            if self.accumulator >= remaining {
                self.phase = SplashPhase::Ready;
                self.accumulator = 0;
                self.hold_ms = None;
                return true;
            }
            self.hold_ms = Some(remaining - self.accumulator);
            self.accumulator = 0;
        }
        false
    }

    /// Skip straight to the console
    pub fn finish(&mut self) {
        self.phase = SplashPhase::Ready;
        self.hold_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_and_labels() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["SKILLS GAME", "HIGH SCORES", "PLAYER PROFILE", "CAREER MODE", "INSTRUCTIONS"]
        );
        assert_eq!(Section::Contact.description(), "Contact & CV");
        assert_eq!(Section::default(), Section::About);
        assert_eq!(Section::from_id("projects"), Some(Section::Projects));
        assert_eq!(Section::from_id("arcade"), None);
    }

    #[test]
    fn test_select_plays_confirm_on_change() {
        let mut console = ArcadeConsole::new();
        assert_eq!(console.active(), Section::About);
        assert_eq!(console.select(Section::About), None);
        assert_eq!(console.select(Section::Game), Some(SoundCue::MenuConfirm));
        assert_eq!(console.active(), Section::Game);
        assert_eq!(console.hover(), SoundCue::MenuBleep);
    }

    #[test]
    fn test_insert_coin_once() {
        let mut splash = InsertCoin::new();
        assert!(!splash.advance(1000));
        assert_eq!(splash.phase(), SplashPhase::Idle);

        assert_eq!(splash.insert_coin(), Some(SoundCue::CoinDrop));
        assert_eq!(splash.phase(), SplashPhase::Loading { progress: 0 });
        assert_eq!(splash.insert_coin(), None);
    }

    #[test]
    fn test_loading_progress_steps() {
        let mut splash = InsertCoin::new();
        splash.insert_coin();
        splash.advance(49);
        assert_eq!(splash.progress(), 0);
        splash.advance(1);
        assert_eq!(splash.progress(), 2);
        splash.advance(125);
        assert_eq!(splash.progress(), 6);
    }

    #[test]
    fn test_full_bar_holds_before_ready() {
        let mut splash = InsertCoin::new();
        splash.insert_coin();

        // 50 steps fill the bar
        assert!(!splash.advance(50 * 50));
        assert_eq!(splash.progress(), 100);
        assert!(!splash.is_ready());

        // Next step starts the hold
        assert!(!splash.advance(50));
        assert!(!splash.advance(499));
        assert!(splash.advance(1));
        assert!(splash.is_ready());
        assert!(!splash.advance(50));
    }

    #[test]
    fn test_one_large_advance_reaches_ready() {
        let mut splash = InsertCoin::new();
        splash.insert_coin();
        assert!(splash.advance(51 * 50 + 500));
        assert_eq!(splash.phase(), SplashPhase::Ready);
    }

    #[test]
    fn test_overlay_text() {
        assert_eq!(overlay_text(GamePhase::NotStarted), Some("PRESS START TO BEGIN"));
        assert_eq!(overlay_text(GamePhase::Running), None);
        assert_eq!(overlay_text(GamePhase::Paused), Some("PAUSED"));
        assert_eq!(overlay_text(GamePhase::GameOver), Some("GAME OVER"));
    }

    #[test]
    fn test_hud_features_food_before_first_pickup() {
        use crate::sim::{Cell, Direction, Food};
        use crate::skills::SkillCatalog;

        let catalog = SkillCatalog::default();
        let mut state = GameState::new(Cell::new(10, 10), Direction::Right);
        state.food = Some(Food {
            cell: Cell::new(3, 3),
            skill: catalog.skills()[2].clone(),
        });

        let hud = HudView::new(&state);
        assert_eq!(hud.featured, Some(&catalog.skills()[2]));
        assert!(!hud.featured_is_collected);
        assert!(hud.show_start);
        assert!(hud.collected.is_empty());

        let java = catalog.skills()[0].clone();
        let python = catalog.skills()[1].clone();
        state.collected = vec![java.clone(), python.clone(), java.clone()];
        state.score = 30;
        state.phase = GamePhase::GameOver;

        let hud = HudView::new(&state);
        assert_eq!(hud.score, 30);
        assert_eq!(hud.skills_count, 3);
        assert_eq!(hud.featured, Some(&java));
        assert!(hud.featured_is_collected);
        assert_eq!(hud.collected, vec![&java, &python]);
        assert!(hud.show_play_again);
        assert!(!hud.show_start);
    }

    #[test]
    fn test_is_mobile_breakpoint() {
        assert!(is_mobile(767.0));
        assert!(!is_mobile(768.0));
    }
}
