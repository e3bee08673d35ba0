//! Input controller
//!
//! Keyboard, swipe and on-screen controls all funnel into [`InputCommand`]s
//! applied through one entry point. The reversal guard lives with the state;
//! this module only decides which command, if any, an input event means.

use glam::Vec2;

use crate::sim::{Board, Direction, GamePhase, GameState, RandomSource, Session};

/// A request from any input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<InputCommand> {
    let command = match key {
        "ArrowUp" | "w" | "W" => InputCommand::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => InputCommand::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => InputCommand::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => InputCommand::Turn(Direction::Right),
        " " => InputCommand::TogglePause,
        _ => return None,
    };
    Some(command)
}

/// Classify a swipe from `start` to `end` (screen space, y down).
///
/// The axis with the larger absolute delta wins (ties go vertical) and must
/// exceed `threshold`; shorter gestures produce nothing.
pub fn classify_swipe(start: Vec2, end: Vec2, threshold: f32) -> Option<Direction> {
    let delta = end - start;
    if delta.x.abs() > delta.y.abs() {
        if delta.x.abs() <= threshold {
            return None;
        }
        Some(if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        if delta.y.abs() <= threshold {
            return None;
        }
        Some(if delta.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Tracks one touch gesture at a time
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn begin(&mut self, point: Vec2) {
        self.start = Some(point);
    }

    /// Classify against the gesture start. The start is kept until a sample
    /// crosses the threshold, then consumed, so a gesture yields at most one
    /// attempt.
    pub fn update(&mut self, point: Vec2, threshold: f32) -> Option<Direction> {
        let direction = classify_swipe(self.start?, point, threshold)?;
        self.start = None;
        Some(direction)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

/// Translates raw input events into session requests
#[derive(Debug, Clone)]
pub struct InputController {
    swipe: SwipeTracker,
    swipe_threshold: f32,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(crate::consts::SWIPE_THRESHOLD)
    }
}

impl InputController {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::default(),
            swipe_threshold,
        }
    }

    /// Single entry point for every input source. Returns whether the
    /// session accepted the command.
    pub fn apply<R: RandomSource>(&self, session: &mut Session<R>, command: InputCommand) -> bool {
        match command {
            InputCommand::Turn(direction) => self.request_direction(session, direction),
            InputCommand::TogglePause => self.toggle_pause_request(session),
        }
    }

    pub fn request_direction<R: RandomSource>(
        &self,
        session: &mut Session<R>,
        direction: Direction,
    ) -> bool {
        session.request_direction(direction)
    }

    pub fn toggle_pause_request<R: RandomSource>(&self, session: &mut Session<R>) -> bool {
        session.toggle_pause()
    }

    /// Keyboard: arrows/WASD turn, space pauses
    pub fn key_down<R: RandomSource>(&self, session: &mut Session<R>, key: &str) -> bool {
        match command_for_key(key) {
            Some(command) => self.apply(session, command),
            None => false,
        }
    }

    /// On-screen direction button
    pub fn control_tap<R: RandomSource>(
        &self,
        session: &mut Session<R>,
        direction: Direction,
    ) -> bool {
        self.apply(session, InputCommand::Turn(direction))
    }

    pub fn touch_start(&mut self, point: Vec2) {
        self.swipe.begin(point);
    }

    /// Swipes only steer a game in progress
    pub fn touch_move<R: RandomSource>(&mut self, session: &mut Session<R>, point: Vec2) -> bool {
        if !matches!(session.phase(), GamePhase::Running | GamePhase::Paused) {
            return false;
        }
        match self.swipe.update(point, self.swipe_threshold) {
            Some(direction) => self.apply(session, InputCommand::Turn(direction)),
            None => false,
        }
    }

    pub fn touch_end(&mut self) {
        self.swipe.cancel();
    }
}

/// Attract-mode pilot: head for the food without turning into a wall or the
/// body. Returns `None` when every move is fatal.
pub fn attract_direction(state: &GameState, board: &Board) -> Option<Direction> {
    let head = state.head();
    let current = state.active_direction;
    let target = state.food.as_ref().map(|f| f.cell);

    Direction::ALL
        .into_iter()
        .filter(|&dir| dir != current.opposite())
        .filter(|&dir| {
            let next = head.offset(dir.delta());
            board.contains(next) && !state.occupies(next)
        })
        .min_by_key(|&dir| {
            let next = head.offset(dir.delta());
            let distance = target.map_or(0, |t| next.manhattan(t));
            // Prefer going straight on ties
            (distance, dir != current)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Cell, Food};
    use crate::skills::SkillCatalog;

    fn session() -> Session {
        Session::new(GameConfig::with_board(9, 9), SkillCatalog::default(), 11).unwrap()
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key("ArrowUp"), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(command_for_key("W"), Some(InputCommand::Turn(Direction::Up)));
        assert_eq!(command_for_key("s"), Some(InputCommand::Turn(Direction::Down)));
        assert_eq!(command_for_key("a"), Some(InputCommand::Turn(Direction::Left)));
        assert_eq!(command_for_key("ArrowRight"), Some(InputCommand::Turn(Direction::Right)));
        assert_eq!(command_for_key(" "), Some(InputCommand::TogglePause));
        assert_eq!(command_for_key("Enter"), None);
        assert_eq!(command_for_key("q"), None);
    }

    #[test]
    fn test_classify_swipe() {
        let origin = Vec2::new(100.0, 100.0);
        let t = 30.0;
        assert_eq!(classify_swipe(origin, Vec2::new(140.0, 110.0), t), Some(Direction::Right));
        assert_eq!(classify_swipe(origin, Vec2::new(60.0, 90.0), t), Some(Direction::Left));
        assert_eq!(classify_swipe(origin, Vec2::new(95.0, 150.0), t), Some(Direction::Down));
        assert_eq!(classify_swipe(origin, Vec2::new(105.0, 40.0), t), Some(Direction::Up));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let origin = Vec2::new(0.0, 0.0);
        assert_eq!(classify_swipe(origin, Vec2::new(30.0, 0.0), 30.0), None);
        assert_eq!(classify_swipe(origin, Vec2::new(5.0, -29.0), 30.0), None);
        // Dominant axis is x but too short, even though y is nonzero
        assert_eq!(classify_swipe(origin, Vec2::new(25.0, 20.0), 30.0), None);
    }

    #[test]
    fn test_swipe_tracker_single_attempt() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.update(Vec2::new(50.0, 0.0), 30.0), None);

        tracker.begin(Vec2::ZERO);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.update(Vec2::new(10.0, 0.0), 30.0), None);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.update(Vec2::new(80.0, 0.0), 30.0), Some(Direction::Right));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.update(Vec2::new(0.0, 120.0), 30.0), None);
    }

    #[test]
    fn test_swipe_crosses_threshold_midway() {
        let mut s = session();
        let mut input = InputController::default();
        s.start();

        input.touch_start(Vec2::ZERO);
        assert!(!input.touch_move(&mut s, Vec2::new(0.0, 4.0)));
        assert!(!input.touch_move(&mut s, Vec2::new(0.0, 20.0)));
        assert!(input.touch_move(&mut s, Vec2::new(0.0, 45.0)));
        assert_eq!(s.state().pending_direction, Direction::Down);

        // Rest of the same gesture is ignored
        assert!(!input.touch_move(&mut s, Vec2::new(-80.0, 45.0)));
        assert_eq!(s.state().pending_direction, Direction::Down);

        input.touch_end();
        assert!(!input.touch_move(&mut s, Vec2::new(0.0, 80.0)));
    }

    #[test]
    fn test_touch_requires_game_in_progress() {
        let mut s = session();
        let mut input = InputController::default();

        input.touch_start(Vec2::ZERO);
        assert!(!input.touch_move(&mut s, Vec2::new(0.0, -80.0)));

        s.start();
        input.touch_start(Vec2::ZERO);
        assert!(input.touch_move(&mut s, Vec2::new(0.0, -80.0)));
        assert_eq!(s.state().pending_direction, Direction::Up);
    }

    #[test]
    fn test_key_down_routes_through_guard() {
        let mut s = session();
        let input = InputController::default();
        s.start();

        assert!(!input.key_down(&mut s, "ArrowLeft"));
        assert_eq!(s.state().pending_direction, Direction::Right);
        assert!(input.key_down(&mut s, "ArrowDown"));
        assert_eq!(s.state().pending_direction, Direction::Down);

        assert!(input.key_down(&mut s, " "));
        assert_eq!(s.phase(), GamePhase::Paused);
        assert!(!input.key_down(&mut s, "x"));
    }

    #[test]
    fn test_control_tap() {
        let mut s = session();
        let input = InputController::default();
        assert!(input.control_tap(&mut s, Direction::Up));
        s.start();
        s.tick();
        assert_eq!(s.state().active_direction, Direction::Up);
    }

    #[test]
    fn test_attract_heads_for_food() {
        let board = Board::new(9, 9);
        let mut state = GameState::new(Cell::new(4, 4), Direction::Right);
        state.food = Some(Food {
            cell: Cell::new(4, 1),
            skill: SkillCatalog::default().first().clone(),
        });
        assert_eq!(attract_direction(&state, &board), Some(Direction::Up));
    }

    #[test]
    fn test_attract_avoids_walls_and_body() {
        let board = Board::new(3, 3);
        // Head in the top-right corner heading up, body below it
        let mut state = GameState::with_snake(
            [Cell::new(2, 0), Cell::new(2, 1), Cell::new(1, 1)],
            Direction::Up,
        );
        state.food = Some(Food {
            cell: Cell::new(2, 2),
            skill: SkillCatalog::default().first().clone(),
        });
        assert_eq!(attract_direction(&state, &board), Some(Direction::Left));

        // Boxed in completely
        let state = GameState::with_snake(
            [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)],
            Direction::Up,
        );
        assert_eq!(attract_direction(&state, &board), None);
    }
}
