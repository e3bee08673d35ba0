//! Session controller
//!
//! Owns one game's state for its lifetime. All mutation goes through
//! `start`, `toggle_pause`, `reset`, `tick` and `request_direction`; observers
//! hear about every transition after it has been applied.

use rand_pcg::Pcg32;

use super::board::Board;
use super::rng::{RandomSource, seeded_rng};
use super::state::{Collision, Direction, GameEvent, GamePhase, GameState};
use super::tick::{TickOutcome, spawn_food, tick};
use crate::config::{ConfigError, GameConfig};
use crate::skills::SkillCatalog;

/// Receives session events (sounds, overlays, HUD)
pub trait SessionObserver {
    fn on_event(&mut self, event: &GameEvent, state: &GameState);
}

impl<F> SessionObserver for F
where
    F: FnMut(&GameEvent, &GameState),
{
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        self(event, state)
    }
}

/// A Snake session driven by an external timer
pub struct Session<R: RandomSource = Pcg32> {
    config: GameConfig,
    board: Board,
    catalog: SkillCatalog,
    rng: R,
    state: GameState,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session<Pcg32> {
    /// Create a session on a seeded PCG stream
    pub fn new(config: GameConfig, catalog: SkillCatalog, seed: u64) -> Result<Self, ConfigError> {
        log::info!("New session with seed: {}", seed);
        Self::with_rng(config, catalog, seeded_rng(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session with an injected random source
    pub fn with_rng(
        config: GameConfig,
        catalog: SkillCatalog,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = config.board();
        let mut session = Self {
            state: GameState::new(config.start_cell, config.start_direction),
            config,
            board,
            catalog,
            rng,
            observers: Vec::new(),
        };
        session.reinitialize();
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Register an observer; events are delivered in emission order
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// NotStarted -> Running
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::NotStarted {
            return false;
        }
        self.state.phase = GamePhase::Running;
        log::info!("Session started");
        self.emit(GameEvent::Started);
        true
    }

    /// Running <-> Paused
    pub fn toggle_pause(&mut self) -> bool {
        let paused = match self.state.phase {
            GamePhase::Running => true,
            GamePhase::Paused => false,
            _ => return false,
        };
        self.state.phase = if paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        };
        self.emit(GameEvent::PauseToggled { paused });
        true
    }

    /// Back to a fresh NotStarted board from any phase
    pub fn reset(&mut self) {
        self.reinitialize();
        log::info!("Session reset");
        self.emit(GameEvent::Reset);
    }

    /// Buffer a direction for the next tick (reversal guard applies)
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.state.request_direction(direction);
        if !accepted {
            log::debug!("Dropped direction request {:?}", direction);
        }
        accepted
    }

    /// Advance one step; a no-op unless running
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = tick(
            &mut self.state,
            &self.board,
            &self.catalog,
            self.config.food_reward,
            &mut self.rng,
        );

        match &outcome {
            TickOutcome::Idle | TickOutcome::Moved => {}
            TickOutcome::Ate { skill } => {
                log::debug!("Collected {} (score {})", skill.name, self.state.score);
                self.emit(GameEvent::FoodCollision {
                    skill: skill.clone(),
                    score: self.state.score,
                });
            }
            TickOutcome::Collided { collision, head } => {
                log::info!(
                    "Game over ({:?}) at tick {} with score {}",
                    collision,
                    self.state.time_ticks,
                    self.state.score
                );
                let event = match collision {
                    Collision::Wall => GameEvent::WallCollision { head: *head },
                    Collision::SelfBite => GameEvent::SelfCollision { head: *head },
                };
                self.emit(event);
            }
            TickOutcome::Cleared { skill } => {
                log::info!("Board cleared with score {}", self.state.score);
                self.emit(GameEvent::FoodCollision {
                    skill: skill.clone(),
                    score: self.state.score,
                });
                self.emit(GameEvent::BoardCleared {
                    score: self.state.score,
                });
            }
        }

        outcome
    }

    fn reinitialize(&mut self) {
        self.state = GameState::new(self.config.start_cell, self.config.start_direction);
        // Validation guarantees a free cell next to a one-cell snake
        spawn_food(&mut self.state, &self.board, &self.catalog, &mut self.rng);
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event, &self.state);
        }
    }
}

#[cfg(test)]
impl<R: RandomSource> Session<R> {
    /// Direct state access for scenario setup
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::sim::board::Cell;
    use crate::sim::state::Food;

    fn session(width: i32, height: i32, seed: u64) -> Session {
        Session::new(GameConfig::with_board(width, height), SkillCatalog::default(), seed).unwrap()
    }

    fn recorder(session: &mut Session) -> Rc<RefCell<Vec<GameEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        session.subscribe(move |event: &GameEvent, _: &GameState| {
            sink.borrow_mut().push(event.clone())
        });
        events
    }

    fn place(session: &mut Session, body: &[(i32, i32)], direction: Direction, food: (i32, i32)) {
        let skill = session.catalog().first().clone();
        let state = session.state_mut();
        state.snake = body.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        state.active_direction = direction;
        state.pending_direction = direction;
        state.food = Some(Food {
            cell: Cell::new(food.0, food.1),
            skill,
        });
    }

    #[test]
    fn test_new_session_state() {
        let s = session(20, 20, 1);
        assert_eq!(s.phase(), GamePhase::NotStarted);
        assert_eq!(s.state().snake.len(), 1);
        assert_eq!(s.state().head(), Cell::new(10, 10));
        let food = s.state().food.as_ref().unwrap();
        assert!(s.board().contains(food.cell));
        assert_ne!(food.cell, Cell::new(10, 10));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Session::new(GameConfig::with_board(1, 1), SkillCatalog::default(), 1);
        assert!(matches!(result, Err(ConfigError::BoardTooSmall)));
    }

    #[test]
    fn test_phase_transitions() {
        let mut s = session(5, 5, 2);
        assert!(!s.toggle_pause());
        assert!(s.start());
        assert!(!s.start());
        assert_eq!(s.phase(), GamePhase::Running);

        assert!(s.toggle_pause());
        assert_eq!(s.phase(), GamePhase::Paused);
        assert!(s.toggle_pause());
        assert_eq!(s.phase(), GamePhase::Running);

        s.reset();
        assert_eq!(s.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_scenario_move_right() {
        let mut s = session(5, 5, 3);
        place(&mut s, &[(2, 2)], Direction::Right, (0, 4));
        s.start();

        assert_eq!(s.tick(), TickOutcome::Moved);
        assert_eq!(s.state().snake, [Cell::new(3, 2)]);
        assert_eq!(s.state().score, 0);
    }

    #[test]
    fn test_scenario_eat_food() {
        let mut s = session(5, 5, 4);
        let events = recorder(&mut s);
        place(&mut s, &[(2, 2)], Direction::Right, (3, 2));
        s.start();

        assert!(matches!(s.tick(), TickOutcome::Ate { .. }));
        assert_eq!(s.state().snake, [Cell::new(3, 2), Cell::new(2, 2)]);
        assert_eq!(s.state().score, 10);
        assert_eq!(s.state().collected.len(), 1);
        let food = s.state().food.as_ref().unwrap();
        assert!(!s.state().occupies(food.cell));

        let events = events.borrow();
        assert_eq!(events[0], GameEvent::Started);
        assert!(matches!(events[1], GameEvent::FoodCollision { score: 10, .. }));
    }

    #[test]
    fn test_scenario_wall() {
        let mut s = session(5, 5, 5);
        let events = recorder(&mut s);
        place(&mut s, &[(4, 2)], Direction::Right, (0, 0));
        s.start();
        s.tick();

        assert_eq!(s.phase(), GamePhase::GameOver);
        assert_eq!(s.state().snake, [Cell::new(4, 2)]);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::WallCollision { head: Cell::new(5, 2) })
        );
    }

    #[test]
    fn test_scenario_self_collision() {
        let mut s = session(5, 5, 6);
        let events = recorder(&mut s);
        place(&mut s, &[(2, 2), (2, 3), (3, 3), (3, 2)], Direction::Down, (0, 0));
        s.start();
        s.tick();

        assert_eq!(s.phase(), GamePhase::GameOver);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::SelfCollision { head: Cell::new(2, 3) })
        );
    }

    #[test]
    fn test_scenario_reversal_dropped() {
        let mut s = session(5, 5, 7);
        place(&mut s, &[(1, 2)], Direction::Right, (0, 0));
        s.start();

        assert!(!s.request_direction(Direction::Left));
        s.tick();
        assert_eq!(s.state().head(), Cell::new(2, 2));
        assert_eq!(s.state().active_direction, Direction::Right);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut s = session(5, 5, 8);
        place(&mut s, &[(2, 2)], Direction::Right, (3, 2));
        s.start();
        s.tick();
        s.request_direction(Direction::Up);
        assert_eq!(s.state().score, 10);

        s.reset();
        let state = s.state();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.snake, [Cell::new(2, 2)]);
        assert_eq!(state.score, 0);
        assert!(state.collected.is_empty());
        assert_eq!(state.active_direction, Direction::Right);
        assert_eq!(state.pending_direction, Direction::Right);
        assert!(state.food.is_some());
    }

    fn assert_fresh(s: &Session) {
        let state = s.state();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.snake, [s.config().start_cell]);
        assert_eq!(state.score, 0);
        assert!(state.collected.is_empty());
        let food = state.food.as_ref().unwrap();
        assert!(s.board().contains(food.cell));
        assert!(!state.occupies(food.cell));
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut s = session(5, 5, 12);
        let events = recorder(&mut s);
        place(&mut s, &[(4, 2), (3, 2)], Direction::Right, (0, 0));
        s.start();
        s.tick();
        assert_eq!(s.phase(), GamePhase::GameOver);

        s.reset();
        assert_fresh(&s);
        assert_eq!(events.borrow().last(), Some(&GameEvent::Reset));
        assert!(s.start());
    }

    #[test]
    fn test_reset_after_board_cleared() {
        let mut s = session(2, 1, 13);
        place(&mut s, &[(0, 0)], Direction::Right, (1, 0));
        s.start();
        s.tick();
        assert_eq!(s.phase(), GamePhase::Cleared);
        assert!(s.state().food.is_none());

        s.reset();
        assert_fresh(&s);
        assert_eq!(s.state().food.as_ref().unwrap().cell, Cell::new(0, 0));
    }

    #[test]
    fn test_pause_emits_and_freezes() {
        let mut s = session(5, 5, 9);
        let events = recorder(&mut s);
        s.start();
        s.toggle_pause();
        let before = s.state().clone();

        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.state(), &before);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::PauseToggled { paused: true })
        );
    }

    #[test]
    fn test_board_cleared_event() {
        let mut s = session(2, 1, 10);
        let events = recorder(&mut s);
        place(&mut s, &[(0, 0)], Direction::Right, (1, 0));
        s.start();

        assert!(matches!(s.tick(), TickOutcome::Cleared { .. }));
        assert_eq!(s.phase(), GamePhase::Cleared);
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::BoardCleared { score: 10 })
        );
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs produce identical states
        let mut a = session(8, 8, 4242);
        let mut b = session(8, 8, 4242);
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

        a.start();
        b.start();
        for step in 0..40 {
            let dir = turns[(step / 3) % turns.len()];
            a.request_direction(dir);
            b.request_direction(dir);
            a.tick();
            b.tick();
        }

        assert_eq!(a.state(), b.state());
    }
}
