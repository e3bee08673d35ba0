//! Fixed-step simulation tick
//!
//! Advances a [`GameState`] by exactly one cell. Collisions are ordinary
//! outcomes, never errors.

use std::collections::HashSet;

use super::board::{Board, Cell};
use super::rng::RandomSource;
use super::state::{Collision, Food, GamePhase, GameState};
use crate::skills::{Skill, SkillCatalog};

/// What a single tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew
    Ate { skill: Skill },
    /// Run ended, body untouched
    Collided { collision: Collision, head: Cell },
    /// Snake ate the last food and now fills the board
    Cleared { skill: Skill },
}

/// Place a fresh food item on a free cell with a random skill.
///
/// Returns `false` (and clears the food) when no free cell remains.
pub fn spawn_food<R>(
    state: &mut GameState,
    board: &Board,
    catalog: &SkillCatalog,
    rng: &mut R,
) -> bool
where
    R: RandomSource + ?Sized,
{
    let occupied: HashSet<Cell> = state.snake.iter().copied().collect();
    match board.random_free_cell(&occupied, rng) {
        Some(cell) => {
            let skill = catalog.pick(rng).clone();
            state.food = Some(Food { cell, skill });
            true
        }
        None => {
            state.food = None;
            false
        }
    }
}

/// Advance the game state by one step
pub fn tick<R>(
    state: &mut GameState,
    board: &Board,
    catalog: &SkillCatalog,
    reward: u32,
    rng: &mut R,
) -> TickOutcome
where
    R: RandomSource + ?Sized,
{
    if state.phase != GamePhase::Running {
        return TickOutcome::Idle;
    }

    state.time_ticks += 1;
    state.active_direction = state.pending_direction;
    let new_head = state.head().offset(state.active_direction.delta());

    // Wall, then self, then food; all against the same head
    if !board.contains(new_head) {
        state.phase = GamePhase::GameOver;
        return TickOutcome::Collided {
            collision: Collision::Wall,
            head: new_head,
        };
    }

    if state.occupies(new_head) {
        state.phase = GamePhase::GameOver;
        return TickOutcome::Collided {
            collision: Collision::SelfBite,
            head: new_head,
        };
    }

    state.snake.push_front(new_head);

    let eaten = match &state.food {
        Some(food) if food.cell == new_head => Some(food.skill.clone()),
        _ => None,
    };

    let Some(skill) = eaten else {
        state.snake.pop_back();
        return TickOutcome::Moved;
    };

    state.score = state.score.saturating_add(reward);
    state.collected.push(skill.clone());

    if spawn_food(state, board, catalog, rng) {
        TickOutcome::Ate { skill }
    } else {
        state.phase = GamePhase::Cleared;
        TickOutcome::Cleared { skill }
    }
}
