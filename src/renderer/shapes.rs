//! Frame geometry for the board
//!
//! Turns a [`GameState`] into flat colored rectangles plus the food's icon
//! label. Pure so it can be tested off the browser.

use glam::Vec2;

use crate::consts::CELL_GAP;
use crate::layout::BoardLayout;
use crate::sim::{Cell, GamePhase, GameState};

pub const BACKGROUND: [f32; 4] = [0.04, 0.04, 0.08, 1.0];
pub const GRID_CELL: [f32; 4] = [0.12, 0.12, 0.2, 1.0];
pub const SNAKE_HEAD: [f32; 4] = [0.2, 1.0, 0.4, 1.0];
pub const SNAKE_BODY: [f32; 4] = [0.1, 0.75, 0.3, 1.0];
pub const FOOD: [f32; 4] = [1.0, 0.25, 0.6, 1.0];
/// Body tint once the run is over
pub const SNAKE_DEAD: [f32; 4] = [0.55, 0.55, 0.55, 1.0];

/// Axis-aligned filled rectangle (pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

/// Text centered on a point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub center: Vec2,
    pub text: String,
    pub size: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub size: Vec2,
    pub quads: Vec<Quad>,
    pub labels: Vec<Label>,
}

/// Cell rectangle shrunk by the grid gap
fn cell_quad(layout: &BoardLayout, cell: Cell, color: [f32; 4]) -> Quad {
    let inset = CELL_GAP.min(layout.cell_size * 0.25);
    Quad {
        origin: layout.cell_origin(cell) + Vec2::splat(inset),
        size: Vec2::splat(layout.cell_size - inset * 2.0),
        color,
    }
}

/// Grid cells behind the play area
pub fn grid(layout: &BoardLayout) -> Vec<Quad> {
    layout
        .board
        .cells()
        .map(|cell| cell_quad(layout, cell, GRID_CELL))
        .collect()
}

/// Snake quads, tail first so the head draws on top. Body alpha fades
/// toward the tail.
pub fn snake(state: &GameState, layout: &BoardLayout) -> Vec<Quad> {
    let len = state.snake.len().max(1) as f32;
    let dead = state.phase == GamePhase::GameOver;

    let mut quads: Vec<Quad> = state
        .snake
        .iter()
        .enumerate()
        .map(|(i, &cell)| {
            let mut color = match (i, dead) {
                (_, true) => SNAKE_DEAD,
                (0, false) => SNAKE_HEAD,
                _ => SNAKE_BODY,
            };
            if i > 0 {
                color[3] = 1.0 - (i as f32 / len) * 0.5;
            }
            cell_quad(layout, cell, color)
        })
        .collect();
    quads.reverse();
    quads
}

/// Food cell and its skill icon
pub fn food(state: &GameState, layout: &BoardLayout) -> Option<(Quad, Label)> {
    let food = state.food.as_ref()?;
    let quad = cell_quad(layout, food.cell, FOOD);
    let label = Label {
        center: layout.cell_center(food.cell),
        text: food.skill.icon.clone(),
        size: layout.cell_size * 0.8,
    };
    Some((quad, label))
}

pub fn build_frame(state: &GameState, layout: &BoardLayout) -> Frame {
    let size = layout.pixel_size();
    let mut quads = vec![Quad {
        origin: Vec2::ZERO,
        size,
        color: BACKGROUND,
    }];
    quads.extend(grid(layout));

    let mut labels = Vec::new();
    if let Some((quad, label)) = food(state, layout) {
        quads.push(quad);
        labels.push(label);
    }
    quads.extend(snake(state, layout));

    Frame {
        size,
        quads,
        labels,
    }
}

/// CSS `rgba()` for a linear 0-1 color
pub fn css_color(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.2})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardVariant;
    use crate::sim::{Board, Direction, Food};
    use crate::skills::SkillCatalog;

    fn layout() -> BoardLayout {
        BoardLayout::for_variant(BoardVariant::Square, Board::new(20, 20), 1024.0)
    }

    fn state_with_food() -> GameState {
        let mut state = GameState::with_snake(
            [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        );
        state.food = Some(Food {
            cell: Cell::new(10, 2),
            skill: SkillCatalog::default().first().clone(),
        });
        state
    }

    #[test]
    fn test_frame_contents() {
        let state = state_with_food();
        let frame = build_frame(&state, &layout());

        assert_eq!(frame.size, Vec2::new(400.0, 400.0));
        // background + grid + food + snake
        assert_eq!(frame.quads.len(), 1 + 400 + 1 + 3);
        assert_eq!(frame.labels.len(), 1);
        assert_eq!(frame.labels[0].text, SkillCatalog::default().first().icon);
        assert_eq!(frame.labels[0].center, Vec2::new(210.0, 50.0));
    }

    #[test]
    fn test_head_drawn_last() {
        let state = state_with_food();
        let quads = snake(&state, &layout());
        let head = quads.last().unwrap();
        assert_eq!(head.color, SNAKE_HEAD);
        assert_eq!(head.origin, Vec2::new(101.0, 101.0));
        assert_eq!(head.size, Vec2::splat(18.0));
        // Tail is the most faded
        assert!(quads[0].color[3] < quads[1].color[3]);
    }

    #[test]
    fn test_dead_snake_is_grey() {
        let mut state = state_with_food();
        state.phase = GamePhase::GameOver;
        let quads = snake(&state, &layout());
        assert!(quads.iter().all(|q| q.color[..3] == SNAKE_DEAD[..3]));
    }

    #[test]
    fn test_no_food_no_label() {
        let mut state = state_with_food();
        state.food = None;
        let frame = build_frame(&state, &layout());
        assert!(frame.labels.is_empty());
        assert_eq!(frame.quads.len(), 1 + 400 + 3);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color([1.0, 0.0, 0.5, 1.0]), "rgba(255, 0, 128, 1.00)");
        assert_eq!(css_color([2.0, -1.0, 0.0, 0.25]), "rgba(255, 0, 0, 0.25)");
    }
}
