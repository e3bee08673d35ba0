//! Responsive board layout
//!
//! Maps board cells to pixel rectangles. The board may be centered inside a
//! larger container grid (the widescreen variant).

use glam::Vec2;

use crate::config::BoardVariant;
use crate::consts::*;
use crate::sim::{Board, Cell};

/// Mobile layout below the breakpoint
pub fn is_mobile(viewport_width: f32) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

/// Cell edge length for a viewport width
pub fn cell_size_for_viewport(viewport_width: f32) -> f32 {
    if is_mobile(viewport_width) {
        CELL_SIZE_MOBILE
    } else {
        CELL_SIZE_DESKTOP
    }
}

/// Pixel geometry of the board and its container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Container size in cells
    pub columns: i32,
    pub rows: i32,
    pub board: Board,
    /// Board origin inside the container, in cells
    pub offset: Cell,
    pub cell_size: f32,
}

impl BoardLayout {
    /// Container exactly the size of the board
    pub fn new(board: Board, viewport_width: f32) -> Self {
        Self::centered(board.width, board.height, board, viewport_width)
    }

    /// Board centered in a `columns x rows` container (never smaller than the board)
    pub fn centered(columns: i32, rows: i32, board: Board, viewport_width: f32) -> Self {
        let columns = columns.max(board.width);
        let rows = rows.max(board.height);
        Self {
            columns,
            rows,
            board,
            offset: Cell::new((columns - board.width) / 2, (rows - board.height) / 2),
            cell_size: cell_size_for_viewport(viewport_width),
        }
    }

    /// Layout for a configured variant
    pub fn for_variant(variant: BoardVariant, board: Board, viewport_width: f32) -> Self {
        let (columns, rows) = variant.container();
        Self::centered(columns, rows, board, viewport_width)
    }

    /// Whole container size in pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.columns as f32, self.rows as f32) * self.cell_size
    }

    /// Top-left pixel of the play area
    pub fn play_area_origin(&self) -> Vec2 {
        Vec2::new(self.offset.x as f32, self.offset.y as f32) * self.cell_size
    }

    /// Play area size in pixels
    pub fn play_area_size(&self) -> Vec2 {
        Vec2::new(self.board.width as f32, self.board.height as f32) * self.cell_size
    }

    /// Top-left pixel of a board cell
    pub fn cell_origin(&self, cell: Cell) -> Vec2 {
        self.play_area_origin() + Vec2::new(cell.x as f32, cell.y as f32) * self.cell_size
    }

    /// Center pixel of a board cell
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        self.cell_origin(cell) + Vec2::splat(self.cell_size * 0.5)
    }

    /// Board cell under a pixel, `None` outside the play area
    pub fn cell_at(&self, point: Vec2) -> Option<Cell> {
        let local = (point - self.play_area_origin()) / self.cell_size;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let cell = Cell::new(local.x.floor() as i32, local.y.floor() as i32);
        self.board.contains(cell).then_some(cell)
    }
}
