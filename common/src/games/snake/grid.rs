use crate::games::SessionRng;
use super::types::{Direction, Position};

/// Toroidal grid: leaving one edge re-enters at the opposite one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTopology {
    width: usize,
    height: usize,
    cell_size: usize,
}

impl GridTopology {
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn from_screen(screen_width: usize, screen_height: usize, cell_size: usize) -> Self {
        Self::new(screen_width / cell_size, screen_height / cell_size, cell_size)
    }

    pub fn wrap(coord: isize, extent: usize) -> usize {
        coord.rem_euclid(extent as isize) as usize
    }

    pub fn neighbor(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(
            Self::wrap(pos.x as isize + dx, self.width),
            Self::wrap(pos.y as isize + dy, self.height),
        )
    }

    pub fn random_cell(&self, rng: &mut SessionRng) -> Position {
        Position::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn field_size(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Top-left pixel of a cell.
    pub fn to_pixels(&self, pos: Position) -> (usize, usize) {
        (pos.x * self.cell_size, pos.y * self.cell_size)
    }

    /// Shortest distance between two cells when both axes wrap.
    pub fn toroidal_distance(&self, a: Position, b: Position) -> usize {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.min(self.width - dx) + dy.min(self.height - dy)
    }
}
