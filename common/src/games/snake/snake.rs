use std::collections::{HashSet, VecDeque};

use super::grid::GridTopology;
use super::types::{Direction, Position};

#[derive(Clone, Debug)]
pub struct SnakeBody {
    body: VecDeque<Position>,
    body_set: HashSet<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_vacated: Option<Position>,
}

impl SnakeBody {
    pub fn new(start_pos: Position, direction: Direction) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            body_set: HashSet::new(),
            direction,
            pending_direction: None,
            last_vacated: None,
        };
        snake.reset_to_single_segment(start_pos, direction);
        snake
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Position], direction: Direction) -> Self {
        assert!(!segments.is_empty());
        Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
            last_vacated: None,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body_set.contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Cell freed by the last move or shrink, for erasing on screen.
    pub fn last_vacated(&self) -> Option<Position> {
        self.last_vacated
    }

    /// A reversal of the committed direction is dropped without error.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn commit_direction(&mut self) {
        if let Some(new_direction) = self.pending_direction.take() {
            self.direction = new_direction;
        }
    }

    pub fn prospective_head(&self, grid: &GridTopology) -> Position {
        grid.neighbor(self.head(), self.direction)
    }

    /// Checked against the body before it moves, so the tail cell counts
    /// even though it would be vacated this tick.
    pub fn can_bite_self(&self, new_head: Position) -> bool {
        self.contains(new_head)
    }

    pub fn advance(&mut self, new_head: Position) {
        self.push_head(new_head);
        self.last_vacated = self.pop_tail();
    }

    pub fn grow(&mut self, front: Position) {
        self.push_head(front);
        self.last_vacated = None;
    }

    pub fn shrink_from_tail(&mut self) {
        self.last_vacated = if self.body.len() > 1 {
            self.pop_tail()
        } else {
            None
        };
    }

    pub fn reset_to_single_segment(&mut self, start_pos: Position, direction: Direction) {
        self.body.clear();
        self.body_set.clear();
        self.push_head(start_pos);
        self.direction = direction;
        self.pending_direction = None;
        self.last_vacated = None;
    }

    fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
        self.body_set.insert(pos);
    }

    fn pop_tail(&mut self) -> Option<Position> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
