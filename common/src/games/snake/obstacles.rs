use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::grid::GridTopology;
use super::snake::SnakeBody;
use super::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    GoodApple,
    BadApple,
    Stone,
}

impl ObstacleKind {
    pub fn is_apple(&self) -> bool {
        matches!(self, ObstacleKind::GoodApple | ObstacleKind::BadApple)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleCounts {
    pub good_apples: usize,
    pub bad_apples: usize,
    pub stones: usize,
}

impl ObstacleCounts {
    pub fn total(&self) -> usize {
        self.good_apples + self.bad_apples + self.stones
    }
}

/// Obstacles in collision priority order: good apples, bad apples, stones.
///
/// Outside a tick no two obstacles share a cell and none sits on the snake.
#[derive(Clone, Debug)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn generate(
        counts: &ObstacleCounts,
        grid: &GridTopology,
        snake: &SnakeBody,
        rng: &mut SessionRng,
    ) -> Self {
        let kinds = std::iter::repeat_n(ObstacleKind::GoodApple, counts.good_apples)
            .chain(std::iter::repeat_n(ObstacleKind::BadApple, counts.bad_apples))
            .chain(std::iter::repeat_n(ObstacleKind::Stone, counts.stones));

        // Positions are placeholders until place_all_unique runs.
        let obstacles = kinds
            .map(|kind| Obstacle {
                kind,
                position: snake.head(),
            })
            .collect();

        let mut set = Self { obstacles };
        set.place_all_unique(grid, snake, rng);
        set
    }

    #[cfg(test)]
    pub(crate) fn from_obstacles(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, index: usize, position: Position) {
        self.obstacles[index].position = position;
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    pub fn count_of(&self, kind: ObstacleKind) -> usize {
        self.obstacles.iter().filter(|o| o.kind == kind).count()
    }

    /// First obstacle at `pos` in priority order.
    pub fn find_at(&self, pos: Position) -> Option<(usize, ObstacleKind)> {
        self.obstacles
            .iter()
            .position(|o| o.position == pos)
            .map(|idx| (idx, self.obstacles[idx].kind))
    }

    /// Re-places every obstacle. Each draw avoids the snake and every cell
    /// already handed out earlier in the same pass.
    ///
    /// Does not terminate unless `snake.len() + self.len() <= grid.field_size()`.
    pub fn place_all_unique(&mut self, grid: &GridTopology, snake: &SnakeBody, rng: &mut SessionRng) {
        let mut placed: HashSet<Position> = HashSet::with_capacity(self.obstacles.len());
        for obstacle in &mut self.obstacles {
            let position = loop {
                let candidate = grid.random_cell(rng);
                if !snake.contains(candidate) && !placed.contains(&candidate) {
                    break candidate;
                }
            };
            placed.insert(position);
            obstacle.position = position;
        }
    }

    /// Moves one obstacle to a cell free of the snake and of every obstacle,
    /// its own current cell included.
    ///
    /// Does not terminate unless `has_free_cell` holds.
    pub fn respawn_one(
        &mut self,
        index: usize,
        grid: &GridTopology,
        snake: &SnakeBody,
        rng: &mut SessionRng,
    ) {
        if index >= self.obstacles.len() {
            return;
        }
        let taken: HashSet<Position> = self.obstacles.iter().map(|o| o.position).collect();
        let position = loop {
            let candidate = grid.random_cell(rng);
            if !snake.contains(candidate) && !taken.contains(&candidate) {
                break candidate;
            }
        };
        self.obstacles[index].position = position;
    }

    /// Distinct cells covered by the snake or any obstacle.
    pub fn occupied_cell_count(&self, snake: &SnakeBody) -> usize {
        let on_snake = self
            .obstacles
            .iter()
            .filter(|o| snake.contains(o.position))
            .count();
        snake.len() + self.obstacles.len() - on_snake
    }

    pub fn has_free_cell(&self, grid: &GridTopology, snake: &SnakeBody) -> bool {
        self.occupied_cell_count(snake) < grid.field_size()
    }

    pub fn is_disjoint_from(&self, snake: &SnakeBody) -> bool {
        let mut seen = HashSet::with_capacity(self.obstacles.len());
        self.obstacles
            .iter()
            .all(|o| !snake.contains(o.position) && seen.insert(o.position))
    }
}
