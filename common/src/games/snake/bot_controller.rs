use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::game_state::SnakeGameState;
use super::obstacles::ObstacleKind;
use super::types::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SnakeBotType {
    #[default]
    Efficient,
    Random,
}

/// Produces a directional intent for headless runs.
pub struct BotController;

impl BotController {
    pub fn calculate_move(
        bot_type: SnakeBotType,
        state: &SnakeGameState,
        rng: &mut SessionRng,
    ) -> Option<Direction> {
        match bot_type {
            SnakeBotType::Efficient => Self::efficient_pathfinding(state, rng),
            SnakeBotType::Random => Self::random_valid_move(state, rng),
        }
    }

    fn efficient_pathfinding(state: &SnakeGameState, rng: &mut SessionRng) -> Option<Direction> {
        let snake = state.snake();
        let head = snake.head();
        let Some(target) = Self::find_nearest_good_apple(head, state) else {
            return Self::random_valid_move(state, rng);
        };

        let mut best_dir = None;
        let mut best_distance = usize::MAX;

        for dir in Self::get_valid_directions(snake.direction()) {
            let next_pos = state.grid().neighbor(head, dir);
            if Self::is_safe_position(next_pos, state) {
                let distance = state.grid().toroidal_distance(next_pos, target);
                if distance < best_distance {
                    best_distance = distance;
                    best_dir = Some(dir);
                }
            }
        }

        best_dir.or_else(|| Self::random_valid_move(state, rng))
    }

    fn random_valid_move(state: &SnakeGameState, rng: &mut SessionRng) -> Option<Direction> {
        let snake = state.snake();
        let head = snake.head();
        let safe_directions: Vec<Direction> = Self::get_valid_directions(snake.direction())
            .into_iter()
            .filter(|&dir| Self::is_safe_position(state.grid().neighbor(head, dir), state))
            .collect();

        rng.choose(&safe_directions)
            .copied()
            .or(Some(snake.direction()))
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn find_nearest_good_apple(from: Position, state: &SnakeGameState) -> Option<Position> {
        state
            .obstacles()
            .iter()
            .filter(|o| o.kind == ObstacleKind::GoodApple)
            .map(|o| o.position)
            .min_by_key(|pos| state.grid().toroidal_distance(from, *pos))
    }

    /// The tail cell is unsafe too: a bite is checked before the tail moves.
    fn is_safe_position(pos: Position, state: &SnakeGameState) -> bool {
        if state.snake().contains(pos) {
            return false;
        }
        !matches!(
            state.obstacles().find_at(pos),
            Some((_, ObstacleKind::Stone | ObstacleKind::BadApple))
        )
    }
}
