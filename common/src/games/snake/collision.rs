use super::grid::GridTopology;
use super::obstacles::{ObstacleKind, ObstacleSet};
use super::snake::SnakeBody;
use super::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetCause {
    SelfBite,
    Stone,
    /// An apple was eaten but no free cell is left to respawn it.
    BoardFull(ObstacleKind),
    NewGame,
}

/// Effect of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    Advance(Position),
    Grow { index: usize, position: Position },
    Shrink { index: usize },
    FullReset(ResetCause),
}

/// Classifies the cell the head is about to enter. Self first, then obstacles
/// in priority order; positions are unique so at most one obstacle matches.
pub fn resolve(
    snake: &SnakeBody,
    obstacles: &ObstacleSet,
    grid: &GridTopology,
    prospective_head: Position,
) -> CollisionOutcome {
    if snake.can_bite_self(prospective_head) {
        return CollisionOutcome::FullReset(ResetCause::SelfBite);
    }

    let Some((index, kind)) = obstacles.find_at(prospective_head) else {
        return CollisionOutcome::Advance(prospective_head);
    };

    match kind {
        ObstacleKind::GoodApple => {
            if snake.len() + 1 + obstacles.len() <= grid.field_size() {
                CollisionOutcome::Grow {
                    index,
                    position: prospective_head,
                }
            } else {
                CollisionOutcome::FullReset(ResetCause::BoardFull(kind))
            }
        }
        ObstacleKind::BadApple => {
            let length_after = snake.len().saturating_sub(1).max(1);
            if length_after + obstacles.len() < grid.field_size() {
                CollisionOutcome::Shrink { index }
            } else {
                CollisionOutcome::FullReset(ResetCause::BoardFull(kind))
            }
        }
        ObstacleKind::Stone => CollisionOutcome::FullReset(ResetCause::Stone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::obstacles::Obstacle;
    use crate::games::snake::Direction;

    fn obstacle(kind: ObstacleKind, x: usize, y: usize) -> Obstacle {
        Obstacle {
            kind,
            position: Position::new(x, y),
        }
    }

    fn straight_snake(len: usize) -> SnakeBody {
        let segments: Vec<Position> = (0..len).map(|i| Position::new(10 - i, 5)).collect();
        SnakeBody::from_segments(&segments, Direction::Right)
    }

    #[test]
    fn test_empty_cell_advances() {
        let grid = GridTopology::new(32, 24, 20);
        let snake = straight_snake(3);
        let obstacles = ObstacleSet::from_obstacles(vec![obstacle(ObstacleKind::Stone, 0, 0)]);
        let head = snake.prospective_head(&grid);
        assert_eq!(
            resolve(&snake, &obstacles, &grid, head),
            CollisionOutcome::Advance(Position::new(11, 5))
        );
    }

    #[test]
    fn test_each_obstacle_kind() {
        let grid = GridTopology::new(32, 24, 20);
        let snake = straight_snake(2);
        let target = Position::new(11, 5);

        let cases = [
            (
                ObstacleKind::GoodApple,
                CollisionOutcome::Grow {
                    index: 0,
                    position: target,
                },
            ),
            (ObstacleKind::BadApple, CollisionOutcome::Shrink { index: 0 }),
            (
                ObstacleKind::Stone,
                CollisionOutcome::FullReset(ResetCause::Stone),
            ),
        ];
        for (kind, expected) in cases {
            let obstacles = ObstacleSet::from_obstacles(vec![obstacle(kind, 11, 5)]);
            assert_eq!(resolve(&snake, &obstacles, &grid, target), expected);
        }
    }

    #[test]
    fn test_self_bite_wins_over_obstacles() {
        let grid = GridTopology::new(32, 24, 20);
        let snake = straight_snake(4);
        let obstacles = ObstacleSet::from_obstacles(vec![obstacle(ObstacleKind::GoodApple, 8, 5)]);
        assert_eq!(
            resolve(&snake, &obstacles, &grid, Position::new(8, 5)),
            CollisionOutcome::FullReset(ResetCause::SelfBite)
        );
    }

    #[test]
    fn test_tail_cell_counts_as_bite() {
        let grid = GridTopology::new(32, 24, 20);
        let snake = straight_snake(3);
        assert_eq!(
            resolve(&snake, &ObstacleSet::from_obstacles(vec![]), &grid, snake.tail()),
            CollisionOutcome::FullReset(ResetCause::SelfBite)
        );
    }

    #[test]
    fn test_good_apple_on_full_board_resets() {
        // 2x2: snake of 2 plus 2 apples covers the board, no room to grow.
        let grid = GridTopology::new(2, 2, 1);
        let snake = SnakeBody::from_segments(
            &[Position::new(0, 0), Position::new(0, 1)],
            Direction::Right,
        );
        let obstacles = ObstacleSet::from_obstacles(vec![
            obstacle(ObstacleKind::GoodApple, 1, 0),
            obstacle(ObstacleKind::GoodApple, 1, 1),
        ]);
        assert_eq!(
            resolve(&snake, &obstacles, &grid, Position::new(1, 0)),
            CollisionOutcome::FullReset(ResetCause::BoardFull(ObstacleKind::GoodApple))
        );
    }

    #[test]
    fn test_good_apple_with_exact_room_grows() {
        // 2x2: snake of 1 plus 2 apples; growing fills the last cell.
        let grid = GridTopology::new(2, 2, 1);
        let snake = SnakeBody::new(Position::new(0, 0), Direction::Right);
        let obstacles = ObstacleSet::from_obstacles(vec![
            obstacle(ObstacleKind::GoodApple, 1, 0),
            obstacle(ObstacleKind::Stone, 1, 1),
        ]);
        assert!(matches!(
            resolve(&snake, &obstacles, &grid, Position::new(1, 0)),
            CollisionOutcome::Grow { index: 0, .. }
        ));
    }

    #[test]
    fn test_bad_apple_without_free_cell_resets() {
        let grid = GridTopology::new(2, 2, 1);
        let snake = SnakeBody::new(Position::new(0, 0), Direction::Right);
        let obstacles = ObstacleSet::from_obstacles(vec![
            obstacle(ObstacleKind::BadApple, 1, 0),
            obstacle(ObstacleKind::Stone, 1, 1),
            obstacle(ObstacleKind::Stone, 0, 1),
        ]);
        assert_eq!(
            resolve(&snake, &obstacles, &grid, Position::new(1, 0)),
            CollisionOutcome::FullReset(ResetCause::BoardFull(ObstacleKind::BadApple))
        );
    }
}
