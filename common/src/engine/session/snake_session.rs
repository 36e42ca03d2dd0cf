use std::time::Duration;

use crate::games::SessionRng;
use crate::games::snake::{
    CollisionOutcome, Direction, GameStats, GridTopology, ObstacleSet, Position, ResetCause,
    SnakeBody, SnakeGameState, SnakeSessionSettings,
};
use crate::log;
use super::menu::{GameMenu, MenuAction, MenuIntent};
use super::tick_scheduler::TickScheduler;

/// Everything the presentation layer hands over for one poll.
#[derive(Clone, Copy, Debug, Default)]
pub struct PollInput {
    pub direction: Option<Direction>,
    pub menu: Option<MenuIntent>,
    /// Monotonic time since the session started.
    pub now: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollReport {
    pub tick: Option<CollisionOutcome>,
    pub menu_action: MenuAction,
    pub running: bool,
}

/// Single owner of one play session: board, menu, tick gate and rng.
pub struct SnakeSession {
    game_state: SnakeGameState,
    menu: GameMenu,
    scheduler: TickScheduler,
    rng: SessionRng,
    tick_count: u64,
}

impl SnakeSession {
    pub fn new(settings: &SnakeSessionSettings) -> Self {
        let mut rng = SessionRng::from_optional_seed(settings.seed);
        let game_state = SnakeGameState::new(settings, &mut rng);
        log!(
            "Session created: {}x{} grid, {} obstacles, seed {}",
            settings.grid.width(),
            settings.grid.height(),
            settings.obstacle_counts.total(),
            rng.seed()
        );

        Self {
            game_state,
            menu: GameMenu::new(),
            scheduler: TickScheduler::new(settings.slow_divisor),
            rng,
            tick_count: 0,
        }
    }

    pub fn poll(&mut self, input: &PollInput) -> PollReport {
        let mut report = PollReport {
            tick: None,
            menu_action: MenuAction::None,
            running: self.menu.is_running(),
        };
        if !report.running {
            return report;
        }

        if self.menu.is_open() {
            if let Some(intent) = input.menu {
                report.menu_action = self.handle_menu_intent(intent);
            }
            report.running = self.menu.is_running();
            return report;
        }

        if input.menu == Some(MenuIntent::Cancel) {
            report.menu_action = self.handle_menu_intent(MenuIntent::Cancel);
            report.running = self.menu.is_running();
            return report;
        }

        if let Some(direction) = input.direction {
            self.game_state.buffer_direction(direction);
        }

        if self.scheduler.poll() {
            let outcome = self.game_state.tick(&mut self.rng);
            self.game_state.stats_mut().record_speed(input.now);
            self.tick_count += 1;
            report.tick = Some(outcome);
        }
        report
    }

    fn handle_menu_intent(&mut self, intent: MenuIntent) -> MenuAction {
        let action = self.menu.handle(intent);
        match action {
            MenuAction::NewGame => {
                self.game_state.reset(ResetCause::NewGame, &mut self.rng);
                self.scheduler.reset();
            }
            MenuAction::Exit => {
                log!("Exit requested. {}", self.summary());
            }
            MenuAction::None => {}
        }
        action
    }

    pub fn game_state(&self) -> &SnakeGameState {
        &self.game_state
    }

    pub fn snake(&self) -> &SnakeBody {
        self.game_state.snake()
    }

    pub fn segments(&self) -> Vec<Position> {
        self.game_state.snake().segments().collect()
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        self.game_state.obstacles()
    }

    pub fn last_vacated(&self) -> Option<Position> {
        self.game_state.snake().last_vacated()
    }

    pub fn grid(&self) -> &GridTopology {
        self.game_state.grid()
    }

    pub fn stats(&self) -> &GameStats {
        self.game_state.stats()
    }

    pub fn summary(&self) -> String {
        self.game_state.stats().summary()
    }

    pub fn menu(&self) -> &GameMenu {
        &self.menu
    }

    pub fn is_running(&self) -> bool {
        self.menu.is_running()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn selected_menu_index(&self) -> usize {
        self.menu.selected_index()
    }

    pub fn menu_labels(&self) -> [&'static str; 3] {
        self.menu.labels()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
