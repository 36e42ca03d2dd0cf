use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::{interval, Instant};

use snake_common::games::SessionRng;
use snake_common::games::snake::{BotController, CollisionOutcome};
use snake_common::{log, MenuIntent, PollInput, SnakeSession};

use crate::config::RunnerConfig;

const EXIT_SEQUENCE: [MenuIntent; 4] = [
    MenuIntent::Cancel,
    MenuIntent::Down,
    MenuIntent::Down,
    MenuIntent::Select,
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub polls: u64,
    pub ticks: u64,
    pub resets_seen: u64,
}

/// Drives a session the way a front end would: one poll per interval tick,
/// bot intents while playing, menu intents to start and to quit.
pub async fn run_headless(session: &mut SnakeSession, config: &RunnerConfig) -> RunSummary {
    let poll_interval = Duration::from_secs_f64(1.0 / config.game.polls_per_second as f64);
    let mut poll_timer = interval(poll_interval);
    let started_at = Instant::now();
    let mut bot_rng = SessionRng::from_optional_seed(config.game.seed.map(|s| s.wrapping_add(1)));

    let mut pending_menu: VecDeque<MenuIntent> = VecDeque::from([MenuIntent::Select]);
    let mut exit_requested = false;
    let mut summary = RunSummary::default();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while session.is_running() {
        tokio::select! {
            _ = poll_timer.tick() => {}
            _ = &mut ctrl_c, if !exit_requested => {
                log!("Ctrl+C received, leaving through the menu");
                exit_requested = true;
                pending_menu.extend(EXIT_SEQUENCE);
                continue;
            }
        }

        if !exit_requested && summary.polls >= config.max_polls {
            exit_requested = true;
            pending_menu.extend(EXIT_SEQUENCE);
        }

        let direction = if session.is_menu_open() {
            None
        } else {
            BotController::calculate_move(config.bot, session.game_state(), &mut bot_rng)
        };

        let input = PollInput {
            direction,
            menu: pending_menu.pop_front(),
            now: started_at.elapsed(),
        };
        let report = session.poll(&input);
        summary.polls += 1;

        if let Some(outcome) = report.tick {
            summary.ticks += 1;
            if matches!(outcome, CollisionOutcome::FullReset(_)) {
                summary.resets_seen += 1;
            }
            if config.log_every_ticks > 0 && summary.ticks % config.log_every_ticks == 0 {
                log!("Tick {}: {}", summary.ticks, session.summary());
            }
        }
    }

    log!(
        "Run finished after {} polls and {} ticks. {}",
        summary.polls,
        summary.ticks,
        session.summary()
    );
    summary
}
