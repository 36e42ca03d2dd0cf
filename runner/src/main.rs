mod config;
mod snake_runner;

use clap::{Parser, ValueEnum};
use snake_common::config::Validate;
use snake_common::games::snake::{SnakeBotType, SnakeSessionSettings};
use snake_common::{log, logger, SnakeSession};

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Efficient,
    Random,
}

impl From<BotArg> for SnakeBotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Efficient => SnakeBotType::Efficient,
            BotArg::Random => SnakeBotType::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "snake_runner", about = "Headless toroidal snake simulation")]
struct Args {
    /// YAML config; defaults to snake_runner_config.yaml next to the binary.
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    polls: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    bot: Option<BotArg>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = config::get_config_manager(args.config.as_deref());
    let mut runner_config = config_manager.get_or_create_config()?;
    if let Some(polls) = args.polls {
        runner_config.max_polls = polls;
    }
    if let Some(seed) = args.seed {
        runner_config.game.seed = Some(seed);
    }
    if let Some(bot) = args.bot {
        runner_config.bot = bot.into();
    }
    runner_config
        .validate()
        .map_err(|e| format!("Invalid settings: {}", e))?;

    let settings = SnakeSessionSettings::from(&runner_config.game);
    let mut session = SnakeSession::new(&settings);

    log!(
        "Starting headless run: {} polls at {} per second, {:?} bot",
        runner_config.max_polls,
        runner_config.game.polls_per_second,
        runner_config.bot
    );
    let summary = snake_runner::run_headless(&mut session, &runner_config).await;
    log!(
        "Resets during run: {}, bad apples eaten: {}",
        summary.resets_seen,
        session.stats().bad_apples_eaten()
    );

    Ok(())
}
