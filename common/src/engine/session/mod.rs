mod menu;
mod snake_session;
mod tick_scheduler;

pub use menu::{GameMenu, MENU_ITEMS, MenuAction, MenuIntent, MenuItem};
pub use snake_session::{PollInput, PollReport, SnakeSession};
pub use tick_scheduler::TickScheduler;
