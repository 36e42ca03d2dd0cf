#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    Continue,
    Exit,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "New game",
            MenuItem::Continue => "Continue",
            MenuItem::Exit => "Exit",
        }
    }
}

pub const MENU_ITEMS: [MenuItem; 3] = [MenuItem::NewGame, MenuItem::Continue, MenuItem::Exit];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIntent {
    Up,
    Down,
    Select,
    Cancel,
}

/// What the session has to do after the menu handled an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    None,
    NewGame,
    Exit,
}

/// Run and pause state. Starts open, on the first item, before any game was
/// started.
#[derive(Clone, Debug)]
pub struct GameMenu {
    open: bool,
    selected: usize,
    first_session: bool,
    running: bool,
}

impl Default for GameMenu {
    fn default() -> Self {
        Self {
            open: true,
            selected: 0,
            first_session: true,
            running: true,
        }
    }
}

impl GameMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_first_session(&self) -> bool {
        self.first_session
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> MenuItem {
        MENU_ITEMS[self.selected]
    }

    /// Continue stays inert until a game has been started.
    pub fn is_item_enabled(&self, item: MenuItem) -> bool {
        !(item == MenuItem::Continue && self.first_session)
    }

    pub fn labels(&self) -> [&'static str; 3] {
        MENU_ITEMS.map(|item| item.label())
    }

    pub fn handle(&mut self, intent: MenuIntent) -> MenuAction {
        if !self.running {
            return MenuAction::None;
        }
        match intent {
            MenuIntent::Cancel => self.cancel(),
            _ if !self.open => MenuAction::None,
            MenuIntent::Up => {
                self.selected = self.selected.saturating_sub(1);
                MenuAction::None
            }
            MenuIntent::Down => {
                self.selected = (self.selected + 1).min(MENU_ITEMS.len() - 1);
                MenuAction::None
            }
            MenuIntent::Select => self.select(),
        }
    }

    fn select(&mut self) -> MenuAction {
        match self.selected_item() {
            MenuItem::NewGame => {
                self.open = false;
                if self.first_session {
                    // The initial board is already standing.
                    self.first_session = false;
                    MenuAction::None
                } else {
                    MenuAction::NewGame
                }
            }
            MenuItem::Continue => {
                if !self.first_session {
                    self.open = false;
                }
                MenuAction::None
            }
            MenuItem::Exit => {
                self.stop();
                MenuAction::Exit
            }
        }
    }

    fn cancel(&mut self) -> MenuAction {
        if self.first_session {
            self.stop();
            return MenuAction::Exit;
        }
        self.open = !self.open;
        MenuAction::None
    }

    fn stop(&mut self) {
        self.running = false;
        self.open = false;
    }
}
