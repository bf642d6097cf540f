use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands the game itself understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Up,
    Right,
    Down,
    Left,
    Pause,
    Grow,
}

/// What a key press means to the session loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    /// Freeze the clock without touching the game
    Hold,
    Quit,
    None,
}

pub fn map_key(ev: &KeyEvent) -> KeyAction {
    if is_ctrl_c(ev) {
        return KeyAction::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => KeyAction::Game(Command::Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => KeyAction::Game(Command::Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => KeyAction::Game(Command::Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => KeyAction::Game(Command::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Game(Command::Pause),
        KeyCode::Char(' ') => KeyAction::Game(Command::Grow),
        KeyCode::Esc => KeyAction::Hold,
        _ => KeyAction::None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
