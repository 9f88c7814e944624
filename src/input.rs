//! Key events → game commands.  One command per key press; key repeat and
//! release events are ignored so holding the jump key jumps only once.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
    Quit,
}

pub fn translate(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Jump)
        }
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn space_and_up_jump() {
        assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Press)), Some(Command::Jump));
        assert_eq!(translate(&key(KeyCode::Up, KeyEventKind::Press)), Some(Command::Jump));
    }

    #[test]
    fn repeat_and_release_are_ignored() {
        assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Repeat)), None);
        assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Release)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut event = key(KeyCode::Char('c'), KeyEventKind::Press);
        event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(translate(&event), Some(Command::Quit));
        assert_eq!(translate(&key(KeyCode::Char('c'), KeyEventKind::Press)), None);
    }

    #[test]
    fn escape_quits_and_r_restarts() {
        assert_eq!(translate(&key(KeyCode::Esc, KeyEventKind::Press)), Some(Command::Quit));
        assert_eq!(translate(&key(KeyCode::Char('r'), KeyEventKind::Press)), Some(Command::Restart));
    }
}
