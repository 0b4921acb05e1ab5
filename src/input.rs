use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{info, warn};

use crate::geometry::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    Quit,
    Restart,
}

/// Decodes one key press. Arrows and WASD steer, Esc or Ctrl+C quit and
/// Enter restarts.
pub fn decode_key(ev: &KeyEvent) -> Option<Intent> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_c(ev) {
        return Some(Intent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Intent::Move(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Intent::Move(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Intent::Move(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Intent::Move(Right)),
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Enter => Some(Intent::Restart),
        _ => None,
    }
}

/// Starts the thread that blocks on the terminal and forwards intents.
/// It ends when the receiving side is gone or the terminal stops
/// delivering events.
pub fn spawn_reader(intents: Sender<Intent>) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || read_keys(intents))
        .context("failed to spawn the input thread")
}

fn read_keys(intents: Sender<Intent>) {
    loop {
        let ev = match event::read() {
            Ok(Event::Key(ev)) => ev,
            Ok(_) => continue,
            Err(err) => {
                warn!("reading terminal events failed: {}", err);
                return;
            }
        };

        if let Some(intent) = decode_key(&ev) {
            if intents.send(intent).is_err() {
                info!("intent receiver dropped, input thread exiting");
                return;
            }
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(decode_key(&press(KeyCode::Up)), Some(Intent::Move(Up)));
        assert_eq!(decode_key(&press(KeyCode::Down)), Some(Intent::Move(Down)));
        assert_eq!(decode_key(&press(KeyCode::Left)), Some(Intent::Move(Left)));
        assert_eq!(decode_key(&press(KeyCode::Right)), Some(Intent::Move(Right)));

        assert_eq!(decode_key(&press(KeyCode::Char('w'))), Some(Intent::Move(Up)));
        assert_eq!(decode_key(&press(KeyCode::Char('A'))), Some(Intent::Move(Left)));
        assert_eq!(decode_key(&press(KeyCode::Char('s'))), Some(Intent::Move(Down)));
        assert_eq!(decode_key(&press(KeyCode::Char('D'))), Some(Intent::Move(Right)));
    }

    #[test]
    fn control_keys() {
        assert_eq!(decode_key(&press(KeyCode::Esc)), Some(Intent::Quit));
        assert_eq!(decode_key(&press(KeyCode::Enter)), Some(Intent::Restart));
        assert_eq!(
            decode_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn other_keys_and_releases_are_ignored() {
        assert_eq!(decode_key(&press(KeyCode::Char('c'))), None);
        assert_eq!(decode_key(&press(KeyCode::Tab)), None);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(decode_key(&release), None);
    }
}
