use std::io::{self, stdout, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use log::error;

use crate::consts::{BORDER_CHAR, DEAD_SNAKE_CHAR, FOOD_CHAR, SNAKE_BODY_CHAR};
use crate::geometry::{Bounds, Point};
use crate::state::Snapshot;
use crate::TermInt;

/// Sink for the post-step state. Called once per tick.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// The four lines shown over the board once the snake is dead.
pub fn game_over_lines(score: u32) -> [String; 4] {
    [
        "Game Over! Press Esc to Exit.".to_string(),
        "Or".to_string(),
        "Enter to Restart Game".to_string(),
        format!("Your Score: {}", score),
    ]
}

pub struct TermRenderer<W: Write = Stdout> {
    out: W,
}

impl TermRenderer<Stdout> {
    /// Takes over the terminal.
    pub fn setup() -> Result<Self> {
        TermRenderer::enter(stdout(), terminal::enable_raw_mode)
    }
}

impl<W: Write> TermRenderer<W> {
    /// Enters the alternate screen and raw mode. On failure whatever was
    /// already switched on is switched back off before the error is
    /// returned, so it lands on the user's normal screen.
    fn enter<F>(out: W, enable_raw_mode: F) -> Result<Self>
    where
        F: FnOnce() -> io::Result<()>,
    {
        let mut term = TermRenderer { out };

        execute!(term.out, EnterAlternateScreen).context("failed to enter the alternate screen")?;

        let res = enable_raw_mode()
            .context("failed to enable raw mode")
            .and_then(|_| {
                execute!(term.out, cursor::Hide, cursor::DisableBlinking).context("failed to hide the cursor")
            });
        if let Err(err) = res {
            term.restore();
            return Err(err);
        }

        Ok(term)
    }

    /// Gives the terminal back. Failures are logged, there is nothing left
    /// to do about them.
    pub fn restore(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(self.out, cursor::Show, cursor::EnableBlinking) {
            error!("failed to show the cursor: {}", err);
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen) {
            error!("failed to leave the alternate screen: {}", err);
        }
    }

    fn print_at(&mut self, pos: Point, ch: char) -> Result<()> {
        queue!(self.out, cursor::MoveTo(pos.x, pos.y), style::Print(ch))?;
        Ok(())
    }

    fn print_str_at(&mut self, pos: Point, s: &str) -> Result<()> {
        queue!(self.out, cursor::MoveTo(pos.x, pos.y), style::Print(s))?;
        Ok(())
    }

    fn draw_borders(&mut self, bounds: Bounds) -> Result<()> {
        let end_x = bounds.width - 1;
        let end_y = bounds.height - 1;

        for x in 0..bounds.width {
            self.print_at(Point::new(x, 0), BORDER_CHAR)?;
            self.print_at(Point::new(x, end_y), BORDER_CHAR)?;
        }

        for y in 1..end_y {
            self.print_at(Point::new(0, y), BORDER_CHAR)?;
            self.print_at(Point::new(end_x, y), BORDER_CHAR)?;
        }

        Ok(())
    }

    // Centered on the frame. Lines wider than the frame spill over its
    // right edge rather than being cut.
    fn show_message(&mut self, bounds: Bounds, lines: &[String]) -> Result<()> {
        let top = (bounds.height / 2).saturating_sub(1);

        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count() as TermInt;
            let x = bounds.width.saturating_sub(len) / 2;
            self.print_str_at(Point::new(x, top + i as TermInt), line)?;
        }

        Ok(())
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All)).context("failed to clear the screen")?;

        let bounds = snapshot.bounds;
        self.draw_borders(bounds)?;

        for (i, pos) in snapshot.body.iter().enumerate() {
            let ch = match (snapshot.alive, i) {
                (false, _) => DEAD_SNAKE_CHAR,
                (true, 0) => snapshot.head_char,
                (true, _) => SNAKE_BODY_CHAR,
            };
            self.print_at(*pos, ch)?;
        }

        self.print_at(snapshot.food, FOOD_CHAR)?;
        self.print_str_at(Point::new(0, bounds.height), &format!("Score: {}", snapshot.score))?;

        if !snapshot.alive {
            self.show_message(bounds, &game_over_lines(snapshot.score))?;
        }

        self.out.flush().context("failed to flush the terminal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_over_overlay_shows_the_score() {
        let lines = game_over_lines(7);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Your Score: 7");
        assert!(lines[0].contains("Esc"));
        assert!(lines[2].contains("Enter"));
    }

    const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
    const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";

    #[test]
    fn failed_setup_leaves_the_alternate_screen() {
        let mut out = Vec::new();
        let not_a_tty = || -> io::Result<()> { Err(io::Error::new(io::ErrorKind::Other, "not a tty")) };
        assert!(TermRenderer::enter(&mut out, not_a_tty).is_err());

        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with(ENTER_ALT_SCREEN));
        assert!(written.ends_with(LEAVE_ALT_SCREEN));
    }

    #[test]
    fn frame_shows_score_and_overlay_when_dead() {
        let snapshot = Snapshot {
            bounds: Bounds::new(20, 10),
            body: vec![Point::new(18, 5), Point::new(17, 5)],
            head_char: '>',
            food: Point::new(3, 3),
            score: 4,
            alive: false,
        };

        let mut out = Vec::new();
        TermRenderer { out: &mut out }.render(&snapshot).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert!(written.contains("Score: 4"));
        assert!(written.contains("Your Score: 4"));
        assert!(written.contains(DEAD_SNAKE_CHAR));
        assert!(!written.contains('>'));
    }
}
