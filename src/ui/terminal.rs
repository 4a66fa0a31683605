// Terminal setup
// Alternate screen and mouse capture, written to any output

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen, capturing the mouse only when enabled
pub fn enter_screen<W: Write>(out: &mut W, mouse_enabled: bool) -> io::Result<()> {
    execute!(out, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(out, EnableMouseCapture)?;
    }
    Ok(())
}

/// Undo `enter_screen`
pub fn leave_screen<W: Write>(out: &mut W, mouse_enabled: bool) -> io::Result<()> {
    if mouse_enabled {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_enter_without_mouse_skips_capture() {
        let out = written(|w| enter_screen(w, false));

        assert!(out.contains("\x1b[?1049h"));
        assert!(!out.contains("\x1b[?1000h"));
    }

    #[test]
    fn test_enter_with_mouse_enables_capture() {
        let out = written(|w| enter_screen(w, true));

        assert!(out.contains("\x1b[?1049h"));
        assert!(out.contains("\x1b[?1000h"));
    }

    #[test]
    fn test_leave_mirrors_enter() {
        let without = written(|w| leave_screen(w, false));
        assert!(without.contains("\x1b[?1049l"));
        assert!(!without.contains("\x1b[?1000l"));

        let with = written(|w| leave_screen(w, true));
        assert!(with.contains("\x1b[?1049l"));
        assert!(with.contains("\x1b[?1000l"));
    }
}
