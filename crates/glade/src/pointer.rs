//! Mouse and focus reporting for the lifetime of the app.

use std::io::{self, Write};

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;

/// Keeps mouse capture and focus reporting on until dropped.
///
/// Dropping also runs while a panic unwinds, so the terminal never stays in
/// mouse reporting mode after the app exits.
#[derive(Debug)]
pub struct PointerCapture<W: Write> {
    out: W,
}

impl<W: Write> PointerCapture<W> {
    pub fn enable(mut out: W) -> io::Result<Self> {
        execute!(out, EnableMouseCapture, EnableFocusChange)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for PointerCapture<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, DisableMouseCapture, DisableFocusChange) {
            log::warn!("failed to disable pointer capture: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic;

    use super::*;

    const MOUSE_OFF: &str = "\x1b[?1000l";
    const FOCUS_OFF: &str = "\x1b[?1004l";

    #[test]
    fn test_enable_then_drop_turns_reporting_off() {
        let mut out = Vec::new();
        let capture = PointerCapture::enable(&mut out).unwrap();
        drop(capture);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1000h"));
        assert!(written.contains("\x1b[?1004h"));
        assert!(written.ends_with(FOCUS_OFF));
        assert!(written.contains(MOUSE_OFF));
    }

    #[test]
    fn test_panic_still_turns_reporting_off() {
        let mut out = Vec::new();
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _capture = PointerCapture::enable(&mut out).unwrap();
            panic!("app crashed");
        }));
        assert!(result.is_err());
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(MOUSE_OFF));
        assert!(written.ends_with(FOCUS_OFF));
    }
}
