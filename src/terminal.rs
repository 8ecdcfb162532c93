//! Terminal elements: a line is printed each time an element becomes visible

use std::io::Write;

use crate::indicator::Element;

pub const START_TEXT: &str = "Enter a target URL and press Enter to start watching:";
pub const CONNECTED_TEXT: &str = "[connected]";
pub const TIMEOUT_TEXT: &str = "[timeout]";

/// Text element writing to `out`. Hiding prints nothing; a terminal can't take a line back.
#[derive(Debug)]
pub struct TerminalElement<W> {
    text: &'static str,
    visible: bool,
    out: W,
}

impl<W: Write> TerminalElement<W> {
    /// New hidden element
    pub fn new(text: &'static str, out: W) -> Self {
        Self {
            text,
            visible: false,
            out,
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Element for TerminalElement<W> {
    fn set_visible(&mut self, visible: bool) {
        if visible && !self.visible {
            // Output errors (closed pipe) don't affect the watch loop
            let _ = writeln!(self.out, "{}", self.text);
            let _ = self.out.flush();
        }
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
