//! Terminal output for markdown produced by `stride_core::display`.
//!
//! Rich mode styles headings, bold and inline code through termimad; plain
//! mode prints the markdown unchanged, which is what the tests and pipes see.

use anyhow::Result;
use termimad::{
    crossterm::style::{Attribute, Color, Stylize},
    MadSkin,
};

/// Prints markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Cyan);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // keep the hashes visible so the heading level stays readable
                println!("{}", line.with(Color::Green).attribute(Attribute::Bold));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
