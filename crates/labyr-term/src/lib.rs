//! Crossterm terminal renderer for labyr searches.
//!
//! Provides a [`TermRenderer`] that implements [`labyr_search::Observer`],
//! redrawing a [`Frame`] of the maze on every search step.

mod frame;

pub use frame::{Frame, Mark};

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use labyr_core::{CellKind, Grid};
use labyr_search::{Observer, Progress, SearchOutcome};

/// Display options for [`TermRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermConfig {
    /// Colour glyphs by what they mark.
    pub color: bool,
    /// Clear the screen and home the cursor before each frame.
    pub clear: bool,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear: true,
        }
    }
}

/// Maps a [`Mark`] to a terminal colour.
fn mark_color(m: Mark) -> Color {
    match m {
        Mark::Cell(CellKind::Start) => Color::Yellow,
        Mark::Cell(CellKind::Objective) => Color::Green,
        Mark::Cell(CellKind::Obstacle) => Color::DarkGrey,
        Mark::Cell(CellKind::Open) | Mark::Gap => Color::Reset,
        Mark::Visited => Color::Blue,
        Mark::Frontier => Color::Magenta,
        Mark::Path => Color::Cyan,
    }
}

/// Terminal observer that draws every search step to a writer.
pub struct TermRenderer<W: Write> {
    out: W,
    config: TermConfig,
    cursor_hidden: bool,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            config: TermConfig::default(),
            cursor_hidden: false,
        }
    }

    pub fn with_config(mut self, config: TermConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the renderer and return its writer.
    pub fn into_inner(mut self) -> W {
        self.restore_cursor();
        self.out
    }

    /// Draw one frame.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        if self.config.clear {
            if !self.cursor_hidden {
                queue!(self.out, cursor::Hide)?;
                self.cursor_hidden = true;
            }
            queue!(
                self.out,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }

        writeln!(self.out, "{}", frame.header.trim_end())?;
        writeln!(self.out)?;
        for row in &frame.rows {
            for &m in row {
                if self.config.color {
                    queue!(
                        self.out,
                        SetForegroundColor(mark_color(m)),
                        Print(m.glyph())
                    )?;
                } else {
                    write!(self.out, "{}", m.glyph())?;
                }
            }
            if self.config.color {
                queue!(self.out, ResetColor)?;
            }
            writeln!(self.out)?;
        }

        self.out.flush()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)?;
        self.out.flush()
    }

    /// Show the cursor again if a clearing draw hid it.
    ///
    /// The flag is cleared even when the write fails, so a broken writer is
    /// reported once rather than on every later call.
    fn restore_cursor(&mut self) {
        if self.cursor_hidden {
            self.cursor_hidden = false;
            if let Err(e) = self.show_cursor() {
                log::warn!("failed to restore cursor: {e}");
            }
        }
    }

    fn draw_or_warn(&mut self, frame: &Frame) {
        if let Err(e) = self.draw(frame) {
            log::warn!("failed to draw search frame: {e}");
        }
    }
}

impl<W: Write> Observer<Grid> for TermRenderer<W> {
    fn on_step(&mut self, grid: &Grid, progress: &Progress<'_>) {
        self.draw_or_warn(&Frame::render(grid, progress, None));
    }

    fn on_finish(&mut self, grid: &Grid, progress: &Progress<'_>, outcome: &SearchOutcome) {
        self.draw_or_warn(&Frame::render(grid, progress, Some(outcome)));
        self.restore_cursor();
    }
}
