//! Terminal session for the game: mode switching and frame presentation.
//!
//! Entering puts the terminal in raw mode on the alternate screen with mouse
//! reporting on, since tiles are picked by clicking. Every frame is compared
//! with the previous one and only the runs of cells that changed are written;
//! a flipped tile costs a handful of short runs instead of a full repaint.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// True between `enter` and `exit`
    active: bool,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            active: false,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.flush_buf()?;
        self.active = true;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full repaint (after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a frame, then swap it with the previous one.
    ///
    /// On return `fb` holds stale contents sized like the frame just shown,
    /// ready to be redrawn without reallocating.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        prev.resize(fb.width(), fb.height());
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Escape sequence for entering the game screen.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    out.queue(event::EnableMouseCapture)?;
    Ok(())
}

/// Escape sequence undoing [`encode_enter_into`], in reverse order.
pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(event::DisableMouseCapture)?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Encode `next` as a diff against `prev`.
///
/// Without a previous frame, or when the size changed, the screen is cleared
/// and every row written. Returns the number of cells written.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let width = next.width() as usize;
    if width == 0 {
        return Ok(0);
    }

    let mut pen = Pen::default();
    let mut written = 0;
    for (y, row) in next.cells().chunks(width).enumerate() {
        let old = prev.map(|p| &p.cells()[y * width..(y + 1) * width]);
        let mut x = 0;
        while let Some((start, end)) = next_run(old, row, x) {
            out.queue(cursor::MoveTo(start as u16, y as u16))?;
            for cell in &row[start..end] {
                pen.apply(out, cell.style)?;
                out.queue(Print(cell.ch))?;
            }
            written += end - start;
            x = end;
        }
    }

    if pen.current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }
    Ok(written)
}

/// Next run of differing cells at or after `from`, as `start..end`.
fn next_run(old: Option<&[Cell]>, row: &[Cell], from: usize) -> Option<(usize, usize)> {
    let Some(old) = old else {
        return (from < row.len()).then_some((from, row.len()));
    };
    let start = (from..row.len()).find(|&x| old[x] != row[x])?;
    let end = (start..row.len())
        .find(|&x| old[x] == row[x])
        .unwrap_or(row.len());
    Some((start, end))
}

/// Tracks the terminal's current style so unchanged attributes are not resent.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        match self.current {
            Some(cur) if cur == style => return Ok(()),
            Some(cur) if cur.bold == style.bold && cur.dim == style.dim => {
                if cur.fg != style.fg {
                    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
                }
                if cur.bg != style.bg {
                    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
                }
            }
            _ => {
                // SGR reset also clears colours, so resend everything.
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
                out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
            }
        }
        self.current = Some(style);
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
