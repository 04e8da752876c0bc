//! Terminal rendering surface — all terminal output lives here.
//!
//! The 800×600 scene is scaled onto the terminal grid.  Primitives paint
//! into an in-memory cell buffer; `present` writes the whole buffer in one
//! pass and flushes.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::entities::Rgb;
use crate::geometry::{Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    bg: Rgb,
    fg: Rgb,
    ch: char,
}

const BLANK: Cell = Cell {
    bg: Rgb(0, 0, 0),
    fg: Rgb(255, 255, 255),
    ch: ' ',
};

fn color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        TerminalSurface {
            out,
            cols,
            rows,
            cells: vec![BLANK; usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; usize::from(cols) * usize::from(rows)];
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    // ── Scene ↔ cell mapping ──────────────────────────────────────────────────

    fn col_of(&self, x: i32) -> i32 {
        x * i32::from(self.cols) / SCREEN_WIDTH
    }

    fn row_of(&self, y: i32) -> i32 {
        y * i32::from(self.rows) / SCREEN_HEIGHT
    }

    /// Scene point at the center of cell `(c, r)`.
    fn cell_center(&self, c: i32, r: i32) -> (f64, f64) {
        let cw = f64::from(SCREEN_WIDTH) / f64::from(self.cols.max(1));
        let rh = f64::from(SCREEN_HEIGHT) / f64::from(self.rows.max(1));
        ((f64::from(c) + 0.5) * cw, (f64::from(r) + 0.5) * rh)
    }

    /// Half-open cell span covered by `[start, end)` scene units on one
    /// axis.  Non-empty spans always cover at least one cell.
    fn span(start: i32, end: i32, cells: u16, extent: i32) -> (i32, i32) {
        let n = i32::from(cells);
        let lo = start * n / extent;
        let hi = (end * n + extent - 1) / extent;
        (lo, hi.max(lo + 1))
    }

    fn cell_span(&self, rect: Rect) -> Option<(i32, i32, i32, i32)> {
        if rect.is_empty() {
            return None;
        }
        let (c0, c1) = Self::span(rect.x, rect.right(), self.cols, SCREEN_WIDTH);
        let (r0, r1) = Self::span(rect.y, rect.bottom(), self.rows, SCREEN_HEIGHT);
        Some((c0, c1, r0, r1))
    }

    fn cell_mut(&mut self, c: i32, r: i32) -> Option<&mut Cell> {
        if c < 0 || r < 0 || c >= i32::from(self.cols) || r >= i32::from(self.rows) {
            return None;
        }
        let idx = r as usize * usize::from(self.cols) + c as usize;
        self.cells.get_mut(idx)
    }

    fn paint(&mut self, c: i32, r: i32, bg: Rgb) {
        if let Some(cell) = self.cell_mut(c, r) {
            *cell = Cell { bg, fg: cell.fg, ch: ' ' };
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn fill_background(&mut self, color: Rgb) {
        let blank = Cell { bg: color, ..BLANK };
        self.cells.fill(blank);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some((c0, c1, r0, r1)) = self.cell_span(rect) else {
            return;
        };
        for r in r0..r1 {
            for c in c0..c1 {
                self.paint(c, r, color);
            }
        }
    }

    fn outline_rect(&mut self, rect: Rect, color: Rgb) {
        let Some((c0, c1, r0, r1)) = self.cell_span(rect) else {
            return;
        };
        for c in c0..c1 {
            self.paint(c, r0, color);
            self.paint(c, r1 - 1, color);
        }
        for r in r0..r1 {
            self.paint(c0, r, color);
            self.paint(c1 - 1, r, color);
        }
    }

    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb) {
        let (cx, cy) = (f64::from(center.0), f64::from(center.1));
        let rad = f64::from(radius.max(0));
        let bounds = Rect::new(center.0 - radius, center.1 - radius, radius * 2 + 1, radius * 2 + 1);
        if let Some((c0, c1, r0, r1)) = self.cell_span(bounds) {
            for r in r0..r1 {
                for c in c0..c1 {
                    let (px, py) = self.cell_center(c, r);
                    if (px - cx).powi(2) + (py - cy).powi(2) <= rad * rad {
                        self.paint(c, r, color);
                    }
                }
            }
        }
        // Small circles still show up as one cell.
        let (c, r) = (self.col_of(center.0), self.row_of(center.1));
        self.paint(c, r, color);
    }

    fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
        let Some((c0, c1, r0, r1)) =
            self.cell_span(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
        else {
            return;
        };

        for r in r0..r1 {
            for c in c0..c1 {
                let (px, py) = self.cell_center(c, r);
                if point_in_polygon(px, py, points) {
                    self.paint(c, r, color);
                }
            }
        }
    }

    fn draw_text(&mut self, pos: (i32, i32), text: &str, color: Rgb) {
        let row = self.row_of(pos.1);
        let start = self.col_of(pos.0);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.ch = ch;
                cell.fg = color;
            }
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut last: Option<(Rgb, Rgb)> = None;
        for r in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, r))?;
            for c in 0..self.cols {
                let cell = self.cells[usize::from(r) * usize::from(self.cols) + usize::from(c)];
                if last != Some((cell.bg, cell.fg)) {
                    self.out.queue(style::SetBackgroundColor(color(cell.bg)))?;
                    self.out.queue(style::SetForegroundColor(color(cell.fg)))?;
                    last = Some((cell.bg, cell.fg));
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }
}

/// Even-odd rule.
fn point_in_polygon(px: f64, py: f64, points: &[(i32, i32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (f64::from(points[i].0), f64::from(points[i].1));
        let (xj, yj) = (f64::from(points[j].0), f64::from(points[j].1));
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
