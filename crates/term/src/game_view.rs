//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Marker, BOARD_SIDE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Grid line glyphs; Unicode box drawing by default, ASCII on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridGlyphs {
    corners: [char; 4], // tl, tr, bl, br
    tee_top: char,
    tee_bottom: char,
    tee_left: char,
    tee_right: char,
    cross: char,
    horizontal: char,
    vertical: char,
    turn_arrow: char,
}

impl GridGlyphs {
    const UNICODE: Self = Self {
        corners: ['┌', '┐', '└', '┘'],
        tee_top: '┬',
        tee_bottom: '┴',
        tee_left: '├',
        tee_right: '┤',
        cross: '┼',
        horizontal: '─',
        vertical: '│',
        turn_arrow: '▶',
    };

    const ASCII: Self = Self {
        corners: ['+', '+', '+', '+'],
        tee_top: '+',
        tee_bottom: '+',
        tee_left: '+',
        tee_right: '+',
        cross: '+',
        horizontal: '-',
        vertical: '|',
        turn_arrow: '>',
    };
}

/// A lightweight terminal view for the tic-tac-toe board.
pub struct GameView {
    /// Interior cell width in terminal columns.
    cell_w: u16,
    /// Interior cell height in terminal rows.
    cell_h: u16,
    glyphs: GridGlyphs,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 interiors read roughly square on typical terminal glyphs.
        Self {
            cell_w: 7,
            cell_h: 3,
            glyphs: GridGlyphs::UNICODE,
        }
    }
}

impl GameView {
    pub fn new(ascii: bool) -> Self {
        Self {
            glyphs: if ascii {
                GridGlyphs::ASCII
            } else {
                GridGlyphs::UNICODE
            },
            ..Self::default()
        }
    }

    /// Build a view honoring `TICTACTOE_ASCII` (truthy enables plain ASCII
    /// grid glyphs for terminals without box-drawing support).
    pub fn from_env() -> Self {
        let ascii = std::env::var("TICTACTOE_ASCII")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self::new(ascii)
    }

    fn grid_size(&self) -> (u16, u16) {
        let side = BOARD_SIDE as u16;
        (side * self.cell_w + side + 1, side * self.cell_h + side + 1)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `cursor` is the highlighted cell (hidden once the game is over);
    /// `result` is the current result line, empty while in progress.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        result: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (grid_w, grid_h) = self.grid_size();
        // Header, gap, grid, gap, result line.
        let block_h = grid_h + 4;
        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = viewport.height.saturating_sub(block_h) / 2;
        let grid_y = start_y + 2;

        self.draw_header(fb, snap, viewport, start_y);
        self.draw_grid(fb, start_x, grid_y);

        let cursor = if snap.game_over { None } else { cursor };
        for index in 0..snap.cells.len() {
            self.draw_cell(fb, snap, index, cursor, start_x, grid_y);
        }

        // Result line under the grid.
        if !result.is_empty() {
            let x = centered_x(viewport.width, result.chars().count());
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            fb.put_str(x, grid_y + grid_h + 1, result, style);
        }

        self.draw_footer(fb, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        result: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, result, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, y: u16) {
        let plain = CellStyle::default();
        let active = CellStyle {
            bold: true,
            ..plain
        };

        let one = format!("{} (X)", snap.player_names[0]);
        let two = format!("{} (O)", snap.player_names[1]);
        let total = one.chars().count() + 4 + two.chars().count() + 2;
        let mut x = centered_x(viewport.width, total);

        // Turn arrow marks the active player while the game runs.
        let arrow = |index: u8| {
            if !snap.game_over && snap.active_index == index {
                self.glyphs.turn_arrow
            } else {
                ' '
            }
        };

        fb.put_char(x, y, arrow(0), active);
        x += 1;
        fb.put_str(x, y, &one, if snap.active_index == 0 { active } else { plain });
        x += one.chars().count() as u16;
        fb.put_str(x, y, " vs ", CellStyle { dim: true, ..plain });
        x += 4;
        fb.put_char(x, y, arrow(1), active);
        x += 1;
        fb.put_str(x, y, &two, if snap.active_index == 1 { active } else { plain });
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let g = self.glyphs;
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let side = BOARD_SIDE as u16;

        // Horizontal lattice lines, junctions included.
        for line in 0..=side {
            let y = start_y + line * (self.cell_h + 1);
            for col in 0..=side {
                let x = start_x + col * (self.cell_w + 1);
                let junction = match (line, col) {
                    (0, 0) => g.corners[0],
                    (0, c) if c == side => g.corners[1],
                    (l, 0) if l == side => g.corners[2],
                    (l, c) if l == side && c == side => g.corners[3],
                    (0, _) => g.tee_top,
                    (l, _) if l == side => g.tee_bottom,
                    (_, 0) => g.tee_left,
                    (_, c) if c == side => g.tee_right,
                    _ => g.cross,
                };
                fb.put_char(x, y, junction, style);
                if col < side {
                    for dx in 1..=self.cell_w {
                        fb.put_char(x + dx, y, g.horizontal, style);
                    }
                }
            }
        }

        // Vertical lattice segments between the horizontal lines.
        for line in 0..side {
            let top = start_y + line * (self.cell_h + 1);
            for col in 0..=side {
                let x = start_x + col * (self.cell_w + 1);
                for dy in 1..=self.cell_h {
                    fb.put_char(x, top + dy, g.vertical, style);
                }
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        index: usize,
        cursor: Option<usize>,
        start_x: u16,
        start_y: u16,
    ) {
        let col = (index % BOARD_SIDE) as u16;
        let row = (index / BOARD_SIDE) as u16;
        let px = start_x + 1 + col * (self.cell_w + 1);
        let py = start_y + 1 + row * (self.cell_h + 1);

        let on_winning_triple = snap
            .winning_triple
            .map_or(false, |triple| triple.contains(&index));
        let bg = if cursor == Some(index) {
            Rgb::new(60, 60, 85)
        } else if on_winning_triple {
            Rgb::new(20, 70, 30)
        } else {
            Rgb::new(0, 0, 0)
        };

        let interior = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg,
            bold: false,
            dim: false,
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', interior);

        match snap.marker_at(index) {
            Some(marker) => {
                let fg = match marker {
                    Marker::X => Rgb::new(80, 220, 220),
                    Marker::O => Rgb::new(255, 165, 0),
                };
                let style = CellStyle {
                    fg,
                    bg,
                    bold: true,
                    dim: false,
                };
                fb.put_char(
                    px + self.cell_w / 2,
                    py + self.cell_h / 2,
                    marker.as_char(),
                    style,
                );
            }
            None => {
                // Dim digit hint for direct 1-9 selection.
                let hint = CellStyle {
                    fg: Rgb::new(110, 110, 120),
                    bg,
                    bold: false,
                    dim: true,
                };
                let digit = char::from(b'1' + index as u8);
                fb.put_char(px, py, digit, hint);
            }
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let help = "arrows move  enter place  1-9 direct  n new  r restart  q quit";
        let style = CellStyle {
            fg: Rgb::new(130, 130, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        let y = viewport.height.saturating_sub(1);
        let x = centered_x(viewport.width, help.chars().count());
        fb.put_str(x, y, help, style);
    }
}

fn centered_x(viewport_width: u16, text_width: usize) -> u16 {
    viewport_width.saturating_sub(text_width as u16) / 2
}
