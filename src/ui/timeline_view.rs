//! Text rendering of a laid-out day.
//!
//! The day is drawn as a character grid: rows split the 24 hours evenly,
//! columns split the available width. Each block fills the cells covered by
//! its fractional geometry and prints its full or compact label inside.

use crate::core::timeline::{DayTimeline, PositionedBlock};
use crate::utils::colors::paint_block;
use crate::utils::formatting::truncate_to_width;
use crate::utils::table::{Column, Table};

const MINUTES_PER_DAY: usize = 24 * 60;
const PLAIN_FILL: char = '.';

#[derive(Clone, Copy)]
struct Cell {
    owner: Option<usize>,
    ch: char,
}

const EMPTY: Cell = Cell {
    owner: None,
    ch: ' ',
};

pub struct TimelineView {
    columns: usize,
    rows: usize,
    color: bool,
}

impl TimelineView {
    pub fn new(columns: usize, rows: usize, color: bool) -> Self {
        Self {
            columns: columns.max(10),
            rows: rows.clamp(24, MINUTES_PER_DAY),
            color,
        }
    }

    pub fn render(&self, day: &DayTimeline) -> String {
        let mut out = String::new();
        let grid = self.grid(&day.blocks);

        for (r, row) in grid.iter().enumerate() {
            out.push_str(&self.row_label(r));
            out.push_str(" |");
            out.push_str(&self.paint_row(row, &day.blocks));
            out.push_str("|\n");
        }

        out.push('\n');
        out.push_str(&legend(day));
        out
    }

    /// Row range covered by a block, at least one row.
    fn row_span(&self, b: &PositionedBlock) -> (usize, usize) {
        let rows = self.rows as f64;
        let r0 = ((b.top * rows).floor() as usize).min(self.rows - 1);
        let r1 = ((b.bottom() * rows).ceil() as usize).clamp(r0 + 1, self.rows);
        (r0, r1)
    }

    fn col_span(&self, b: &PositionedBlock) -> (usize, usize) {
        let cols = self.columns as f64;
        let c0 = ((b.left * cols).floor() as usize).min(self.columns - 1);
        let w = ((b.width * cols).floor() as usize).max(1);
        (c0, (c0 + w).min(self.columns))
    }

    fn grid(&self, blocks: &[PositionedBlock]) -> Vec<Vec<Cell>> {
        let mut grid = vec![vec![EMPTY; self.columns]; self.rows];
        let fill = if self.color { ' ' } else { PLAIN_FILL };

        for (k, b) in blocks.iter().enumerate() {
            let (r0, r1) = self.row_span(b);
            let (c0, c1) = self.col_span(b);

            for row in grid.iter_mut().take(r1).skip(r0) {
                for cell in row.iter_mut().take(c1).skip(c0) {
                    *cell = Cell {
                        owner: Some(k),
                        ch: fill,
                    };
                }
            }

            for (i, line) in block_lines(b, c1 - c0).iter().take(r1 - r0).enumerate() {
                for (x, ch) in line.chars().take(c1 - c0).enumerate() {
                    grid[r0 + i][c0 + x].ch = ch;
                }
            }
        }

        grid
    }

    fn row_label(&self, r: usize) -> String {
        let start = r * MINUTES_PER_DAY;
        if start % self.rows == 0 && (start / self.rows) % 60 == 0 {
            format!("{:02}:00", start / self.rows / 60)
        } else {
            "     ".to_string()
        }
    }

    /// Render one grid row, painting each run of cells owned by the same block.
    fn paint_row(&self, row: &[Cell], blocks: &[PositionedBlock]) -> String {
        let mut out = String::new();
        let mut run = String::new();
        let mut owner: Option<usize> = None;

        let flush = |run: &mut String, owner: Option<usize>, out: &mut String| {
            match owner {
                Some(k) if self.color => out.push_str(&paint_block(&blocks[k].color, run)),
                _ => out.push_str(run),
            }
            run.clear();
        };

        for cell in row {
            if cell.owner != owner {
                flush(&mut run, owner, &mut out);
                owner = cell.owner;
            }
            run.push(cell.ch);
        }
        flush(&mut run, owner, &mut out);

        out
    }
}

/// Text placed inside a block, already fitted to `width` columns.
fn block_lines(b: &PositionedBlock, width: usize) -> Vec<String> {
    if b.compact {
        return vec![truncate_to_width(&b.compact_text(), width)];
    }

    b.full_lines()
        .iter()
        .flat_map(|line| {
            textwrap::wrap(line, width)
                .into_iter()
                .map(|l| truncate_to_width(&l, width))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn legend(day: &DayTimeline) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 14),
        Column::new("Type", 20),
        Column::new("Time", 13),
        Column::new("Client", 16),
        Column::new("Location", 16),
        Column::new("Lane", 6),
    ]);

    for b in &day.blocks {
        let mut time = format!("{}-{}", b.entry.start_time, b.entry.end_time);
        if !b.time_valid {
            time.push_str(" (!)");
        }
        table.add_row(vec![
            b.entry.id.clone(),
            b.label.clone(),
            time,
            b.entry.client.clone(),
            b.entry.location.clone(),
            format!("{}/{}", b.lane + 1, day.lane_count),
        ]);
    }

    table.render()
}
