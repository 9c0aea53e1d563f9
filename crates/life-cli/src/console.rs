//! Text output: the welcome banner and the board.

use life_core::{CellState, DisplayConfig, WorldConfig};
use life_world::Grid;
use std::io::{self, Write};

/// Print the introduction shown once at startup.
pub fn write_banner<W: Write>(out: &mut W, world: &WorldConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Game of Life!")?;
    writeln!(out)?;
    writeln!(
        out,
        "Life is a cellular automaton devised by John Horton Conway in 1970. It is a"
    )?;
    writeln!(
        out,
        "zero-player game: once the starting pattern is placed, every later generation"
    )?;
    writeln!(out, "follows from the one before it.")?;
    writeln!(out)?;
    writeln!(
        out,
        "You choose how many generations to display. Each is drawn on a {} by {} board",
        world.rows, world.cols
    )?;
    writeln!(out, "using these rules:")?;
    writeln!(out)?;
    writeln!(out, "  - A live cell with fewer than two live neighbours dies (underpopulation).")?;
    writeln!(out, "  - A live cell with two or three live neighbours survives.")?;
    writeln!(out, "  - A live cell with more than three live neighbours dies (overpopulation).")?;
    writeln!(out, "  - A dead cell with exactly three live neighbours comes alive (reproduction).")?;
    writeln!(out)?;
    Ok(())
}

fn glyph(state: CellState, display: &DisplayConfig) -> char {
    match state {
        CellState::Alive => display.live_glyph,
        CellState::Dead => display.dead_glyph,
    }
}

/// Draw one generation: a header line, then one line per row with every
/// cell as separator + glyph.
pub fn render_generation<W: Write>(
    out: &mut W,
    generation: u64,
    grid: &Grid,
    display: &DisplayConfig,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Displaying generation #{generation}")?;

    let mut line = String::with_capacity(grid.cols() * 2);
    for row in grid.rows_iter() {
        line.clear();
        for &state in row {
            line.push(display.separator);
            line.push(glyph(state, display));
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}
