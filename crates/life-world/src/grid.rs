//! 2D grid for one generation of the board.

use life_core::{CellState, Direction, Position};
use serde::{Deserialize, Serialize};

/// A fixed-size grid with hard edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether a signed coordinate lies on the grid
    pub fn contains(&self, row: i64, col: i64) -> bool {
        (0..self.rows as i64).contains(&row) && (0..self.cols as i64).contains(&col)
    }

    /// Get cell state at position.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[self.pos_to_index(pos)]
    }

    /// Set cell state at position.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.pos_to_index(pos);
        self.cells[index] = state;
    }

    /// Neighbouring position in `direction`, or `None` past the edge
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.translate(direction.to_offset(), self.rows, self.cols)
    }

    /// Number of live cells among the (up to 8) on-grid neighbours of `pos`
    pub fn count_live_neighbors(&self, pos: Position) -> u8 {
        Direction::all()
            .iter()
            .filter_map(|&dir| self.neighbor(pos, dir))
            .filter(|&n| self.get(n).is_alive())
            .count() as u8
    }

    /// Number of live cells on the grid
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position {} outside {}x{} grid",
            pos,
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Iterator over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (self.index_to_pos(i), state))
    }

    /// One slice per row, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1))
    }

    #[cfg(test)]
    pub(crate) fn cells_ptr(&self) -> *const CellState {
        self.cells.as_ptr()
    }
}
