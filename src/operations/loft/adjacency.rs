use std::fmt;

use crate::math::angle::{angle_between, polar_angle};
use crate::math::Point3;

/// Boolean connection grid between the larger path (rows) and the smaller path (columns).
///
/// Cell `[row][col]` is set when a bridging edge joins `large[row]` and
/// `small[col]`. Both axes wrap around, matching the cyclic order of the paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates an empty `rows × cols` matrix.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Connects each vertex of `large` to the column whose angular wedge contains it.
    ///
    /// Column `c` spans the wedge `[rays[c], rays[c + 1]]`, bounds inclusive, so a
    /// vertex lying exactly on a ray joins both neighbouring columns.
    #[must_use]
    pub fn from_rays(large: &[Point3], rays: &[f64]) -> Self {
        let cols = rays.len();
        let mut matrix = Self::new(large.len(), cols);
        let angles: Vec<f64> = large.iter().map(polar_angle).collect();
        for col in 0..cols {
            let lo = rays[col];
            let hi = rays[(col + 1) % cols];
            for (row, &angle) in angles.iter().enumerate() {
                if angle_between(lo, angle, hi) {
                    matrix.insert(row, col);
                }
            }
        }
        matrix
    }

    /// Number of rows (vertices of the larger path).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (vertices of the smaller path).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `large[row]` and `small[col]` are connected.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Marks a connection. Returns `true` if the cell was not set before.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.cells[row * self.cols + col];
        let added = !*cell;
        *cell = true;
        added
    }

    /// First connected column of `row`, in index order.
    #[must_use]
    pub fn first_in_row(&self, row: usize) -> Option<usize> {
        (0..self.cols).find(|&col| self.get(row, col))
    }

    /// First column of the first run of connected cells in `row`, wrapping.
    ///
    /// A run that wraps past the last column starts before the seam. A full row
    /// starts at column 0.
    #[must_use]
    pub fn run_start(&self, row: usize) -> Option<usize> {
        let left = |col: usize| (col + self.cols - 1) % self.cols;
        (0..self.cols)
            .find(|&col| self.get(row, col) && !self.get(row, left(col)))
            .or_else(|| self.first_in_row(row))
    }

    /// Number of connections in the matrix.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Row below `row`, wrapping to the first row.
    #[must_use]
    pub fn next_row(&self, row: usize) -> usize {
        (row + 1) % self.rows
    }

    /// Column right of `col`, wrapping to the first column.
    #[must_use]
    pub fn next_col(&self, col: usize) -> usize {
        (col + 1) % self.cols
    }

    /// Number of connected 4-neighbours (up, down, left, right) of a cell, with wraparound.
    ///
    /// Cells inside a well-formed strip have one neighbour they are entered from
    /// and one they continue to.
    #[must_use]
    pub fn degree(&self, row: usize, col: usize) -> usize {
        let up = (row + self.rows - 1) % self.rows;
        let left = (col + self.cols - 1) % self.cols;
        [
            (up, col),
            (self.next_row(row), col),
            (row, left),
            (row, self.next_col(col)),
        ]
        .into_iter()
        .filter(|&(r, c)| self.get(r, c))
        .count()
    }

    /// Connected cells whose degree differs from two.
    pub fn irregular_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col) && self.degree(row, col) != 2)
    }

    /// Returns `true` if the strip can continue from a cell, down or right.
    #[must_use]
    pub fn has_forward_link(&self, row: usize, col: usize) -> bool {
        self.get(self.next_row(row), col) || self.get(row, self.next_col(col))
    }

    /// Finds the next connected cell after `(row, col)` in strip order.
    ///
    /// Scans the rest of the current row, then each following row starting at
    /// `col`, wrapping in both directions. Returns the offset `(rows_down,
    /// cols_right)` to that cell.
    #[must_use]
    pub fn next_connected(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (0..self.rows).find_map(|dr| {
            let r = (row + dr) % self.rows;
            let first = usize::from(dr == 0);
            (first..self.cols)
                .find(|&dc| self.get(r, (col + dc) % self.cols))
                .map(|dc| (dr, dc))
        })
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                f.write_str(if self.get(row, col) { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
