//! Dense edge-weight matrix.

use serde::{Deserialize, Serialize};

use super::weighted::Weight;

/// A dense n×n edge-weight matrix stored in row-major order.
///
/// Cells hold `Some(weight)` for a present edge and `None` for an absent
/// one, so every [`Weight`] value is legal and no sentinel is reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WeightMatrix {
    cells: Vec<Option<Weight>>,
    size: usize,
}

impl WeightMatrix {
    /// Creates a matrix of the given size with every cell empty.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            cells: vec![None; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit n×n cell grid.
    ///
    /// Returns `None` if the cell count doesn't match `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<Option<Weight>>) -> Option<Self> {
        if cells.len() != size * size {
            return None;
        }
        Some(Self { cells, size })
    }

    /// Returns the cell from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds; callers validate first.
    pub(crate) fn get(&self, from: usize, to: usize) -> Option<Weight> {
        self.cells[from * self.size + to]
    }

    /// Sets the cell from `from` to `to`.
    pub(crate) fn set(&mut self, from: usize, to: usize, weight: Option<Weight>) {
        self.cells[from * self.size + to] = weight;
    }

    /// Number of vertices this matrix covers.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Returns the first `(i, j)` pair whose cell differs from its mirror,
    /// or `None` if the matrix is symmetric.
    pub(crate) fn first_asymmetry(&self) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Iterates over the occupied cells of `row` as `(column, weight)` pairs.
    pub(crate) fn row(&self, row: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let start = row * self.size;
        self.cells[start..start + self.size]
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|w| (col, w)))
    }

    /// Counts the occupied cells in column `col`.
    pub(crate) fn column_len(&self, col: usize) -> usize {
        (0..self.size).filter(|&row| self.get(row, col).is_some()).count()
    }
}
