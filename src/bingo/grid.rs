//! # Grid Builder
//!
//! Arranges sampled terms into a square, row-major grid. When the grid has a
//! free cell, the marker is placed at [`bonus_index`] and one fewer term is
//! sampled.

use crate::error::{BingoError, Result};
use crate::sampler::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Flat (row-major) index of the free cell for a grid of `area` cells.
///
/// Both the initial build and every replication pass go through this, so the
/// free cell position for a given area never moves.
pub fn bonus_index(area: usize) -> usize {
    area.saturating_sub(1).div_ceil(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub side_length: usize,
    pub has_free_cell: bool,
}

impl GridSpec {
    pub fn new(side_length: usize, has_free_cell: bool) -> Self {
        Self {
            side_length,
            has_free_cell,
        }
    }

    /// Cell count, saturating at `usize::MAX`. [`build_grid`] rejects sides whose
    /// area does not fit.
    pub fn area(&self) -> usize {
        self.side_length.saturating_mul(self.side_length)
    }

    /// Number of terms drawn from the pool to fill this grid.
    pub fn needed_terms(&self) -> usize {
        self.area().saturating_sub(usize::from(self.has_free_cell))
    }

    pub fn free_index(&self) -> Option<usize> {
        self.has_free_cell.then(|| bonus_index(self.area()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cell {
    Term(String),
    Free,
}

impl Cell {
    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    side_length: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.side_length || col >= self.side_length {
            return None;
        }
        self.cells.get(row * self.side_length + col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side_length)
    }
}

pub fn build_grid<R: Rng + ?Sized>(terms: &[String], spec: GridSpec, rng: &mut R) -> Result<Grid> {
    if spec.side_length == 0 {
        return Err(BingoError::InvalidGrid(
            "side length must be at least 1".to_string(),
        ));
    }
    if spec.side_length.checked_mul(spec.side_length).is_none() {
        return Err(BingoError::InvalidGrid(format!(
            "side length {} is too large",
            spec.side_length
        )));
    }

    let mut cells: Vec<Cell> = sample(terms, spec.needed_terms(), rng)?
        .into_iter()
        .map(Cell::Term)
        .collect();

    if let Some(free) = spec.free_index() {
        cells.insert(free, Cell::Free);
    }

    Ok(Grid {
        side_length: spec.side_length,
        cells,
    })
}
