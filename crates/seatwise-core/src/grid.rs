// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Dense Seat Grids
//!
//! A `Grid<T>` stores at most one value per `(row, column)` cell of a
//! rectangle, flattened row-major into a single `Vec<Option<T>>`. Positions
//! are **1-indexed** because that is how seats are numbered on a room plan:
//! `(1, 1)` is the front-left seat. Row `0` and column `0` are valid
//! arguments to the read accessors and simply read as empty, which lets
//! callers ask for "the seat to the left of column 1" without special casing.
//!
//! Writes are bounds-checked in debug builds only; the allocator never
//! addresses cells outside the room it walks.

/// A dense, row-major grid with an explicit empty cell (`None`).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

#[inline(always)]
fn flatten(columns: usize, row: usize, column: usize) -> usize {
    (row - 1) * columns + (column - 1)
}

impl<T> Grid<T> {
    /// Creates an empty `rows x columns` grid.
    ///
    /// ```rust
    /// use seatwise_core::grid::Grid;
    ///
    /// let grid = Grid::<u32>::new(2, 3);
    /// assert_eq!(grid.len(), 6);
    /// assert_eq!(grid.count_occupied(), 0);
    /// ```
    pub fn new(rows: usize, columns: usize) -> Self {
        let len = rows * columns;
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, || None);
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of cells, occupied or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `(row, column)` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row >= 1 && column >= 1 && row <= self.rows && column <= self.columns
    }

    /// Returns the value at `(row, column)`, or `None` if the cell is empty
    /// or lies outside the grid.
    ///
    /// ```rust
    /// use seatwise_core::grid::Grid;
    ///
    /// let mut grid = Grid::new(2, 2);
    /// grid.set(1, 2, 'a');
    /// assert_eq!(grid.get(1, 2), Some(&'a'));
    /// assert_eq!(grid.get(1, 1), None);
    /// assert_eq!(grid.get(0, 2), None);
    /// assert_eq!(grid.get(3, 1), None);
    /// ```
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if !self.contains(row, column) {
            return None;
        }
        self.cells[flatten(self.columns, row, column)].as_ref()
    }

    /// Stores `value` at `(row, column)` and returns the previous occupant.
    ///
    /// # Panics
    ///
    /// Panics if `(row, column)` lies outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Option<T> {
        assert!(
            self.contains(row, column),
            "called `Grid::set` with position out of bounds: the grid is {}x{} but the position is ({}, {})",
            self.rows,
            self.columns,
            row,
            column
        );

        let index = flatten(self.columns, row, column);
        self.cells[index].replace(value)
    }

    /// Empties the cell at `(row, column)` and returns its occupant.
    #[inline]
    pub fn take(&mut self, row: usize, column: usize) -> Option<T> {
        if !self.contains(row, column) {
            return None;
        }
        let index = flatten(self.columns, row, column);
        self.cells[index].take()
    }

    /// Empties every cell while keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Returns the number of occupied cells.
    #[inline]
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates over `(row, column)` of every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let columns = self.columns;
        (1..=self.rows).flat_map(move |row| (1..=columns).map(move |column| (row, column)))
    }

    /// Iterates over occupied cells as `(row, column, &value)` in row-major order.
    ///
    /// ```rust
    /// use seatwise_core::grid::Grid;
    ///
    /// let mut grid = Grid::new(2, 2);
    /// grid.set(2, 1, "c");
    /// grid.set(1, 2, "b");
    /// let seen: Vec<_> = grid.occupied().collect();
    /// assert_eq!(seen, vec![(1, 2, &"b"), (2, 1, &"c")]);
    /// ```
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let columns = self.columns;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.as_ref()
                .map(|value| (index / columns + 1, index % columns + 1, value))
        })
    }
}

impl<T> std::fmt::Debug for Grid<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("occupied", &self.count_occupied())
            .finish()
    }
}

impl<T> std::fmt::Display for Grid<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=self.rows {
            for column in 1..=self.columns {
                if column > 1 {
                    write!(f, " ")?;
                }
                match self.get(row, column) {
                    Some(value) => write!(f, "{}", value)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
