//! Columnar table storage for one archetype.
//!
//! This module provides [`Table`], the column-major container holding the
//! entities of a single archetype. Each registered component of the archetype
//! occupies one column; a row across all columns is one entity.
//!
//! ## Scope
//! The table works at the byte level, driven entirely by the [`TypeInfo`]
//! layout metadata gathered at archetype registration. Typed access, chunked
//! iteration, and parallel dispatch are the execution engine's concern; this
//! container only guarantees that columns stay densely packed and mutually
//! consistent in row count.
//!
//! ## Design
//! - One contiguous byte buffer per column.
//! - Row stride within a column is `num_bytes` rounded up to `alignment`, so
//!   every row of a well-aligned buffer is itself well-aligned.
//! - Row removal is swap-remove: the last row's bytes are copied into the
//!   vacated slot and the column shrinks by one row. Removal order is
//!   therefore not preserved, matching dense archetype storage semantics.

use crate::state::types::{ArchetypeID, TypeInfo};

/// One component's storage lane within a table.
struct Column {
    stride: usize,
    data: Vec<u8>,
}

impl Column {
    fn new(info: TypeInfo) -> Self {
        Self {
            stride: row_stride(info),
            data: Vec::new(),
        }
    }
}

/// Column-major storage for the entities of one archetype.
///
/// ## Invariants
/// - All columns hold exactly `num_rows` rows at all times.
/// - `columns[i].data.len() == num_rows * columns[i].stride`.
pub struct Table {
    id: ArchetypeID,
    columns: Vec<Column>,
    num_rows: u32,
}

impl Table {
    /// Creates an empty table with one column per layout descriptor.
    pub fn new(type_infos: &[TypeInfo], id: ArchetypeID) -> Self {
        Self {
            id,
            columns: type_infos.iter().map(|info| Column::new(*info)).collect(),
            num_rows: 0,
        }
    }

    /// Identifier of the archetype this table stores.
    #[inline]
    pub fn id(&self) -> ArchetypeID {
        self.id
    }

    /// Number of columns (component lanes).
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of entity rows currently stored.
    #[inline]
    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    /// Appends one zero-initialized row to every column.
    ///
    /// Returns the new row's index. Callers fill the row's component bytes
    /// through [`column_bytes_mut`](Table::column_bytes_mut).
    pub fn add_row(&mut self) -> u32 {
        let row = self.num_rows;
        for column in &mut self.columns {
            column.data.resize(column.data.len() + column.stride, 0);
        }
        self.num_rows += 1;
        row
    }

    /// Removes `row` from every column by swapping in the last row's bytes.
    ///
    /// Returns the index of the row that moved into the vacated slot, or
    /// `None` if the removed row was the last one.
    ///
    /// ## Panics
    /// Panics if `row >= num_rows`.
    pub fn remove_row(&mut self, row: u32) -> Option<u32> {
        assert!(row < self.num_rows, "row {row} out of bounds");

        let last = self.num_rows - 1;
        for column in &mut self.columns {
            if row != last {
                let src = last as usize * column.stride;
                let dst = row as usize * column.stride;
                column.data.copy_within(src..src + column.stride, dst);
            }
            column.data.truncate(last as usize * column.stride);
        }
        self.num_rows = last;

        (row != last).then_some(last)
    }

    /// Raw bytes of one column, `num_rows * stride` long.
    ///
    /// ## Panics
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn column_bytes(&self, column: u32) -> &[u8] {
        &self.columns[column as usize].data
    }

    /// Mutable raw bytes of one column.
    ///
    /// ## Panics
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn column_bytes_mut(&mut self, column: u32) -> &mut [u8] {
        &mut self.columns[column as usize].data
    }

    /// Byte stride between consecutive rows of `column`.
    ///
    /// ## Panics
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn column_stride(&self, column: u32) -> usize {
        self.columns[column as usize].stride
    }
}

/// Rounds a component's size up to its alignment.
///
/// A zero alignment (only possible for hand-built `TypeInfo` values that
/// bypassed registration) is treated as one.
#[inline]
fn row_stride(info: TypeInfo) -> usize {
    let align = (info.alignment as usize).max(1);
    (info.num_bytes as usize).div_ceil(align) * align
}
