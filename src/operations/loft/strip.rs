use tracing::trace;

use super::adjacency::AdjacencyMatrix;
use crate::error::{LoftError, Result};
use crate::math::polygon_2d::is_clockwise;
use crate::operations::planarize::PlanarPath;

/// Walks the adjacency matrix and emits one triangle per step.
///
/// The walk starts at row 0 in its first connected column and takes
/// `rows + cols` steps, moving down a row when possible and right a column
/// otherwise, both with wraparound. Each step yields the triangle
/// `(large[row], small[col], new vertex)`, wound counter-clockwise in the
/// working plane.
///
/// Indices address the output vertex buffer: the larger path's original
/// vertices occupy `[0, large.len())`, the smaller path's follow.
///
/// # Errors
///
/// Returns [`LoftError::NoStartingConnection`] if row 0 has no connection and
/// [`LoftError::BrokenConnectivityPath`] if the walk reaches a cell with no way on
/// or does not come back to its first cell after crossing every row once.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn walk_strip(
    matrix: &AdjacencyMatrix,
    large: &PlanarPath,
    small: &PlanarPath,
) -> Result<Vec<u32>> {
    let offset = large.points().len();
    let large_index = |row: usize| large.source_index(row) as u32;
    let small_index = |col: usize| (offset + small.source_index(col)) as u32;

    let start = matrix
        .first_in_row(0)
        .ok_or(LoftError::NoStartingConnection)?;
    let (mut row, mut col, mut downs) = (0, start, 0);

    let steps = offset + small.points().len();
    let mut indices = Vec::with_capacity(steps * 3);

    for _ in 0..steps {
        let (i1, v1) = (large_index(row), large.points()[row]);
        let (i2, v2) = (small_index(col), small.points()[col]);

        let (i3, v3) = if matrix.get(matrix.next_row(row), col) {
            row = matrix.next_row(row);
            downs += 1;
            (large_index(row), large.points()[row])
        } else if matrix.get(row, matrix.next_col(col)) {
            col = matrix.next_col(col);
            (small_index(col), small.points()[col])
        } else {
            return Err(LoftError::BrokenConnectivityPath { row, col }.into());
        };

        let mut tri = [i1, i2, i3];
        if is_clockwise(&[v1, v2, v3]) {
            tri.reverse();
        }
        trace!(row, col, ?tri, "strip step");
        indices.extend_from_slice(&tri);
    }

    if (row, col) != (0, start) || downs != offset {
        return Err(LoftError::BrokenConnectivityPath { row, col }.into());
    }
    Ok(indices)
}
