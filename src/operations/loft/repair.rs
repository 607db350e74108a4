use std::cmp::Reverse;

use super::adjacency::AdjacencyMatrix;

/// Strategy used to patch an adjacency matrix before the strip walk.
///
/// The ray partition alone leaves gaps: columns whose wedge holds no row, and
/// no edges crossing the rays between neighbouring wedges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepairPolicy {
    /// Rebuilds the matrix as a single staircase: each row keeps the wedge it
    /// falls in and is linked across the rays to the wedge of the next row.
    ///
    /// Every row and every column ends up on one closed strip of `rows + cols`
    /// cells, so the walk always closes the collar. Rows whose wedges run
    /// backwards (strongly non-convex paths) are folded onto their predecessor,
    /// which keeps the collar closed but may let it self-intersect.
    #[default]
    AcrossRays,
    /// Greedy patch: every connected cell whose degree differs from two is
    /// linked to the next connected cell, first along its row, then down the
    /// column of that cell.
    ///
    /// Order-dependent; the result is not guaranteed to form a closed strip.
    IrregularCells,
    /// Greedy patch: every connected cell that cannot continue the strip is
    /// linked to the next connected cell, like [`IrregularCells`](Self::IrregularCells).
    ///
    /// Misses columns that own no row; the result is not guaranteed to form a
    /// closed strip.
    ForwardLinks,
    /// Keep the raw angular partition untouched.
    Disabled,
}

impl RepairPolicy {
    /// Applies the policy in place. Returns the number of cells it changed.
    pub fn apply(self, matrix: &mut AdjacencyMatrix) -> usize {
        match self {
            Self::AcrossRays => connect_across_rays(matrix),
            Self::IrregularCells => {
                patch_greedily(matrix, |m, row, col| m.degree(row, col) != 2)
            }
            Self::ForwardLinks => {
                patch_greedily(matrix, |m, row, col| !m.has_forward_link(row, col))
            }
            Self::Disabled => 0,
        }
    }
}

fn connect_across_rays(matrix: &mut AdjacencyMatrix) -> usize {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    let Some(starts) = row_starts(matrix) else {
        return 0;
    };

    // steps[r]: columns crossed between row r and row r + 1
    let mut steps: Vec<usize> = (0..rows)
        .map(|r| (starts[(r + 1) % rows] + cols - starts[r]) % cols)
        .collect();
    settle_single_turn(&mut steps, cols);
    let first = spread_steps(&mut steps, starts[0], cols);

    let mut strip = AdjacencyMatrix::new(rows, cols);
    let mut col = first;
    for (row, &step) in steps.iter().enumerate() {
        for dc in 0..=step {
            strip.insert(row, (col + dc) % cols);
        }
        col = (col + step) % cols;
    }

    let changed = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| matrix.get(r, c) != strip.get(r, c))
        .count();
    *matrix = strip;
    changed
}

/// Column each row enters the strip at. Empty rows inherit their predecessor's.
fn row_starts(matrix: &AdjacencyMatrix) -> Option<Vec<usize>> {
    let rows = matrix.rows();
    let mut starts: Vec<Option<usize>> = (0..rows).map(|r| matrix.run_start(r)).collect();
    let first = starts.iter().position(Option::is_some)?;
    for k in 1..=rows {
        let r = (first + k) % rows;
        if starts[r].is_none() {
            starts[r] = starts[(r + rows - 1) % rows];
        }
    }
    starts.into_iter().collect()
}

/// Makes the steps go around the columns exactly once.
///
/// The forward steps always sum to a multiple of `cols`. A sum of zero gets one
/// full turn at the seam; extra turns come out of the largest steps, which are
/// the backward moves read as long forward ones.
fn settle_single_turn(steps: &mut [usize], cols: usize) {
    let mut total: usize = steps.iter().sum();
    if total == 0 {
        if let Some(last) = steps.last_mut() {
            *last = cols;
        }
        return;
    }
    while total > cols {
        let Some(r) = (0..steps.len()).max_by_key(|&i| (steps[i], Reverse(i))) else {
            return;
        };
        let take = steps[r].min(total - cols);
        steps[r] -= take;
        total -= take;
    }
}

/// Moves steps between neighbouring rows until no two adjacent rows together
/// cross `cols` columns. Returns the start column of row 0.
///
/// Two adjacent rows that sweep the whole circle overlap in a column, and the
/// walk would drop down early there.
fn spread_steps(steps: &mut [usize], first: usize, cols: usize) -> usize {
    let rows = steps.len();
    let mut first = first;
    for _ in 0..rows * cols {
        let Some(r) = (0..rows).find(|&r| steps[r] + steps[(r + 1) % rows] >= cols) else {
            break;
        };
        let next = (r + 1) % rows;
        if steps[r] >= steps[next] {
            // row r starts one column later
            steps[r] -= 1;
            steps[(r + rows - 1) % rows] += 1;
            if r == 0 {
                first = (first + 1) % cols;
            }
        } else {
            // row r + 2 starts one column earlier
            let after = (next + 1) % rows;
            steps[next] -= 1;
            steps[after] += 1;
            if after == 0 {
                first = (first + cols - 1) % cols;
            }
        }
    }
    first
}

/// Scans the matrix in row order and links every connected cell that matches
/// `needs_link` (evaluated on the matrix as patched so far) to the next one.
fn patch_greedily(
    matrix: &mut AdjacencyMatrix,
    needs_link: impl Fn(&AdjacencyMatrix, usize, usize) -> bool,
) -> usize {
    let mut added = 0;
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            if matrix.get(row, col) && needs_link(matrix, row, col) {
                added += connect_to_next(matrix, row, col);
            }
        }
    }
    added
}

/// Fills a staircase from `(row, col)` to the next connected cell: right along
/// the row to the target column, then down that column to the target row.
fn connect_to_next(matrix: &mut AdjacencyMatrix, row: usize, col: usize) -> usize {
    let Some((rows_down, cols_right)) = matrix.next_connected(row, col) else {
        return 0;
    };
    let (n_rows, n_cols) = (matrix.rows(), matrix.cols());
    let mut added = 0;
    for dc in 1..=cols_right {
        added += usize::from(matrix.insert(row, (col + dc) % n_cols));
    }
    let target_col = (col + cols_right) % n_cols;
    for dr in 1..=rows_down {
        added += usize::from(matrix.insert((row + dr) % n_rows, target_col));
    }
    added
}
