//! Block-matrix assembly and extraction.

use nalgebra::DMatrix;
use ss_core::{ModelError, ModelResult};

/// Copy `source` into `target` with its top-left corner at `(row, col)`.
pub fn set_block(
    target: &mut DMatrix<f64>,
    row: usize,
    col: usize,
    source: &DMatrix<f64>,
) -> ModelResult<()> {
    let (nrows, ncols) = source.shape();
    check_window(target, row, col, nrows, ncols)?;
    target
        .view_mut((row, col), (nrows, ncols))
        .copy_from(source);
    Ok(())
}

/// Extract the `nrows × ncols` block starting at `(row, col)`.
pub fn get_block(
    source: &DMatrix<f64>,
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> ModelResult<DMatrix<f64>> {
    check_window(source, row, col, nrows, ncols)?;
    Ok(source.view((row, col), (nrows, ncols)).into_owned())
}

/// Return a copy of `m` with row `index` removed.
pub fn remove_row(m: &DMatrix<f64>, index: usize) -> ModelResult<DMatrix<f64>> {
    if index >= m.nrows() {
        return Err(ModelError::IndexOob {
            what: "matrix row",
            index,
            len: m.nrows(),
        });
    }
    Ok(m.clone().remove_row(index))
}

/// Block-diagonal join `diag(a, b)` with zero cross blocks.
pub fn block_diag(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    let (ar, ac) = a.shape();
    let (br, bc) = b.shape();
    let mut out = DMatrix::zeros(ar + br, ac + bc);
    out.view_mut((0, 0), (ar, ac)).copy_from(a);
    out.view_mut((ar, ac), (br, bc)).copy_from(b);
    out
}

fn check_window(
    m: &DMatrix<f64>,
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> ModelResult<()> {
    if row + nrows > m.nrows() {
        return Err(ModelError::IndexOob {
            what: "block row extent",
            index: row + nrows,
            len: m.nrows(),
        });
    }
    if col + ncols > m.ncols() {
        return Err(ModelError::IndexOob {
            what: "block column extent",
            index: col + ncols,
            len: m.ncols(),
        });
    }
    Ok(())
}

/// A zero matrix partitioned into block rows and block columns.
///
/// Blocks are placed by partition index rather than raw offset, so each
/// placement is checked against the partition it lands in. Unplaced blocks
/// stay zero.
#[derive(Debug, Clone)]
pub struct BlockMatrix {
    row_sizes: Vec<usize>,
    col_sizes: Vec<usize>,
    data: DMatrix<f64>,
}

impl BlockMatrix {
    pub fn new(row_sizes: &[usize], col_sizes: &[usize]) -> Self {
        let rows = row_sizes.iter().sum();
        let cols = col_sizes.iter().sum();
        Self {
            row_sizes: row_sizes.to_vec(),
            col_sizes: col_sizes.to_vec(),
            data: DMatrix::zeros(rows, cols),
        }
    }

    /// Place `source` at block position `(block_row, block_col)`.
    pub fn place(
        &mut self,
        block_row: usize,
        block_col: usize,
        source: &DMatrix<f64>,
    ) -> ModelResult<()> {
        let nrows = *self.row_sizes.get(block_row).ok_or(ModelError::IndexOob {
            what: "block row",
            index: block_row,
            len: self.row_sizes.len(),
        })?;
        let ncols = *self.col_sizes.get(block_col).ok_or(ModelError::IndexOob {
            what: "block column",
            index: block_col,
            len: self.col_sizes.len(),
        })?;
        if source.shape() != (nrows, ncols) {
            return Err(ModelError::invalid_arg(format!(
                "block ({block_row}, {block_col}) expects {nrows}x{ncols}, got {}x{}",
                source.nrows(),
                source.ncols()
            )));
        }
        let row = self.row_sizes[..block_row].iter().sum();
        let col = self.col_sizes[..block_col].iter().sum();
        set_block(&mut self.data, row, col, source)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.data
    }
}
