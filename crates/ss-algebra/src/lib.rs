//! ss-algebra: dense matrix plumbing for state-space models.
//!
//! Provides:
//! - Matrix constructors used by model scaffolds (zeros, ones, identity-seeded)
//! - Row-list conversion with shape checking
//! - Block assembly (`BlockMatrix`, `block_diag`) shared by the composition operators
//! - Sub-block extraction and row removal
//!
//! All matrices are `nalgebra::DMatrix<f64>`; this crate only orchestrates nalgebra.
//!
//! # Example
//!
//! ```
//! use nalgebra::DMatrix;
//! use ss_algebra::{BlockMatrix, block_diag};
//!
//! let a = DMatrix::from_element(1, 1, 2.0);
//! let b = DMatrix::from_element(2, 2, 3.0);
//! let joined = block_diag(&a, &b);
//! assert_eq!(joined.shape(), (3, 3));
//! assert_eq!(joined[(0, 1)], 0.0);
//!
//! let mut blocks = BlockMatrix::new(&[1, 2], &[1, 2]);
//! blocks.place(0, 0, &a).unwrap();
//! blocks.place(1, 1, &b).unwrap();
//! assert_eq!(blocks.into_matrix(), joined);
//! ```

pub mod block;
pub mod construct;

pub use block::{BlockMatrix, block_diag, get_block, remove_row, set_block};
pub use construct::{
    from_rows, identity, matrices_nearly_equal, ones, to_rows, vector_from_slice, zeros,
};

/// Dense real matrix used throughout the toolkit.
pub type Matrix = nalgebra::DMatrix<f64>;

/// Dense real column vector used throughout the toolkit.
pub type Vector = nalgebra::DVector<f64>;
