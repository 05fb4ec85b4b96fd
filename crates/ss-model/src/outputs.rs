//! Output removal.
//!
//! Dropping an output removes its row from `C` and `D` and its name, if the
//! outputs are named. The model is modified in place.

use ss_algebra::remove_row;
use ss_core::{MatrixKind, ModelError, ModelResult};
use tracing::debug;

use crate::model::DiscreteStateSpace;

impl DiscreteStateSpace {
    /// Remove the output called `name`.
    ///
    /// Fails with `NotSupported` if the outputs are unnamed and with
    /// `NotFound` if no output has that name.
    pub fn drop_output(&mut self, name: &str) -> ModelResult<()> {
        let names = self
            .output_names()
            .ok_or_else(|| ModelError::not_supported("model has no output names"))?;
        let index = names.position(name).ok_or_else(|| ModelError::NotFound {
            name: name.to_string(),
        })?;
        self.remove_output(index)
    }

    /// Remove the output at `index` (zero-based). Works with or without names.
    pub fn drop_output_at(&mut self, index: usize) -> ModelResult<()> {
        let len = self.n_outputs();
        if index >= len {
            return Err(ModelError::IndexOob {
                what: "output",
                index,
                len,
            });
        }
        self.remove_output(index)
    }

    fn remove_output(&mut self, index: usize) -> ModelResult<()> {
        let (c, d) = {
            let c = self.matrix(MatrixKind::C)?;
            let d = self.matrix(MatrixKind::D)?;
            (remove_row(&c, index)?, remove_row(&d, index)?)
        };
        let names = self.output_names().map(|list| list.without(index));
        self.replace_outputs(c, d, names)?;
        debug!(index, remaining = self.n_outputs(), "dropped output");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    fn three_outputs() -> DiscreteStateSpace {
        DiscreteStateSpace::new(
            DMatrix::from_element(1, 1, 0.5),
            DMatrix::from_element(1, 1, 1.0),
            DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]),
            DMatrix::from_row_slice(3, 1, &[0.1, 0.2, 0.3]),
        )
        .unwrap()
    }

    #[test]
    fn drop_by_name_trims_rows_and_names() {
        let mut sys = three_outputs();
        sys.set_output_names(["y0", "y1", "y2"]).unwrap();
        sys.drop_output("y1").unwrap();
        assert_eq!(sys.n_outputs(), 2);
        assert_eq!(sys.c().as_slice(), &[1.0, 3.0]);
        assert_eq!(sys.d().as_slice(), &[0.1, 0.3]);
        assert_eq!(sys.output_names().unwrap().as_slice(), &["y0", "y2"]);
    }

    #[test]
    fn drop_by_name_requires_names() {
        let mut sys = three_outputs();
        assert!(matches!(
            sys.drop_output("y0"),
            Err(ModelError::NotSupported { .. })
        ));
    }

    #[test]
    fn drop_unknown_name_is_not_found() {
        let mut sys = three_outputs();
        sys.set_output_names(["y0", "y1", "y2"]).unwrap();
        assert_eq!(
            sys.drop_output("z"),
            Err(ModelError::NotFound {
                name: "z".to_string()
            })
        );
        assert_eq!(sys.n_outputs(), 3);
    }

    #[test]
    fn drop_first_index_is_allowed() {
        let mut sys = three_outputs();
        sys.drop_output_at(0).unwrap();
        assert_eq!(sys.c().as_slice(), &[2.0, 3.0]);
        assert!(sys.output_names().is_none());
    }

    #[test]
    fn drop_index_out_of_range() {
        let mut sys = three_outputs();
        assert_eq!(
            sys.drop_output_at(3),
            Err(ModelError::IndexOob {
                what: "output",
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn last_output_cannot_be_dropped() {
        let mut sys = DiscreteStateSpace::scaffold_states(2).unwrap();
        assert!(matches!(
            sys.drop_output_at(0),
            Err(ModelError::InvalidArg { .. })
        ));
        assert_eq!(sys.n_outputs(), 1);
    }
}
