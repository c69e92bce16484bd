//! `ndarray` adapters for label transformers.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::LabelTransformer;
use ndarray::{Array1, ArrayView1};

/// Array-based entry points for any [`LabelTransformer`].
///
/// Contiguous views are passed through as slices; strided views are copied
/// into a vector first.
pub trait ArrayLabelTransformer: LabelTransformer {
    /// Fit on a 1-D label array.
    fn fit_array(
        &mut self,
        labels: ArrayView1<'_, Self::Label>,
    ) -> Result<&mut Self, PreprocessingError> {
        match labels.as_slice() {
            Some(slice) => self.fit(slice),
            None => self.fit(&labels.to_vec()),
        }
    }

    /// Encode a 1-D label array.
    fn transform_array(
        &self,
        labels: ArrayView1<'_, Self::Label>,
    ) -> Result<Array1<Self::Code>, PreprocessingError> {
        let encoded = match labels.as_slice() {
            Some(slice) => self.transform(slice)?,
            None => self.transform(&labels.to_vec())?,
        };
        Ok(Array1::from(encoded))
    }

    /// Decode a 1-D code array.
    fn inverse_transform_array(
        &self,
        codes: ArrayView1<'_, Self::Code>,
    ) -> Result<Array1<Self::Label>, PreprocessingError> {
        let decoded = match codes.as_slice() {
            Some(slice) => self.inverse_transform(slice)?,
            None => self.inverse_transform(&codes.to_vec())?,
        };
        Ok(Array1::from(decoded))
    }

    /// Fit on and encode the same 1-D label array.
    fn fit_transform_array(
        &mut self,
        labels: ArrayView1<'_, Self::Label>,
    ) -> Result<Array1<Self::Code>, PreprocessingError> {
        self.fit_array(labels.view())?;
        self.transform_array(labels)
    }
}

impl<T: LabelTransformer> ArrayLabelTransformer for T {}
