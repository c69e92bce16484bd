//! Label encoding with a caller-supplied mapping.
//!
//! The mapping is validated at fit time against the distinct labels of the
//! fitted data: it must cover them all and must be one-to-one. Extra keys are
//! allowed, so codes for labels absent from the training sample can still be
//! decoded later.

use crate::preprocessing::encoding::mapping::{unique_sorted, LabelMapping, LabelMappingParams};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{LabelTransformer, LabelValue};
use crate::serialization::SerializableParams;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label encoder applying a user-defined bijective mapping.
///
/// # Example
/// ```ignore
/// use label_encoder_random::preprocessing::{LabelTransformer, ManualMappingEncoder};
///
/// let mut encoder = ManualMappingEncoder::new([(1, -1), (3, -3), (5, -5)]);
/// let codes = encoder.fit_transform(&[1, 3, 5, 1])?;
/// assert_eq!(codes, vec![-1, -3, -5, -1]);
/// ```
#[derive(Clone, Debug)]
pub struct ManualMappingEncoder<L: LabelValue, C: LabelValue> {
    /// Candidate mapping, validated on every fit.
    mapping: HashMap<L, C>,
    fitted: Option<LabelMapping<L, C>>,
}

impl<L: LabelValue, C: LabelValue> ManualMappingEncoder<L, C> {
    /// Create an unfitted encoder from label/code pairs.
    ///
    /// Later pairs overwrite earlier pairs with the same label.
    pub fn new<I>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
    {
        Self {
            mapping: mapping.into_iter().collect(),
            fitted: None,
        }
    }

    /// The candidate mapping supplied at construction.
    pub fn candidate_mapping(&self) -> &HashMap<L, C> {
        &self.mapping
    }

    fn fitted(&self) -> Result<&LabelMapping<L, C>, PreprocessingError> {
        self.fitted
            .as_ref()
            .ok_or(PreprocessingError::NotFitted("ManualMappingEncoder"))
    }

    /// Sorted distinct labels seen during fit.
    pub fn classes(&self) -> Result<&[L], PreprocessingError> {
        Ok(self.fitted()?.classes())
    }

    /// The fitted label -> code table.
    pub fn mapping(&self) -> Result<&HashMap<L, C>, PreprocessingError> {
        Ok(self.fitted()?.forward())
    }

    /// The fitted code -> label table.
    pub fn inverse_mapping(&self) -> Result<&HashMap<C, L>, PreprocessingError> {
        Ok(self.fitted()?.inverse())
    }

    /// Every code accepted by `inverse_transform`, sorted.
    pub fn encoded_classes(&self) -> Result<&[C], PreprocessingError> {
        Ok(self.fitted()?.encoded_classes())
    }
}

impl<L: LabelValue, C: LabelValue> LabelTransformer for ManualMappingEncoder<L, C> {
    type Label = L;
    type Code = C;

    fn fit(&mut self, labels: &[L]) -> Result<&mut Self, PreprocessingError> {
        let classes = unique_sorted(labels);
        let fitted = LabelMapping::build(self.mapping.clone(), classes)?;

        log::debug!(
            "ManualMappingEncoder fitted: {} classes observed, {} labels mapped",
            fitted.classes().len(),
            fitted.len()
        );

        self.fitted = Some(fitted);
        Ok(self)
    }

    fn transform(&self, labels: &[L]) -> Result<Vec<C>, PreprocessingError> {
        self.fitted()?.encode(labels)
    }

    fn inverse_transform(&self, codes: &[C]) -> Result<Vec<L>, PreprocessingError> {
        self.fitted()?.decode(codes)
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn clone_unfitted(&self) -> Self {
        Self::new(self.mapping.clone())
    }
}

/// Serializable parameters for a fitted ManualMappingEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManualMappingEncoderParams<L, C> {
    /// The validated mapping and the classes it was fitted on.
    pub mapping: LabelMappingParams<L, C>,
}

// Note: SerializableParams is automatically implemented via blanket impl in serialization.rs

impl<L: LabelValue, C: LabelValue> ManualMappingEncoder<L, C> {
    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> Result<ManualMappingEncoderParams<L, C>, PreprocessingError> {
        Ok(ManualMappingEncoderParams {
            mapping: self.fitted()?.extract_params(),
        })
    }

    /// Reconstruct a fitted encoder from parameters.
    pub fn from_params(
        params: ManualMappingEncoderParams<L, C>,
    ) -> Result<Self, PreprocessingError> {
        let fitted = LabelMapping::from_params(params.mapping)?;
        Ok(Self {
            mapping: fitted.forward().clone(),
            fitted: Some(fitted),
        })
    }
}

impl<L, C> ManualMappingEncoder<L, C>
where
    L: LabelValue,
    C: LabelValue,
    ManualMappingEncoderParams<L, C>: SerializableParams,
{
    /// Save to file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), PreprocessingError> {
        let params = self.extract_params()?;
        let bytes = params
            .to_bytes()
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load from file.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError> {
        let bytes = std::fs::read(path)?;
        let params = ManualMappingEncoderParams::<L, C>::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }
}
