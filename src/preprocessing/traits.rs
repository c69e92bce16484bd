//! Core traits for label transformers.
//!
//! This module defines:
//! - [`LabelValue`]: the bound shared by labels and codes.
//! - [`LabelTransformer`]: the fit / transform / inverse-transform lifecycle
//!   implemented by every encoder in this crate.

use crate::preprocessing::error::PreprocessingError;
use std::fmt::Debug;
use std::hash::Hash;

/// A value that can act as a label or as a code.
///
/// Labels must be hashable for mapping lookups, totally ordered so that
/// classes and encoded classes have a canonical sorted order, and `Debug`
/// so that error messages can name offending values.
pub trait LabelValue: Clone + Eq + Hash + Ord + Debug {}

impl<T> LabelValue for T where T: Clone + Eq + Hash + Ord + Debug {}

/// The kind of input a transformer accepts, for pipeline capability checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// A single one-dimensional array of target labels.
    Labels1D,
}

impl InputKind {
    /// Tag string understood by pipeline introspection.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Labels1D => "1dlabels",
        }
    }
}

/// Trait for label encoders with a fit / transform / inverse-transform lifecycle.
///
/// An encoder starts unfitted. `fit` builds the forward and inverse mappings
/// from a label slice; `transform` and `inverse_transform` then translate
/// between labels and codes using those mappings. Calling `fit` again fully
/// replaces the fitted state.
///
/// # Example
/// ```ignore
/// use label_encoder_random::preprocessing::{LabelTransformer, RandomMappingEncoder};
///
/// let mut encoder = RandomMappingEncoder::<u32>::new().with_offset(10);
/// let codes = encoder.fit_transform(&[3, 1, 2, 1])?;
/// let labels = encoder.inverse_transform(&codes)?;
/// assert_eq!(labels, vec![3, 1, 2, 1]);
/// ```
pub trait LabelTransformer: Clone {
    /// Original label type.
    type Label: LabelValue;
    /// Encoded code type.
    type Code: LabelValue;

    /// Input kind declared to pipeline introspection.
    const INPUT_KIND: InputKind = InputKind::Labels1D;

    /// Fit the encoder to the labels.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the mapping cannot cover the observed
    /// labels or is not one-to-one. On error the previous fitted state, if
    /// any, is left untouched.
    fn fit(&mut self, labels: &[Self::Label]) -> Result<&mut Self, PreprocessingError>;

    /// Encode labels into codes.
    ///
    /// # Errors
    /// [`PreprocessingError::NotFitted`] before a successful fit, and
    /// [`PreprocessingError::UnknownLabel`] for the first label missing from
    /// the mapping.
    fn transform(&self, labels: &[Self::Label]) -> Result<Vec<Self::Code>, PreprocessingError>;

    /// Decode codes back into the original labels.
    ///
    /// # Errors
    /// [`PreprocessingError::NotFitted`] before a successful fit, and
    /// [`PreprocessingError::UnseenLabels`] listing every code outside the
    /// fitted encoded classes.
    fn inverse_transform(
        &self,
        codes: &[Self::Code],
    ) -> Result<Vec<Self::Label>, PreprocessingError>;

    /// Fit the encoder and encode the same labels in one step.
    fn fit_transform(
        &mut self,
        labels: &[Self::Label],
    ) -> Result<Vec<Self::Code>, PreprocessingError> {
        self.fit(labels)?.transform(labels)
    }

    /// Whether a fit has succeeded on this instance.
    fn is_fitted(&self) -> bool;

    /// An independent copy carrying only the configuration, never fitted state.
    fn clone_unfitted(&self) -> Self;
}
