//! Bijective label mappings shared by the label encoders.
//!
//! A [`LabelMapping`] bundles the forward table (label -> code), the inverse
//! table (code -> label), the sorted encoded classes that gate inverse
//! lookups, and the sorted classes observed at fit time. It is built in one
//! step by [`LabelMapping::build`], which validates coverage and bijectivity
//! before anything is returned.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::LabelValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Sorted distinct labels of `labels`.
pub fn unique_sorted<L: LabelValue>(labels: &[L]) -> Vec<L> {
    labels
        .iter()
        .cloned()
        .collect::<BTreeSet<L>>()
        .into_iter()
        .collect()
}

/// Check that every observed class is a key of `mapping`.
pub fn check_coverage<L: LabelValue, C>(
    mapping: &HashMap<L, C>,
    classes: &[L],
) -> Result<(), PreprocessingError> {
    let missing: Vec<&L> = classes
        .iter()
        .filter(|class| !mapping.contains_key(*class))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PreprocessingError::InsufficientMapping {
            observed: classes.len(),
            mapped: mapping.len(),
            missing: format!("{:?}", missing),
        })
    }
}

/// Swap keys and values of `mapping`, failing if two labels share a code.
pub fn invert_mapping<L: LabelValue, C: LabelValue>(
    mapping: &HashMap<L, C>,
) -> Result<HashMap<C, L>, PreprocessingError> {
    let inverse: HashMap<C, L> = mapping
        .iter()
        .map(|(label, code)| (code.clone(), label.clone()))
        .collect();

    if inverse.len() != mapping.len() {
        return Err(PreprocessingError::NotBijective {
            labels: mapping.len(),
            codes: inverse.len(),
        });
    }
    Ok(inverse)
}

/// A validated bijective mapping between labels and codes.
#[derive(Clone, Debug)]
pub struct LabelMapping<L: LabelValue, C: LabelValue> {
    /// Distinct labels observed at fit time, sorted.
    classes: Vec<L>,
    /// Label -> code.
    forward: HashMap<L, C>,
    /// Code -> label.
    inverse: HashMap<C, L>,
    /// Every code of `forward`, sorted.
    encoded_classes: Vec<C>,
}

impl<L: LabelValue, C: LabelValue> LabelMapping<L, C> {
    /// Validate `mapping` against the observed `classes` and derive the
    /// inverse table and encoded classes.
    ///
    /// `classes` should be the sorted distinct labels of the fitted data
    /// (see [`unique_sorted`]). A mapping with more keys than `classes` is
    /// accepted.
    pub fn build(mapping: HashMap<L, C>, classes: Vec<L>) -> Result<Self, PreprocessingError> {
        check_coverage(&mapping, &classes)?;
        let inverse = invert_mapping(&mapping)?;

        let mut encoded_classes: Vec<C> = inverse.keys().cloned().collect();
        encoded_classes.sort();

        Ok(Self {
            classes,
            forward: mapping,
            inverse,
            encoded_classes,
        })
    }

    /// Distinct labels observed at fit time, sorted.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// The label -> code table.
    pub fn forward(&self) -> &HashMap<L, C> {
        &self.forward
    }

    /// The code -> label table.
    pub fn inverse(&self) -> &HashMap<C, L> {
        &self.inverse
    }

    /// Every legal input of [`LabelMapping::decode`], sorted.
    pub fn encoded_classes(&self) -> &[C] {
        &self.encoded_classes
    }

    /// Number of label/code pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the mapping has no pairs.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Encode `labels`, failing on the first label absent from the mapping.
    pub fn encode(&self, labels: &[L]) -> Result<Vec<C>, PreprocessingError> {
        if labels.is_empty() {
            return Ok(Vec::new());
        }
        log::trace!("encoding {} labels", labels.len());

        labels
            .iter()
            .map(|label| {
                self.forward
                    .get(label)
                    .cloned()
                    .ok_or_else(|| PreprocessingError::UnknownLabel(format!("{:?}", label)))
            })
            .collect()
    }

    /// Sorted distinct codes of `codes` that are not encoded classes.
    pub fn unseen_codes<'a>(&self, codes: &'a [C]) -> Vec<&'a C> {
        codes
            .iter()
            .filter(|code| self.encoded_classes.binary_search(*code).is_err())
            .collect::<BTreeSet<&C>>()
            .into_iter()
            .collect()
    }

    /// Decode `codes`, rejecting the whole call if any code is unseen.
    pub fn decode(&self, codes: &[C]) -> Result<Vec<L>, PreprocessingError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let unseen = self.unseen_codes(codes);
        if !unseen.is_empty() {
            return Err(PreprocessingError::UnseenLabels(format!("{:?}", unseen)));
        }
        log::trace!("decoding {} codes", codes.len());

        codes
            .iter()
            .map(|code| {
                self.inverse
                    .get(code)
                    .cloned()
                    .ok_or_else(|| PreprocessingError::UnseenLabels(format!("{:?}", [code])))
            })
            .collect()
    }

    /// Extract the mapping as plain serializable parameters.
    pub fn extract_params(&self) -> LabelMappingParams<L, C> {
        let mut pairs: Vec<(L, C)> = self
            .forward
            .iter()
            .map(|(label, code)| (label.clone(), code.clone()))
            .collect();
        pairs.sort();

        LabelMappingParams {
            classes: self.classes.clone(),
            mapping: pairs,
        }
    }

    /// Rebuild a mapping from parameters, re-running every validation.
    pub fn from_params(params: LabelMappingParams<L, C>) -> Result<Self, PreprocessingError> {
        let n_pairs = params.mapping.len();
        let mapping: HashMap<L, C> = params.mapping.into_iter().collect();
        if mapping.len() != n_pairs {
            return Err(PreprocessingError::InvalidParameter(format!(
                "mapping parameters contain duplicate labels ({} pairs, {} distinct labels)",
                n_pairs,
                mapping.len()
            )));
        }

        // Older or hand-edited files may carry unsorted classes.
        let classes = unique_sorted(&params.classes);
        Self::build(mapping, classes)
    }
}

/// Serializable parameters of a [`LabelMapping`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelMappingParams<L, C> {
    /// Distinct labels observed at fit time, sorted.
    pub classes: Vec<L>,
    /// Label/code pairs, sorted by label.
    pub mapping: Vec<(L, C)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_mapping() -> HashMap<i32, &'static str> {
        HashMap::from([(1, "A"), (2, "B"), (3, "C")])
    }

    #[test]
    fn test_unique_sorted() {
        assert_eq!(unique_sorted(&[3, 1, 2, 1, 3]), vec![1, 2, 3]);
        assert!(unique_sorted::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_build_basic() {
        let mapping = LabelMapping::build(abc_mapping(), vec![1, 2, 3]).unwrap();

        assert_eq!(mapping.classes(), &[1, 2, 3]);
        assert_eq!(mapping.encoded_classes(), &["A", "B", "C"]);
        assert_eq!(mapping.inverse()[&"B"], 2);
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_build_rejects_uncovered_label() {
        let mapping = HashMap::from([(1, "A"), (2, "B")]);
        let err = LabelMapping::build(mapping, vec![1, 2, 3]).unwrap_err();

        match err {
            PreprocessingError::InsufficientMapping {
                observed,
                mapped,
                missing,
            } => {
                assert_eq!(observed, 3);
                assert_eq!(mapped, 2);
                assert_eq!(missing, "[3]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_rejects_same_size_but_wrong_keys() {
        let mapping = HashMap::from([(1, "A"), (2, "B"), (4, "D")]);
        let result = LabelMapping::build(mapping, vec![1, 2, 3]);

        assert!(matches!(
            result,
            Err(PreprocessingError::InsufficientMapping { .. })
        ));
    }

    #[test]
    fn test_build_rejects_shared_code() {
        let mapping = HashMap::from([(1, "A"), (2, "B"), (3, "A")]);
        let result = LabelMapping::build(mapping, vec![1, 2, 3]);

        assert!(matches!(
            result,
            Err(PreprocessingError::NotBijective {
                labels: 3,
                codes: 2
            })
        ));
    }

    #[test]
    fn test_build_accepts_superset() {
        let mapping = HashMap::from([(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E")]);
        let mapping = LabelMapping::build(mapping, vec![1, 2, 3]).unwrap();

        assert_eq!(mapping.classes(), &[1, 2, 3]);
        assert_eq!(mapping.encoded_classes(), &["A", "B", "C", "D", "E"]);
        assert_eq!(mapping.decode(&["D", "E"]).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_encode_unknown_label() {
        let mapping = LabelMapping::build(abc_mapping(), vec![1, 2, 3]).unwrap();
        let err = mapping.encode(&[1, 7, 9]).unwrap_err();

        match err {
            PreprocessingError::UnknownLabel(label) => assert_eq!(label, "7"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_reports_every_unseen_code() {
        let mapping = LabelMapping::build(abc_mapping(), vec![1, 2, 3]).unwrap();
        let err = mapping.decode(&["Z", "A", "X", "Z"]).unwrap_err();

        match err {
            PreprocessingError::UnseenLabels(codes) => assert_eq!(codes, r#"["X", "Z"]"#),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_inputs() {
        let mapping = LabelMapping::build(abc_mapping(), vec![1, 2, 3]).unwrap();

        assert!(mapping.encode(&[]).unwrap().is_empty());
        assert!(mapping.decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_params_round_trip() {
        let mapping = LabelMapping::build(abc_mapping(), vec![1, 2]).unwrap();
        let params = mapping.extract_params();

        assert_eq!(params.mapping, vec![(1, "A"), (2, "B"), (3, "C")]);

        let restored = LabelMapping::from_params(params).unwrap();
        assert_eq!(restored.classes(), &[1, 2]);
        assert_eq!(restored.forward(), mapping.forward());
    }

    #[test]
    fn test_from_params_rejects_duplicate_labels() {
        let params = LabelMappingParams {
            classes: vec![1],
            mapping: vec![(1, "A"), (1, "B")],
        };
        assert!(matches!(
            LabelMapping::from_params(params),
            Err(PreprocessingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_params_rejects_shared_code() {
        let params = LabelMappingParams {
            classes: vec![1, 2],
            mapping: vec![(1, "A"), (2, "A")],
        };
        assert!(matches!(
            LabelMapping::from_params(params),
            Err(PreprocessingError::NotBijective { .. })
        ));
    }
}
