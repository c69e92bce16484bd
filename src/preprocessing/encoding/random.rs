//! Label encoding with a randomly generated mapping.
//!
//! At fit time the sorted distinct labels are paired with the integer codes
//! `offset..offset + n_classes`. When `randomize` is set the codes are
//! shuffled first, so every one of the `n_classes!` assignments is equally
//! likely.

use crate::preprocessing::encoding::mapping::{unique_sorted, LabelMapping, LabelMappingParams};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{LabelTransformer, LabelValue};
use crate::serialization::SerializableParams;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Code type produced by [`RandomMappingEncoder`].
pub type RandomCode = i64;

/// Pair sorted `classes` with the codes `offset..offset + classes.len()`.
///
/// With `randomize` the code sequence is shuffled with `rng` before pairing;
/// without it, the i-th class receives `offset + i`.
///
/// # Errors
/// [`PreprocessingError::InvalidParameter`] if a code would overflow `i64`.
pub fn generate_mapping<L, R>(
    classes: &[L],
    offset: RandomCode,
    randomize: bool,
    rng: &mut R,
) -> Result<HashMap<L, RandomCode>, PreprocessingError>
where
    L: LabelValue,
    R: Rng + ?Sized,
{
    let mut codes = (0..classes.len())
        .map(|idx| {
            RandomCode::try_from(idx)
                .ok()
                .and_then(|idx| idx.checked_add(offset))
                .ok_or_else(|| {
                    PreprocessingError::InvalidParameter(format!(
                        "offset {} with {} classes overflows the code range",
                        offset,
                        classes.len()
                    ))
                })
        })
        .collect::<Result<Vec<RandomCode>, _>>()?;

    if randomize {
        codes.shuffle(rng);
    }

    Ok(classes.iter().cloned().zip(codes).collect())
}

/// Configuration for RandomMappingEncoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomMappingConfig {
    /// Added to every generated code.
    pub offset: RandomCode,
    /// If true, shuffle the codes before assigning them.
    pub randomize: bool,
    /// Fixed RNG seed; every fit reuses it. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for RandomMappingConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            randomize: true,
            seed: None,
        }
    }
}

/// Label encoder generating a random bijective mapping at fit time.
///
/// # Example
/// ```ignore
/// use label_encoder_random::preprocessing::{LabelTransformer, RandomMappingEncoder};
///
/// let mut encoder = RandomMappingEncoder::new().with_offset(100);
/// let codes = encoder.fit_transform(&["cat", "dog", "cat"])?;
/// // codes is a permutation of {100, 101} applied per label
/// let labels = encoder.inverse_transform(&codes)?;
/// ```
#[derive(Clone, Debug)]
pub struct RandomMappingEncoder<L: LabelValue> {
    config: RandomMappingConfig,
    fitted: Option<LabelMapping<L, RandomCode>>,
}

impl<L: LabelValue> Default for RandomMappingEncoder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LabelValue> RandomMappingEncoder<L> {
    /// Create a new RandomMappingEncoder with default configuration.
    pub fn new() -> Self {
        Self::from_config(RandomMappingConfig::default())
    }

    /// Create an unfitted encoder from an explicit configuration.
    pub fn from_config(config: RandomMappingConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// Set the offset added to every code.
    pub fn with_offset(mut self, offset: RandomCode) -> Self {
        self.config.offset = offset;
        self
    }

    /// Set whether codes are shuffled.
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.config.randomize = randomize;
        self
    }

    /// Fix the RNG seed used by every fit.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The encoder configuration.
    pub fn config(&self) -> &RandomMappingConfig {
        &self.config
    }

    fn fitted(&self) -> Result<&LabelMapping<L, RandomCode>, PreprocessingError> {
        self.fitted
            .as_ref()
            .ok_or(PreprocessingError::NotFitted("RandomMappingEncoder"))
    }

    /// Sorted distinct labels seen during fit.
    pub fn classes(&self) -> Result<&[L], PreprocessingError> {
        Ok(self.fitted()?.classes())
    }

    /// The generated label -> code table.
    pub fn mapping(&self) -> Result<&HashMap<L, RandomCode>, PreprocessingError> {
        Ok(self.fitted()?.forward())
    }

    /// The code -> label table.
    pub fn inverse_mapping(&self) -> Result<&HashMap<RandomCode, L>, PreprocessingError> {
        Ok(self.fitted()?.inverse())
    }

    /// Every code accepted by `inverse_transform`, sorted.
    pub fn encoded_classes(&self) -> Result<&[RandomCode], PreprocessingError> {
        Ok(self.fitted()?.encoded_classes())
    }

    fn generate(&self, classes: &[L]) -> Result<HashMap<L, RandomCode>, PreprocessingError> {
        let RandomMappingConfig {
            offset,
            randomize,
            seed,
        } = self.config;

        match seed {
            Some(seed) => {
                generate_mapping(classes, offset, randomize, &mut StdRng::seed_from_u64(seed))
            }
            None => generate_mapping(classes, offset, randomize, &mut rand::rng()),
        }
    }
}

impl<L: LabelValue> LabelTransformer for RandomMappingEncoder<L> {
    type Label = L;
    type Code = RandomCode;

    fn fit(&mut self, labels: &[L]) -> Result<&mut Self, PreprocessingError> {
        let classes = unique_sorted(labels);
        let mapping = self.generate(&classes)?;
        let fitted = LabelMapping::build(mapping, classes)?;

        log::debug!(
            "RandomMappingEncoder fitted: {} classes, offset {}, randomize {}",
            fitted.classes().len(),
            self.config.offset,
            self.config.randomize
        );

        self.fitted = Some(fitted);
        Ok(self)
    }

    fn transform(&self, labels: &[L]) -> Result<Vec<RandomCode>, PreprocessingError> {
        self.fitted()?.encode(labels)
    }

    fn inverse_transform(&self, codes: &[RandomCode]) -> Result<Vec<L>, PreprocessingError> {
        self.fitted()?.decode(codes)
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn clone_unfitted(&self) -> Self {
        Self::from_config(self.config.clone())
    }
}

/// Serializable parameters for a fitted RandomMappingEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomMappingEncoderParams<L> {
    /// Configuration options.
    pub config: RandomMappingConfig,
    /// The generated mapping and the classes it was fitted on.
    pub mapping: LabelMappingParams<L, RandomCode>,
}

impl<L: LabelValue> RandomMappingEncoder<L> {
    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> Result<RandomMappingEncoderParams<L>, PreprocessingError> {
        Ok(RandomMappingEncoderParams {
            config: self.config.clone(),
            mapping: self.fitted()?.extract_params(),
        })
    }

    /// Reconstruct a fitted encoder from parameters.
    pub fn from_params(params: RandomMappingEncoderParams<L>) -> Result<Self, PreprocessingError> {
        Ok(Self {
            config: params.config,
            fitted: Some(LabelMapping::from_params(params.mapping)?),
        })
    }
}

impl<L> RandomMappingEncoder<L>
where
    L: LabelValue,
    RandomMappingEncoderParams<L>: SerializableParams,
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
        let params = RandomMappingEncoderParams::<L>::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }
}
