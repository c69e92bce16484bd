//! Label preprocessing transformers for classification targets.
//!
//! # Core Traits
//!
//! - [`LabelTransformer`]: fit / transform / inverse-transform lifecycle
//! - [`LabelValue`]: bound shared by labels and codes
//!
//! # Available Transformers
//!
//! - [`ManualMappingEncoder`]: user-defined bijective mapping
//! - [`RandomMappingEncoder`]: random bijective mapping, optional offset
//!
//! # Example
//!
//! ```ignore
//! use label_encoder_random::preprocessing::{LabelTransformer, RandomMappingEncoder};
//!
//! let mut encoder = RandomMappingEncoder::new().with_offset(1).with_seed(7);
//! let encoded = encoder.fit_transform(&["setosa", "virginica", "setosa"])?;
//!
//! // Save for later use
//! encoder.save_to_file("encoder.bin")?;
//! let loaded = RandomMappingEncoder::<String>::load_from_file("encoder.bin")?;
//! ```

#[cfg(feature = "ndarray")]
pub mod array;
pub mod encoding;
pub mod error;
pub mod traits;

// Re-export main types
#[cfg(feature = "ndarray")]
pub use array::ArrayLabelTransformer;
pub use encoding::{
    generate_mapping, LabelMapping, LabelMappingParams, ManualMappingEncoder,
    ManualMappingEncoderParams, RandomCode, RandomMappingConfig, RandomMappingEncoder,
    RandomMappingEncoderParams,
};
pub use error::PreprocessingError;
pub use traits::{InputKind, LabelTransformer, LabelValue};
