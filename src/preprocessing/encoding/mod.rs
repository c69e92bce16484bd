//! Label encoders for 1-D categorical targets.
//!
//! # Available Encoders
//!
//! ## ManualMappingEncoder
//! Applies a caller-supplied bijective mapping.
//!
//! ```ignore
//! // mapping {1: -1, 3: -3, 5: -5}
//! // Input:  [1, 5, 3, 1]
//! // Output: [-1, -5, -3, -1]
//! ```
//!
//! ## RandomMappingEncoder
//! Generates a random bijective mapping onto `offset..offset + n_classes`
//! at fit time.
//!
//! # Design Notes
//!
//! Both encoders store a [`LabelMapping`] built atomically on fit. Forward
//! lookups fail lazily on the first unknown label; inverse lookups are
//! checked up front against the full set of encoded classes, so the error
//! lists every offending code.

mod manual;
mod mapping;
mod random;

pub use manual::{ManualMappingEncoder, ManualMappingEncoderParams};
pub use mapping::{check_coverage, invert_mapping, unique_sorted, LabelMapping, LabelMappingParams};
pub use random::{
    generate_mapping, RandomCode, RandomMappingConfig, RandomMappingEncoder,
    RandomMappingEncoderParams,
};
