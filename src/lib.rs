//! # label_encoder_random
//!
//! Label encoders for 1-D categorical targets with an explicit
//! fit / transform / inverse-transform lifecycle.
//!
//! ## Core Design Principles
//!
//! - **Validated Bijections**: every fitted mapping is checked to cover the
//!   observed labels and to be one-to-one before it becomes visible.
//! - **Atomic Fits**: a failed `fit` leaves any previous fitted state intact;
//!   a successful one replaces it entirely.
//! - **Generic Labels**: any `Clone + Eq + Hash + Ord + Debug` type can be a
//!   label or a code (integers, `String`, byte strings, ...).
//! - **Serializable**: fitted encoders can be saved and loaded through
//!   plain parameter structs.
//!
//! ## Quick Start
//!
//! ```rust
//! use label_encoder_random::preprocessing::{
//!     LabelTransformer, ManualMappingEncoder, RandomMappingEncoder,
//! };
//!
//! let y = vec![3u32, 1, 2, 1, 3];
//!
//! let mut random = RandomMappingEncoder::<u32>::new().with_offset(10);
//! let codes = random.fit_transform(&y).unwrap();
//! assert!(codes.iter().all(|&c| (10..13).contains(&c)));
//! assert_eq!(random.inverse_transform(&codes).unwrap(), y);
//!
//! let mut manual = ManualMappingEncoder::new([(1u32, "one"), (2, "two"), (3, "three")]);
//! assert_eq!(manual.fit_transform(&[2, 3]).unwrap(), vec!["two", "three"]);
//! assert!(manual.inverse_transform(&["four"]).is_err());
//! ```
//!
//! ## Module Structure
//!
//! - `preprocessing` — the encoders, their shared mapping logic, errors and traits
//! - `serialization` — byte-level persistence of fitted parameters
//!
//! ## Cargo Features
//!
//! - `ndarray` — `ArrayView1` / `Array1` entry points via `ArrayLabelTransformer`

/// Label encoders and their supporting types.
pub mod preprocessing;

/// Persistence of fitted encoder parameters.
pub mod serialization;

/// Re-export of the encoders and core traits for convenient usage.
pub use preprocessing::{
    LabelTransformer, LabelValue, ManualMappingEncoder, PreprocessingError, RandomMappingEncoder,
};
