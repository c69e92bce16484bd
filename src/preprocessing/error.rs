//! Error types for label encoding operations.

/// Error type for label encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessingError {
    /// The mapping does not cover every distinct label seen during fit.
    #[error(
        "the mapping does not cover every class inside y ({observed} classes, {mapped} mapped \
         labels); uncovered labels: {missing}"
    )]
    InsufficientMapping {
        /// Distinct labels observed in the fitted data.
        observed: usize,
        /// Labels present as keys of the mapping.
        mapped: usize,
        /// Debug rendering of the labels the mapping lacks.
        missing: String,
    },

    /// Two or more labels share the same code.
    #[error("the mapping is not one-to-one: {labels} labels map to {codes} distinct codes")]
    NotBijective {
        /// Number of keys in the mapping.
        labels: usize,
        /// Number of distinct codes among its values.
        codes: usize,
    },

    /// A transform was requested before a successful fit.
    #[error("this {0} instance is not fitted yet; call `fit` before using this encoder")]
    NotFitted(&'static str),

    /// `inverse_transform` received codes outside the fitted encoded classes.
    #[error("y contains previously unseen labels: {0}")]
    UnseenLabels(String),

    /// `transform` hit a label that is not a key of the mapping.
    #[error("label not present in the mapping: {0}")]
    UnknownLabel(String),

    /// Invalid hyperparameter or parameter set.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_insufficient_mapping() {
        let err = PreprocessingError::InsufficientMapping {
            observed: 3,
            mapped: 2,
            missing: "[3]".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3 classes"));
        assert!(msg.contains("2 mapped"));
        assert!(msg.contains("[3]"));
    }

    #[test]
    fn test_error_display_not_bijective() {
        let err = PreprocessingError::NotBijective {
            labels: 3,
            codes: 2,
        };
        assert!(err.to_string().contains("not one-to-one"));
    }

    #[test]
    fn test_error_display_not_fitted() {
        let err = PreprocessingError::NotFitted("ManualMappingEncoder");
        assert!(err.to_string().contains("ManualMappingEncoder"));
    }

    #[test]
    fn test_error_display_unseen_labels() {
        let err = PreprocessingError::UnseenLabels("[-999]".to_string());
        assert!(err.to_string().contains("previously unseen labels: [-999]"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PreprocessingError = io_err.into();
        assert!(matches!(err, PreprocessingError::IoError(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: PreprocessingError = e.into();
            assert!(matches!(err, PreprocessingError::SerializationError(_)));
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PreprocessingError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
