use std::fmt;

/// The main error type for the monodither crate
#[derive(Debug)]
pub enum MonoditherError {
    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// Config file is not valid JSON
    Json(json::Error),

    /// Config file parsed but a field is missing or out of range
    Config(String),

    /// A quantizer was asked to converge on an empty set of levels
    EmptyLevelSet,
}

impl fmt::Display for MonoditherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonoditherError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            MonoditherError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            MonoditherError::Io(e) => write!(f, "I/O error: {}", e),
            MonoditherError::Json(e) => write!(f, "Config JSON error: {}", e),
            MonoditherError::Config(msg) => write!(f, "Config error: {}", msg),
            MonoditherError::EmptyLevelSet => write!(f, "level set must contain at least one level"),
        }
    }
}

impl std::error::Error for MonoditherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MonoditherError::ImageDecode(e) | MonoditherError::ImageEncode(e) => Some(e),
            MonoditherError::Io(e) => Some(e),
            MonoditherError::Json(e) => Some(e),
            MonoditherError::Config(_) | MonoditherError::EmptyLevelSet => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for MonoditherError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => MonoditherError::ImageEncode(err),
            _ => MonoditherError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for MonoditherError {
    fn from(err: std::io::Error) -> Self {
        MonoditherError::Io(err)
    }
}

impl From<json::Error> for MonoditherError {
    fn from(err: json::Error) -> Self {
        MonoditherError::Json(err)
    }
}

// Convenience type alias for Results using MonoditherError
pub type Result<T = ()> = std::result::Result<T, MonoditherError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_keeps_source() {
        let err: MonoditherError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, MonoditherError::Io(_)));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: disk gone");
    }

    #[test]
    fn test_empty_level_set_has_no_source() {
        let err = MonoditherError::EmptyLevelSet;
        assert!(err.source().is_none());
    }
}
