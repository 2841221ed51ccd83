use thiserror::Error;

/// Reasons a tile string is rejected before any word search starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RackError {
    #[error("Input length should be {max} or less, got {len}.")]
    TooManyTiles { len: usize, max: usize },

    #[error("At most {max} blank tiles are allowed, got {count}.")]
    TooManyBlanks { count: usize, max: usize },

    #[error("Invalid tile '{0}': only letters and blanks (' ' or '_') are accepted.")]
    InvalidCharacter(char),
}

impl From<RackError> for std::io::Error {
    fn from(err: RackError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
