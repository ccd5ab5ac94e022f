use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use uuid::Uuid;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, AnnErr>;

/// The crate's error type.
#[derive(Debug)]
pub enum AnnErr {
    /// A dataset or saved network could not be read or written.
    Io(io::Error),
    /// Malformed input: bad row width, non numeric field, wrong file extension or a
    /// transfer record that doesn't decode.
    Format(String),
    /// Inference or persistence was attempted before training.
    UntrainedModel,
    /// A reduction was requested along an axis other than 0 or 1.
    InvalidAxis(usize),
    /// A record identifier string is not a valid UUID.
    IdentifierParse(uuid::Error),
    /// A configuration breaks one of its invariants.
    InvalidConfig(String),
    /// Data dimensions don't agree with the network's configuration.
    Shape {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// The repository has no record with the given id.
    RecordNotFound(Uuid),
    /// The repository already holds a record with the given id.
    DuplicateRecord(Uuid),
}

impl Display for AnnErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnErr::Io(e) => write!(f, "io error: {e}"),
            AnnErr::Format(msg) => write!(f, "format error: {msg}"),
            AnnErr::UntrainedModel => write!(f, "the neural network is untrained"),
            AnnErr::InvalidAxis(axis) => write!(f, "invalid axis {axis}, must be 0 or 1"),
            AnnErr::IdentifierParse(e) => write!(f, "invalid record identifier: {e}"),
            AnnErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            AnnErr::Shape {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            AnnErr::RecordNotFound(id) => write!(f, "no record stored with id {id}"),
            AnnErr::DuplicateRecord(id) => write!(f, "a record with id {id} already exists"),
        }
    }
}

impl Error for AnnErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AnnErr::Io(e) => Some(e),
            AnnErr::IdentifierParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AnnErr {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for AnnErr {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return Self::Format(e.to_string());
        }

        match e.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            kind => Self::Format(format!("{kind:?}")),
        }
    }
}

impl From<serde_json::Error> for AnnErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}

impl From<uuid::Error> for AnnErr {
    fn from(e: uuid::Error) -> Self {
        Self::IdentifierParse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_io_errors_stay_io() {
        let err = csv::Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(AnnErr::from(err), AnnErr::Io(_)));
    }

    #[test]
    fn bad_identifier_is_reported() {
        let err = AnnErr::from(Uuid::parse_str("not-a-uuid").unwrap_err());
        assert!(matches!(err, AnnErr::IdentifierParse(_)));
        assert!(err.to_string().starts_with("invalid record identifier"));
    }
}
