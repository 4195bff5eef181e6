use {
    std::{io, num::ParseFloatError},
    thiserror::Error,
};

/// an error that ends a dashboard session.
#[derive(Debug, Error)]
pub enum Error {
    /// a metrics source could not be opened, walked, or executed.
    #[error("{origin} is unavailable: {error}")]
    SourceUnavailable {
        origin: String,
        #[source]
        error: io::Error,
    },
    /// a metrics source did not contain what it should.
    #[error("{origin} is malformed: {error}")]
    MalformedData {
        origin: String,
        #[source]
        error: ParseError,
    },
    /// the terminal could not be set up, polled, or drawn.
    #[error("terminal failure: {0}")]
    TerminalFailure(#[from] io::Error),
}

/// an error parsing the contents of a metrics source.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },
    #[error("invalid number {token:?}: {error}")]
    Number {
        token: String,
        #[source]
        error: ParseFloatError,
    },
    #[error("value out of range: {0}")]
    OutOfRange(f64),
}

// === impl Error ===

impl Error {
    pub(crate) fn unavailable(origin: impl ToString, error: io::Error) -> Self {
        Self::SourceUnavailable {
            origin: origin.to_string(),
            error,
        }
    }

    pub(crate) fn malformed(origin: impl ToString, error: ParseError) -> Self {
        Self::MalformedData {
            origin: origin.to_string(),
            error,
        }
    }
}

// === impl ParseError ===

impl ParseError {
    /// parses a non-negative, finite number.
    pub(crate) fn number(token: &str) -> Result<f64, Self> {
        let value = token.parse::<f64>().map_err(|error| Self::Number {
            token: token.to_owned(),
            error,
        })?;

        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::OutOfRange(value))
        }
    }
}
