//! Unified Error Model
use crate::weights::WeightError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Which side of a comparison failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonSide {
    A,
    B,
    Both,
}

impl fmt::Display for ComparisonSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::Both => write!(f, "A+B"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("INPUT/{0}")]
    InvalidInput(String),

    #[error("INPUT/WEIGHTS: {0}")]
    InvalidWeights(#[from] WeightError),

    #[error("TRANSPORT/{}", transport_detail(.status, .message))]
    TransportFailure {
        status: Option<u16>,
        message: String,
    },

    #[error("PREDICT/{side}: {source}{}", also_failed(.also))]
    PredictionUnavailable {
        side: ComparisonSide,
        #[source]
        source: Box<AdvisorError>,
        /// Side B's cause when both sides failed
        also: Option<Box<AdvisorError>>,
    },

    #[error("MALFORMED/{0}")]
    MalformedResponse(String),

    #[error("CONFIG/{0}")]
    Config(String),
}

fn also_failed(also: &Option<Box<AdvisorError>>) -> String {
    match also {
        Some(err) => format!("; {}", err),
        None => String::new(),
    }
}

fn transport_detail(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("{} {}", code, message),
        None => message.to_string(),
    }
}

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    TransportFailure,
    PredictionUnavailable,
    MalformedResponse,
    Config,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::InvalidInput => 2,
            ErrorKind::TransportFailure => 3,
            ErrorKind::PredictionUnavailable => 4,
            ErrorKind::MalformedResponse => 5,
            ErrorKind::Config => 6,
        }
    }
}

impl AdvisorError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    pub fn prediction_unavailable(side: ComparisonSide, source: AdvisorError) -> Self {
        Self::PredictionUnavailable {
            side,
            source: Box::new(source),
            also: None,
        }
    }

    /// Both comparison sides failed; A's error is the source
    pub fn both_predictions_unavailable(a: AdvisorError, b: AdvisorError) -> Self {
        Self::PredictionUnavailable {
            side: ComparisonSide::Both,
            source: Box::new(a),
            also: Some(Box::new(b)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::InvalidWeights(_) => ErrorKind::InvalidInput,
            Self::TransportFailure { .. } => ErrorKind::TransportFailure,
            Self::PredictionUnavailable { .. } => ErrorKind::PredictionUnavailable,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Rejected locally, before anything was sent upstream
    pub fn is_local(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidInput | ErrorKind::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = AdvisorError::transport(Some(500), "boom");
        assert_eq!(err.to_string(), "TRANSPORT/500 boom");

        let err = AdvisorError::transport(None, "connection refused");
        assert_eq!(err.to_string(), "TRANSPORT/connection refused");

        let err = AdvisorError::prediction_unavailable(
            ComparisonSide::B,
            AdvisorError::malformed("missing predicted_price"),
        );
        assert_eq!(err.to_string(), "PREDICT/B: MALFORMED/missing predicted_price");
        assert_eq!(err.kind(), ErrorKind::PredictionUnavailable);
    }

    #[test]
    fn test_both_sides_keep_their_causes() {
        let err = AdvisorError::both_predictions_unavailable(
            AdvisorError::transport(Some(500), "model exploded"),
            AdvisorError::transport(None, "predict: request timed out"),
        );
        assert_eq!(
            err.to_string(),
            "PREDICT/A+B: TRANSPORT/500 model exploded; TRANSPORT/predict: request timed out"
        );
    }

    #[test]
    fn test_weights_are_input_errors() {
        let err: AdvisorError = WeightError::Missing(vec!["gpu".to_string()]).into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.is_local());
        assert_eq!(err.kind().exit_code(), 2);
    }
}
