use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Invalid construction parameters or use of an axis that was not declared dual.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid scale domain bounds or step.
    #[error("invalid scale range: {0}")]
    Range(String),

    /// Operation not allowed in the current session state.
    #[error("invalid state: {0}")]
    State(String),

    #[error("coordinate arrays differ in length: x={x_len}, y={y_len}")]
    Dimension { x_len: usize, y_len: usize },

    #[error("not enough samples: got {actual}, need at least {required}")]
    DegenerateInput { actual: usize, required: usize },

    #[error("canvas backend failure: {0}")]
    Backend(String),

    #[error("serialization failure: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Payload-free discriminant of [`PlotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotErrorKind {
    Config,
    Range,
    State,
    Dimension,
    DegenerateInput,
    Backend,
    Serialization,
    Io,
}

impl PlotError {
    #[must_use]
    pub fn kind(&self) -> PlotErrorKind {
        match self {
            Self::Config(_) => PlotErrorKind::Config,
            Self::Range(_) => PlotErrorKind::Range,
            Self::State(_) => PlotErrorKind::State,
            Self::Dimension { .. } => PlotErrorKind::Dimension,
            Self::DegenerateInput { .. } => PlotErrorKind::DegenerateInput,
            Self::Backend(_) => PlotErrorKind::Backend,
            Self::Serialization(_) => PlotErrorKind::Serialization,
            Self::Io(_) => PlotErrorKind::Io,
        }
    }
}
