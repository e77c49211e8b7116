use crate::types::Float;
use error_stack::Report;
use ron::de::SpannedError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;

#[derive(thiserror::Error, Debug)]
pub enum GeometryErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("Coordinate '{name}' must be finite, but was {value}")]
    NonFiniteCoordinate { name: &'static str, value: Float },
    #[error("Parse Error: {0}")]
    Parse(String),
}

#[derive(Debug)]
pub struct GeometryError(pub Report<GeometryErrorKind>);

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl GeometryError {
    #[track_caller]
    pub fn new(error: GeometryErrorKind) -> GeometryError {
        GeometryError(Report::new(error))
    }

    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        Self(
            self.0
                .change_context(GeometryErrorKind::General(message.into())),
        )
    }

    pub fn kind(&self) -> &GeometryErrorKind {
        self.0.current_context()
    }
}

pub type GeometryResult<T> = Result<T, GeometryError>;

impl<T> From<T> for GeometryError
where
    for<'a> &'a T: Into<GeometryErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: GeometryErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&serde_yml::Error> for GeometryErrorKind {
    #[track_caller]
    fn from(error: &serde_yml::Error) -> Self {
        Self::Parse(format!("YAML Error: {}", error))
    }
}

impl From<&SpannedError> for GeometryErrorKind {
    #[track_caller]
    fn from(error: &SpannedError) -> Self {
        Self::Parse(format!("RON Error: {}", error))
    }
}

impl From<&ParseFloatError> for GeometryErrorKind {
    #[track_caller]
    fn from(error: &ParseFloatError) -> Self {
        Self::Parse(format!("Failed to parse float value: {}", error))
    }
}

impl From<String> for GeometryErrorKind {
    #[track_caller]
    fn from(error: String) -> Self {
        Self::General(error)
    }
}

impl From<&str> for GeometryError {
    #[track_caller]
    fn from(error: &str) -> Self {
        Self(Report::new(GeometryErrorKind::General(error.to_string())))
    }
}

#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return Err($crate::result::GeometryError::new($crate::result::GeometryErrorKind::General(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! err {
    ($($args:tt)+) => {
        $crate::result::GeometryError::new($crate::result::GeometryErrorKind::General(format!($($args)+).into()))
    };
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::GeometryError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args),+)?)))
    };
}
pub use context;
