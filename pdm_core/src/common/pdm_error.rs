use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the predictive maintenance toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Data errors (0-99)
    #[strum(serialize = "_DATA_ERR_BEGIN")]
    DataErrBegin = 0,
    #[strum(serialize = "SRC_DATA_NOT_FOUND")]
    SrcDataNotFound = 3,
    #[strum(serialize = "SRC_DATA_FORMAT_ERROR")]
    SrcDataFormatError = 4,
    #[strum(serialize = "MISSING_COLUMN")]
    MissingColumn = 5,
    #[strum(serialize = "EMPTY_SUBSET")]
    EmptySubset = 6,
    #[strum(serialize = "NON_FINITE_VALUE")]
    NonFiniteValue = 7,
    #[strum(serialize = "_DATA_ERR_END")]
    DataErrEnd = 99,

    // Estimator errors (100-199)
    #[strum(serialize = "_ESTIMATOR_ERR_BEGIN")]
    EstimatorErrBegin = 100,
    #[strum(serialize = "INSUFFICIENT_POINTS")]
    InsufficientPoints = 101,
    #[strum(serialize = "DEGENERATE_DAYS")]
    DegenerateDays = 102,
    #[strum(serialize = "ZERO_SLOPE")]
    ZeroSlope = 103,
    #[strum(serialize = "_ESTIMATOR_ERR_END")]
    EstimatorErrEnd = 199,

    // Config / output errors (200-299)
    #[strum(serialize = "_CONF_ERR_BEGIN")]
    ConfErrBegin = 200,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 201,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 202,
    #[strum(serialize = "SCHEDULE_ERROR")]
    ScheduleError = 203,
    #[strum(serialize = "EXPORT_ERROR")]
    ExportError = 204,
    #[strum(serialize = "_CONF_ERR_END")]
    ConfErrEnd = 299,
}

impl ErrCode {
    pub fn is_data_err(&self) -> bool {
        let code = *self as i32;
        code > Self::DataErrBegin as i32 && code < Self::DataErrEnd as i32
    }

    pub fn is_estimator_err(&self) -> bool {
        let code = *self as i32;
        code > Self::EstimatorErrBegin as i32 && code < Self::EstimatorErrEnd as i32
    }
}

#[derive(Debug, Error)]
pub enum PdmError {
    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("no rows for asset {0:?}")]
    EmptySubset(String),

    #[error("{what} is not finite at index {index}")]
    NonFinite { what: &'static str, index: usize },

    #[error("linear fit needs at least 2 points, got {0}")]
    InsufficientPoints(usize),

    #[error("linear fit needs at least two distinct days, all {0} points share day {1}")]
    DegenerateDays(usize, f64),

    #[error("trend slope is zero, threshold {threshold} is never reached")]
    ZeroSlope { threshold: f64 },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("config: {0}")]
    Config(String),

    #[error("schedule {title:?}: {reason}")]
    Schedule { title: String, reason: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Date(#[from] chrono::ParseError),
}

impl PdmError {
    pub fn errcode(&self) -> ErrCode {
        match self {
            PdmError::MissingColumns(_) => ErrCode::MissingColumn,
            PdmError::EmptySubset(_) => ErrCode::EmptySubset,
            PdmError::NonFinite { .. } => ErrCode::NonFiniteValue,
            PdmError::InsufficientPoints(_) => ErrCode::InsufficientPoints,
            PdmError::DegenerateDays(..) => ErrCode::DegenerateDays,
            PdmError::ZeroSlope { .. } => ErrCode::ZeroSlope,
            PdmError::InvalidParameter { .. } => ErrCode::ParaError,
            PdmError::Config(_) | PdmError::Json(_) | PdmError::Date(_) => ErrCode::ConfigError,
            PdmError::Schedule { .. } => ErrCode::ScheduleError,
            PdmError::Csv(_) => ErrCode::SrcDataFormatError,
            PdmError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrCode::SrcDataNotFound
            }
            PdmError::Io(_) => ErrCode::ExportError,
        }
    }

    pub fn is_data_err(&self) -> bool {
        self.errcode().is_data_err()
    }

    pub fn is_estimator_err(&self) -> bool {
        self.errcode().is_estimator_err()
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PdmError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type PdmResult<T> = Result<T, PdmError>;
