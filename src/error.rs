use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unsupported input format {0:?}, expected a .csv or .html file")]
    UnsupportedFormat(String),

    #[error("malformed delimited input: {0}")]
    MalformedInput(String),

    #[error("no table with class {0:?} found in the report")]
    TableNotFound(String),

    #[error("required column {0:?} is missing from the table header")]
    MissingColumn(String),

    #[error("row {row}: malformed timestamp: {reason}")]
    MalformedTimestamp { row: usize, reason: String },

    #[error("row {row}: {what} is missing")]
    MissingElement { row: usize, what: String },

    #[error("cannot parse {0:?} as a number")]
    MalformedNumber(String),

    #[error("malformed pair {0:?}, expected ASSET/CURRENCY")]
    MalformedPair(String),

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error("too many subplots ({count}) to fit on one figure, select at most {limit}")]
    TooManyPlots { count: usize, limit: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("plotting error: {0}")]
    Chart(String),

    #[error("logging setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for AnalysisError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Chart(e.to_string())
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(e: csv::Error) -> Self {
        AnalysisError::MalformedInput(e.to_string())
    }
}

impl From<ini::Error> for AnalysisError {
    fn from(e: ini::Error) -> Self {
        AnalysisError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
