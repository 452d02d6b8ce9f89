use thiserror::Error;

/// A flat value buffer that cannot be reshaped into whole rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{values} values cannot be split into rows of {width}")]
pub struct ShapeError {
    pub values: usize,
    pub width: usize,
}

/// Fatal problems found while scanning a benchmark log.
///
/// Line numbers are 1-based, as an editor shows them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error(
        "section '{title}' (header on line {line}): {values} values do not fill rows of {metrics} metrics"
    )]
    MalformedSection {
        title: String,
        line: usize,
        values: usize,
        metrics: usize,
    },
}
