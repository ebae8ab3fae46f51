//! Error types for the simplex solver.

use thiserror::Error;

/// Errors that can occur while building or pivoting a tableau.
///
/// Infeasible and unbounded problems are not told apart: both normally end
/// in [`SimplexError::IterationLimit`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimplexError {
    /// No constraint rows were given
    #[error("problem has no constraints")]
    NoConstraints,

    /// A constraint row carries fewer than two variable coefficients
    #[error("constraint {row} has {found} variable coefficient(s), at least 2 are required")]
    TooFewVariables { row: usize, found: usize },

    /// Rows of a matrix have different lengths
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A coefficient could not be converted to a finite f64
    #[error("coefficient at row {row}, column {column} is not a finite number")]
    InvalidCoefficient { row: usize, column: usize },

    /// The tableau has no constraint rows or no coefficient columns
    #[error("tableau is empty")]
    EmptyTableau,

    /// No constraint row passed the ratio test
    #[error("no row is eligible for the ratio test in column {column}")]
    NoEligibleRow { column: usize },

    /// Pivot coordinates do not address a constraint row entry
    #[error("pivot ({row}, {column}) lies outside the constraint rows")]
    PivotOutOfBounds { row: usize, column: usize },

    /// The tableau was not optimal after the allowed number of pivots
    #[error("no optimal tableau after {max_iterations} pivot(s)")]
    IterationLimit { max_iterations: usize },

    /// The solved tableau is too narrow to read a solution from
    #[error("solved tableau has {columns} column(s), at least 3 are required")]
    DegenerateShape { columns: usize },
}

/// Result type for simplex operations.
pub type SimplexResult<T> = Result<T, SimplexError>;
