use thiserror::Error;

use crate::allocation::Category;

/// Errors raised while turning a request into a password.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested length is outside the supported range.
    #[error("Need a number between [3-20] as length, got {0}.")]
    InvalidLength(i64),

    /// A specified category count is negative or larger than the budget left for it.
    #[error("Invalid option argument. Option \"{category}\", argument \"{count}\".")]
    InvalidCategoryCount { category: Category, count: i64 },

    /// Every category was resolved but the counts do not add up to the length.
    #[error("Category counts add up to {total}, but the password length is {length}.")]
    LengthMismatch { length: i64, total: i64 },

    /// An option value could not be parsed.
    #[error("Invalid option argument. Option \"{option}\", argument \"{argument}\".")]
    InvalidOption { option: String, argument: String },

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
