use rand::Rng;
use serde::Serialize;
use tracing::debug;

mod allocation;
mod assemble;
mod charset;
mod error;

pub use allocation::{resolve, Allocation, Category, MAX_LENGTH, MIN_LENGTH};
pub use assemble::assemble;
pub use charset::{is_ambiguous, pick, AMBIGUOUS_CHARS};
pub use error::{Error, Result};

/// What the caller asked for. Unset counts are filled at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub length: i64,
    pub digits: Option<i64>,
    pub upper: Option<i64>,
    pub lower: Option<i64>,
    pub avoid_ambiguous: bool,
}

impl Request {
    /// A request of `length` characters with every count left to chance.
    pub fn new(length: i64) -> Self {
        Self {
            length,
            digits: None,
            upper: None,
            lower: None,
            avoid_ambiguous: true,
        }
    }
}

/// A generated password together with the split it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Password {
    pub password: String,
    pub allocation: Allocation,
}

/// Resolves the category split for `request`, then assembles a password from it.
///
/// # Examples
///
/// ```
/// use rand::thread_rng;
/// use gmpw::{generate, Request};
///
/// let request = Request { digits: Some(2), ..Request::new(8) };
/// let generated = generate(&mut thread_rng(), &request).unwrap();
/// assert_eq!(generated.password.len(), 8);
/// assert_eq!(generated.allocation.digits, 2);
/// ```
pub fn generate<R: Rng + ?Sized>(rng: &mut R, request: &Request) -> Result<Password> {
    let allocation = resolve(
        rng,
        request.length,
        request.digits,
        request.upper,
        request.lower,
    )?;
    debug!(?allocation, avoid_ambiguous = request.avoid_ambiguous, "allocation resolved");

    let password = assemble(rng, &allocation, request.avoid_ambiguous);
    Ok(Password {
        password,
        allocation,
    })
}

/// Reads a `true`/`false` option value, ignoring case and surrounding whitespace.
pub fn parse_switch(option: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidOption {
            option: option.to_string(),
            argument: value.to_string(),
        }),
    }
}
