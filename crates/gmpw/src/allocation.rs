use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Shortest password that can be requested.
pub const MIN_LENGTH: i64 = 3;
/// Longest password that can be requested.
pub const MAX_LENGTH: i64 = 20;

/// The character classes a password is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Digit,
    Upper,
    Lower,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Digit, Category::Upper, Category::Lower];
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Digit => "digit",
            Category::Upper => "upper",
            Category::Lower => "lower",
        };
        write!(f, "{}", name)
    }
}

/// How many characters of each category a password receives.
///
/// Values produced by [`resolve`] always add up to the requested length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub digits: u32,
    pub upper: u32,
    pub lower: u32,
}

impl Allocation {
    pub fn new(digits: u32, upper: u32, lower: u32) -> Self {
        Self {
            digits,
            upper,
            lower,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Digit => self.digits,
            Category::Upper => self.upper,
            Category::Lower => self.lower,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Digit => &mut self.digits,
            Category::Upper => &mut self.upper,
            Category::Lower => &mut self.lower,
        }
    }

    /// Sum of the three category counts.
    pub fn total(&self) -> u32 {
        self.digits + self.upper + self.lower
    }

    pub fn is_exhausted(&self) -> bool {
        self.total() == 0
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "numbers : {}", self.digits)?;
        writeln!(f, "lower letters: {}", self.lower)?;
        write!(f, "upper letters: {}", self.upper)
    }
}

/// Splits `length` characters between digits, upper and lower case letters.
///
/// Counts given as `Some` are honoured exactly; `None` categories share
/// whatever budget is left. Categories are resolved from the largest
/// specified count down, with unset ones last, so the final category always
/// absorbs the remainder. An unset category that is not last receives a
/// uniform draw from `0..remaining`.
///
/// # Errors
///
/// * [`Error::InvalidLength`] if `length` is outside `[3, 20]`
/// * [`Error::InvalidCategoryCount`] if a count is negative, exceeds `length`, or exceeds the budget left
/// * [`Error::LengthMismatch`] if the specified counts cannot add up to `length`
///
/// # Examples
///
/// ```
/// use rand::thread_rng;
/// use gmpw::{resolve, Allocation};
///
/// let allocation = resolve(&mut thread_rng(), 10, Some(3), Some(2), Some(5)).unwrap();
/// assert_eq!(allocation, Allocation::new(3, 2, 5));
/// ```
pub fn resolve<R: Rng + ?Sized>(
    rng: &mut R,
    length: i64,
    digits: Option<i64>,
    upper: Option<i64>,
    lower: Option<i64>,
) -> Result<Allocation> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Error::InvalidLength(length));
    }

    let requested = [
        (digits, Category::Digit),
        (upper, Category::Upper),
        (lower, Category::Lower),
    ];

    // Bounding every count by `length` keeps the sums below from overflowing.
    if let Some(&(Some(count), category)) = requested
        .iter()
        .find(|(count, _)| count.is_some_and(|count| !(0..=length).contains(&count)))
    {
        return Err(Error::InvalidCategoryCount { category, count });
    }

    if let (Some(d), Some(u), Some(l)) = (digits, upper, lower) {
        if d + u + l != length {
            return Err(Error::LengthMismatch {
                length,
                total: d + u + l,
            });
        }
    }

    // None orders below every Some, so reversing puts unset categories last.
    let order = requested
        .into_iter()
        .sorted_by_key(|(count, _)| Reverse(*count))
        .collect_vec();
    let last = order.len() - 1;

    let mut allocation = Allocation::default();
    for (index, (count, category)) in order.into_iter().enumerate() {
        let used = i64::from(allocation.total());
        if used > length {
            return Err(Error::InternalInvariantViolation(format!(
                "allocated {} of {} characters before resolving {}",
                used, length, category
            )));
        }
        let remaining = length - used;

        let resolved = match count {
            None if index == last => remaining,
            None if remaining == 0 => 0,
            None => rng.gen_range(0..remaining),
            Some(count) => {
                if count > remaining {
                    return Err(Error::InvalidCategoryCount { category, count });
                }
                if index == last && used + count != length {
                    return Err(Error::LengthMismatch {
                        length,
                        total: used + count,
                    });
                }
                count
            }
        };

        debug!(%category, requested = ?count, resolved, remaining, "resolved category");
        *allocation.get_mut(category) = u32::try_from(resolved).map_err(|_| {
            Error::InternalInvariantViolation(format!(
                "{} resolved to out of range count {}",
                category, resolved
            ))
        })?;
    }

    Ok(allocation)
}
