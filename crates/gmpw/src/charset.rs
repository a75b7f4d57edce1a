use rand::Rng;
use tracing::trace;

use crate::allocation::Category;

const DIGIT_CHARS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const LOWER_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const UPPER_CHARS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Characters that are easily confused with one another in many fonts.
pub const AMBIGUOUS_CHARS: &[char] = &['o', 'O', '0', 'l', '1'];

impl Category {
    /// Every character the category can produce, ambiguous ones included.
    pub fn alphabet(&self) -> &'static [char] {
        match self {
            Category::Digit => DIGIT_CHARS,
            Category::Upper => UPPER_CHARS,
            Category::Lower => LOWER_CHARS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.alphabet().contains(&c)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS_CHARS.contains(&c)
}

/// Draws one character of `category`.
///
/// When `avoid_ambiguous` is set, draws that land on one of
/// [`AMBIGUOUS_CHARS`] are thrown away and drawn again.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, category: Category, avoid_ambiguous: bool) -> char {
    let alphabet = category.alphabet();
    loop {
        let c = alphabet[rng.gen_range(0..alphabet.len())];
        if avoid_ambiguous && is_ambiguous(c) {
            trace!(%category, rejected = %c, "redrawing ambiguous character");
            continue;
        }
        return c;
    }
}
