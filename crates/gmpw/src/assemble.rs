use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::allocation::{Allocation, Category};
use crate::charset::pick;

/// Builds a password holding exactly the characters `allocation` asks for.
///
/// Categories are drawn uniformly on every step; a draw that lands on an
/// exhausted category is simply repeated, so the result is a random
/// interleaving rather than grouped runs.
pub fn assemble<R: Rng + ?Sized>(
    rng: &mut R,
    allocation: &Allocation,
    avoid_ambiguous: bool,
) -> String {
    let mut quota = *allocation;
    let mut password = String::with_capacity(allocation.total() as usize);
    let dist_category = Uniform::from(0..Category::ALL.len());

    while !quota.is_exhausted() {
        let category = Category::ALL[dist_category.sample(rng)];
        if quota.get(category) == 0 {
            continue;
        }
        password.push(pick(rng, category, avoid_ambiguous));
        *quota.get_mut(category) -= 1;
    }

    password
}
