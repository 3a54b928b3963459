//! Weighted sampling over an ordered candidate list.
//!
//! Candidate order is part of the replay contract: the same weights in the
//! same order with the same draw must select the same value everywhere, so
//! callers pass candidates in catalog order and never sort them.

use crate::rng::DrawSource;

/// A candidate value paired with its (possibly negative) weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weighted<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> Weighted<T> {
    pub const fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Weight used for sampling; negative weights count as zero.
    #[inline]
    fn effective(&self) -> f64 {
        self.weight.max(0.0)
    }
}

fn total_weight<T>(candidates: &[Weighted<T>]) -> f64 {
    candidates.iter().map(Weighted::effective).sum()
}

/// Selects a candidate for an already drawn value in `[0, 1)`.
///
/// Returns `None` only for an empty list. When the total weight is not
/// positive the first candidate is returned, whatever its weight.
pub fn select<T>(candidates: &[Weighted<T>], draw: f64) -> Option<&T> {
    let total = total_weight(candidates);
    if total <= 0.0 {
        return candidates.first().map(|c| &c.value);
    }
    walk(candidates, draw * total)
}

fn walk<T>(candidates: &[Weighted<T>], mut remaining: f64) -> Option<&T> {
    for candidate in candidates {
        remaining -= candidate.effective();
        if remaining <= 0.0 {
            return Some(&candidate.value);
        }
    }
    // Rounding can leave a sliver of weight unclaimed.
    candidates.last().map(|c| &c.value)
}

/// Draws once from `rng` and selects a candidate.
///
/// The draw is consumed only when there is something to weigh: an empty list
/// or a list whose total weight is not positive leaves `rng` untouched.
pub fn pick_weighted<'a, T, R>(rng: &mut R, candidates: &'a [Weighted<T>]) -> Option<&'a T>
where
    R: DrawSource + ?Sized,
{
    let total = total_weight(candidates);
    if total <= 0.0 {
        return candidates.first().map(|c| &c.value);
    }
    walk(candidates, rng.next_f64() * total)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        draws: Vec<f64>,
        consumed: usize,
    }

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.to_vec(),
                consumed: 0,
            }
        }
    }

    impl DrawSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            let draw = self.draws[self.consumed];
            self.consumed += 1;
            draw
        }
    }

    fn abc() -> Vec<Weighted<char>> {
        vec![
            Weighted::new('a', 1.0),
            Weighted::new('b', 2.0),
            Weighted::new('c', 1.0),
        ]
    }

    #[test]
    fn walks_cumulative_weights_in_order() {
        let candidates = abc();
        assert_eq!(select(&candidates, 0.0), Some(&'a'));
        assert_eq!(select(&candidates, 0.25), Some(&'a')); // r = 1.0, hits a exactly
        assert_eq!(select(&candidates, 0.26), Some(&'b'));
        assert_eq!(select(&candidates, 0.75), Some(&'b'));
        assert_eq!(select(&candidates, 0.99), Some(&'c'));
    }

    #[test]
    fn negative_weights_are_clamped() {
        let candidates = vec![Weighted::new('x', -5.0), Weighted::new('y', 1.0)];
        assert_eq!(select(&candidates, 0.0), Some(&'x')); // r = 0 triggers on the first step
        assert_eq!(select(&candidates, 0.5), Some(&'y'));
    }

    #[test]
    fn degenerate_total_returns_first_without_drawing() {
        let candidates = vec![Weighted::new('x', 0.0), Weighted::new('y', -1.0)];
        let mut rng = Scripted::new(&[]);
        assert_eq!(pick_weighted(&mut rng, &candidates), Some(&'x'));
        assert_eq!(rng.consumed, 0);
    }

    #[test]
    fn empty_list_yields_none_without_drawing() {
        let candidates: Vec<Weighted<char>> = Vec::new();
        let mut rng = Scripted::new(&[]);
        assert_eq!(pick_weighted(&mut rng, &candidates), None);
        assert_eq!(select(&candidates, 0.5), None);
        assert_eq!(rng.consumed, 0);
    }

    #[test]
    fn pick_consumes_exactly_one_draw() {
        let candidates = abc();
        let mut rng = Scripted::new(&[0.9, 0.1]);
        assert_eq!(pick_weighted(&mut rng, &candidates), Some(&'c'));
        assert_eq!(rng.consumed, 1);
        assert_eq!(pick_weighted(&mut rng, &candidates), Some(&'a'));
        assert_eq!(rng.consumed, 2);
    }

    #[test]
    fn rounding_overflow_falls_back_to_last() {
        // A draw at the top of the range with weights that do not sum cleanly.
        let candidates = vec![
            Weighted::new(1, 0.1),
            Weighted::new(2, 0.2),
            Weighted::new(3, 0.0),
        ];
        let picked = select(&candidates, 0.999_999_999_999_999_9);
        assert!(matches!(picked, Some(2) | Some(3)));
    }
}
