//! Question generation: a random target hour and its multiple-choice options.
//!
//! Both functions take the RNG as a parameter so callers decide the source of
//! randomness (OS-seeded in the app, fixed seeds in tests). Shuffling uses
//! `SliceRandom::shuffle`, which is a Fisher–Yates shuffle: every ordering of
//! the input is equally likely.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::hour::Hour;

/// Default number of options offered per question.
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Draws one hour uniformly from `1..=12`.
///
/// Draws are independent; the same hour may come up on consecutive questions.
pub fn pick_target_hour<R: Rng + ?Sized>(rng: &mut R) -> Hour {
    rng.random()
}

/// Builds a shuffled option list of at most `count` hours containing `target` once.
///
/// The incorrect pool is every hour except `target`. After shuffling the pool,
/// the first `count - 1` entries are kept (all eleven when `count - 1` exceeds
/// the pool), `target` is added, and the combined list is shuffled again.
/// A `count` of zero behaves like one and returns just `[target]`.
///
/// # Arguments
///
/// * `target`: the correct answer; always present exactly once in the result
/// * `count` : requested number of options, including the target
/// * `rng`   : randomness source for both shuffles
pub fn build_options<R: Rng + ?Sized>(target: Hour, count: usize, rng: &mut R) -> Vec<Hour> {
    let mut incorrect: Vec<Hour> = Hour::all().filter(|&h| h != target).collect();
    incorrect.shuffle(rng);
    incorrect.truncate(count.saturating_sub(1));

    let mut options = incorrect;
    options.push(target);
    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hour(value: u8) -> Hour {
        Hour::new(value).unwrap()
    }

    #[test]
    fn options_contain_target_and_two_distinct_distractors() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = build_options(hour(5), 3, &mut rng);

        assert_eq!(options.len(), 3);
        assert_eq!(options.iter().filter(|&&h| h == hour(5)).count(), 1);
        let mut sorted = options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn oversized_count_yields_every_hour_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut options = build_options(hour(5), 13, &mut rng);
        options.sort();
        assert_eq!(options, Hour::all().collect::<Vec<_>>());
    }

    #[test]
    fn zero_and_one_count_return_only_target() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(build_options(hour(9), 0, &mut rng), vec![hour(9)]);
        assert_eq!(build_options(hour(9), 1, &mut rng), vec![hour(9)]);
    }

    #[test]
    fn every_hour_is_eventually_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 12];
        for _ in 0..1_000 {
            seen[usize::from(pick_target_hour(&mut rng).value() - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s), "some hour never drawn: {seen:?}");
    }
}
