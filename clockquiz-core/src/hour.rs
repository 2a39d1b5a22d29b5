//! The closed hour domain and its display-name table.
//!
//! An `Hour` is a clock position with no minutes component, always in `1..=12`.
//! `HourNames` maps hour numbers to lowercase names ("one" … "twelve") and is
//! handed to the session controller explicitly rather than read from a global.

use std::collections::BTreeMap;
use std::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

/// Label used when an hour has no entry in the name table.
pub const UNKNOWN_NAME: &str = "unknown";

/// A whole hour on a 12-hour analog clock face.
///
/// Only constructible through [`Hour::new`], so every value held by the rest of
/// the crate is within `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// Smallest valid hour value.
    pub const MIN: u8 = 1;
    /// Largest valid hour value.
    pub const MAX: u8 = 12;
    /// Number of distinct hours on the face.
    pub const COUNT: usize = 12;

    /// Returns `Some(Hour)` when `value` is in `1..=12`, `None` otherwise.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// The raw hour number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Iterates over all twelve hours in ascending order.
    pub fn all() -> impl Iterator<Item = Hour> {
        (Self::MIN..=Self::MAX).map(Hour)
    }
}

/// Uniform over all twelve hours, so `rng.random::<Hour>()` works.
impl Distribution<Hour> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Hour {
        Hour(rng.random_range(Hour::MIN..=Hour::MAX))
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only mapping from hour number to its lowercase display name.
///
/// The default table is English. A custom table may omit hours; lookups for
/// missing entries fall back to [`UNKNOWN_NAME`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourNames {
    names: BTreeMap<u8, String>,
}

impl HourNames {
    /// The built-in English table.
    pub fn english() -> Self {
        const NAMES: [&str; 12] = [
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve",
        ];
        Self::from_pairs(
            NAMES
                .iter()
                .zip(Hour::MIN..)
                .map(|(name, value)| (value, (*name).to_owned())),
        )
    }

    /// Builds a table from `(hour, name)` pairs. Names are stored lowercased.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let names = pairs
            .into_iter()
            .map(|(value, name)| (value, name.into().to_lowercase()))
            .collect();
        Self { names }
    }

    /// Returns the lowercase name for `value`, or `"unknown"` if absent.
    pub fn name(&self, value: u8) -> &str {
        self.names
            .get(&value)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Returns the name for `hour` with its first letter uppercased.
    ///
    /// `Hour(5)` → `"Five"`. A missing table entry yields `"Unknown"`.
    pub fn display_name(&self, hour: Hour) -> String {
        capitalize(self.name(hour.value()))
    }
}

impl Default for HourNames {
    fn default() -> Self {
        Self::english()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
