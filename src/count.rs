//! Count resolution: untrusted input in, bounded repetition count out.

use std::num::IntErrorKind;

use crate::error::ChickenError;

pub const MIN_CHICKENS: u32 = 1;
pub const MAX_CHICKENS: u32 = 50_000; // protects the universe
pub const DEFAULT_CHICKENS: u32 = 1000;

/// A repetition count guaranteed to sit inside `[MIN_CHICKENS, MAX_CHICKENS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SafeCount(u32);

impl SafeCount {
    pub const DEFAULT: SafeCount = SafeCount(DEFAULT_CHICKENS);

    /// Clamp any integer into the allowed range.
    pub fn bounded(n: i64) -> Self {
        Self(n.clamp(MIN_CHICKENS as i64, MAX_CHICKENS as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<SafeCount> for u32 {
    fn from(count: SafeCount) -> u32 {
        count.0
    }
}

/// Resolve a raw count from a path segment or query parameter.
///
/// `None` means the caller gave nothing and the default applies. Present
/// input must be a base-10 integer; out-of-range values clamp, including
/// literals too big for an `i64`. Anything non-numeric is `InvalidCount`.
pub fn resolve_count(raw: Option<&str>) -> Result<SafeCount, ChickenError> {
    let Some(raw) = raw else {
        return Ok(SafeCount::DEFAULT);
    };

    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(SafeCount::bounded(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(SafeCount::bounded(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(SafeCount::bounded(i64::MIN)),
            _ => Err(ChickenError::InvalidCount(raw.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input_uses_default() {
        assert_eq!(resolve_count(None).unwrap().get(), 1000);
    }

    #[test]
    fn in_range_values_pass_through() {
        for n in [1, 5, 999, 50_000] {
            let raw = n.to_string();
            assert_eq!(resolve_count(Some(&raw)).unwrap().get(), n);
        }
    }

    #[test]
    fn large_values_clamp_to_max() {
        assert_eq!(resolve_count(Some("50001")).unwrap().get(), MAX_CHICKENS);
        assert_eq!(resolve_count(Some("999999")).unwrap().get(), MAX_CHICKENS);
        assert_eq!(
            resolve_count(Some("99999999999999999999999999")).unwrap().get(),
            MAX_CHICKENS
        );
    }

    #[test]
    fn small_values_clamp_to_min() {
        assert_eq!(resolve_count(Some("0")).unwrap().get(), MIN_CHICKENS);
        assert_eq!(resolve_count(Some("-42")).unwrap().get(), MIN_CHICKENS);
        assert_eq!(
            resolve_count(Some("-99999999999999999999999999")).unwrap().get(),
            MIN_CHICKENS
        );
    }

    #[test]
    fn surrounding_whitespace_and_sign_are_accepted() {
        assert_eq!(resolve_count(Some(" 12 ")).unwrap().get(), 12);
        assert_eq!(resolve_count(Some("+7")).unwrap().get(), 7);
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["banana", "", "   ", "NaN", "Infinity", "1.5", "12abc", "0x10"] {
            assert_eq!(
                resolve_count(Some(raw)),
                Err(ChickenError::InvalidCount(raw.to_string())),
                "input {raw:?} should be rejected"
            );
        }
    }
}
