//! Rounding-mode plumbing for the exact conversion path.

use core::cmp::Ordering;

use crate::float::bignum::Bignum;
use crate::options::RoundingKind;

/// A rounding mode reduced to the magnitude of the value, with the sign
/// already folded in. The exact division path always works on magnitudes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MagnitudeRounding {
    /// Truncate (toward zero).
    Down,
    /// Away from zero.
    Up,
    NearestEven,
    NearestAway,
}

impl MagnitudeRounding {
    pub fn resolve(kind: RoundingKind, negative: bool) -> Self {
        match kind {
            RoundingKind::NearestTieEven => Self::NearestEven,
            RoundingKind::NearestTieAwayZero => Self::NearestAway,
            RoundingKind::TowardZero => Self::Down,
            RoundingKind::TowardPositiveInfinity => {
                if negative { Self::Down } else { Self::Up }
            }
            RoundingKind::TowardNegativeInfinity => {
                if negative { Self::Up } else { Self::Down }
            }
        }
    }
}

/// Decide whether a truncated quotient rounds up, given the remainder over
/// the divisor. `sticky` records nonzero digits dropped before the exact
/// division, which perturb the remainder upward by less than one unit.
pub(crate) fn rounds_up(
    mode: MagnitudeRounding,
    quotient: u64,
    remainder: &Bignum,
    divisor: &Bignum,
    sticky: bool,
) -> bool {
    match mode {
        MagnitudeRounding::Down => false,
        MagnitudeRounding::Up => sticky || !remainder.is_zero(),
        MagnitudeRounding::NearestEven | MagnitudeRounding::NearestAway => {
            let mut doubled = remainder.clone();
            doubled.shl(1);
            match doubled.cmp_with(divisor) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => {
                    if sticky {
                        // Dropped digits push the value past the midpoint.
                        true
                    } else if mode == MagnitudeRounding::NearestAway {
                        true
                    } else {
                        quotient & 1 == 1
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(mode: MagnitudeRounding, q: u64, rem: u64, den: u64, sticky: bool) -> bool {
        rounds_up(mode, q, &Bignum::from_u64(rem), &Bignum::from_u64(den), sticky)
    }

    #[test]
    fn test_resolve_directed() {
        use MagnitudeRounding::*;
        use RoundingKind::*;
        assert_eq!(MagnitudeRounding::resolve(TowardPositiveInfinity, false), Up);
        assert_eq!(MagnitudeRounding::resolve(TowardPositiveInfinity, true), Down);
        assert_eq!(MagnitudeRounding::resolve(TowardNegativeInfinity, false), Down);
        assert_eq!(MagnitudeRounding::resolve(TowardNegativeInfinity, true), Up);
        assert_eq!(MagnitudeRounding::resolve(TowardZero, true), Down);
        assert_eq!(MagnitudeRounding::resolve(NearestTieEven, true), NearestEven);
    }

    #[test]
    fn test_nearest_even_ties() {
        use MagnitudeRounding::NearestEven;
        // Below the midpoint.
        assert!(!check(NearestEven, 4, 3, 8, false));
        // Above the midpoint.
        assert!(check(NearestEven, 4, 5, 8, false));
        // Exact tie: stay even.
        assert!(!check(NearestEven, 4, 4, 8, false));
        assert!(check(NearestEven, 5, 4, 8, false));
        // Sticky bits break the tie upward.
        assert!(check(NearestEven, 4, 4, 8, true));
    }

    #[test]
    fn test_nearest_away_ties() {
        use MagnitudeRounding::NearestAway;
        assert!(check(NearestAway, 4, 4, 8, false));
        assert!(!check(NearestAway, 4, 3, 8, false));
    }

    #[test]
    fn test_directed() {
        use MagnitudeRounding::{Down, Up};
        assert!(!check(Down, 4, 7, 8, true));
        assert!(check(Up, 4, 1, 8, false));
        assert!(check(Up, 4, 0, 8, true));
        assert!(!check(Up, 4, 0, 8, false));
    }
}
