//!
//! FlowRateLike trait for generics of Flow amount
//!
//! usize and f64 implements FlowRateLike
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

///
/// generic FlowRate
///
pub trait FlowRateLike:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// smaller one of the two values
    fn smaller(self, rhs: Self) -> Self {
        if rhs < self {
            rhs
        } else {
            self
        }
    }
    /// strictly positive, ignoring differences within `eps()`
    fn is_movable(self) -> bool {
        self > Self::eps()
    }
    /// similary equal
    fn sim_eq(self, rhs: Self) -> bool;
    /// difference allowed to be regarded as a same value
    fn eps() -> Self;
}

impl FlowRateLike for usize {
    fn zero() -> usize {
        0
    }
    fn sim_eq(self, rhs: Self) -> bool {
        // integer type does not need to consider the floating error
        self == rhs
    }
    fn eps() -> Self {
        0
    }
}

impl FlowRateLike for f64 {
    fn zero() -> Self {
        0.0
    }
    fn sim_eq(self, rhs: Self) -> bool {
        (self - rhs).abs() <= Self::eps()
    }
    fn eps() -> Self {
        0.000000001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_and_movable() {
        assert_eq!(3usize.smaller(5), 3);
        assert_eq!(5usize.smaller(3), 3);
        assert_eq!(2.5f64.smaller(-1.0), -1.0);

        assert!(1usize.is_movable());
        assert!(!0usize.is_movable());
        assert!(!0.0000000001f64.is_movable());
        assert!(0.5f64.is_movable());
        assert!(FlowRateLike::is_movable(0.000000002f64));
        assert!(!FlowRateLike::is_movable(-1.0f64));
    }

    #[test]
    fn float_similarity() {
        assert!((0.1f64 + 0.2).sim_eq(0.3));
        assert!(!1.0f64.sim_eq(1.001));
        assert!(7usize.sim_eq(7));
    }
}
