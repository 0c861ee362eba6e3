//! Weight algebra for shortest-path computations
//!
//! Search algorithms never touch native arithmetic: every accumulation
//! goes through [`OrderedMonoid::combine`] and every comparison through
//! [`OrderedMonoid::compare`], so the same engine works for plain numeric
//! costs and for custom domains (lexicographic pairs, bounded counters,
//! and so on).

use std::cmp::Ordering;

/// An associative combine operation with an identity element and a total
/// order over a weight type `W`.
///
/// Contract:
/// - `combine(zero(), w)` and `combine(w, zero())` both equal `w`;
/// - `combine` is associative;
/// - `compare` is a total order.
///
/// Dijkstra and A* additionally require the order to be monotonic under
/// `combine` (combining never decreases a weight, i.e. weights are
/// non-negative). Supplying a domain that violates monotonicity is a
/// precondition violation: the result is unspecified, not detected.
pub trait OrderedMonoid<W> {
    /// The additive identity
    fn zero(&self) -> W;

    /// Combine two weights; associative, with [`zero`](Self::zero) as
    /// identity on both sides
    fn combine(&self, a: &W, b: &W) -> W;

    /// Total-order comparison of two weights
    fn compare(&self, a: &W, b: &W) -> Ordering;
}

/// Standard additive weights over the native numeric types
///
/// `0` is the identity, `+` the combine operation, and the natural order
/// the comparison (floats compare via `total_cmp`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

macro_rules! additive_integer {
    ($($t:ty),*) => {$(
        impl OrderedMonoid<$t> for Additive {
            fn zero(&self) -> $t {
                0
            }

            fn combine(&self, a: &$t, b: &$t) -> $t {
                a + b
            }

            fn compare(&self, a: &$t, b: &$t) -> Ordering {
                a.cmp(b)
            }
        }
    )*};
}

additive_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! additive_float {
    ($($t:ty),*) => {$(
        impl OrderedMonoid<$t> for Additive {
            fn zero(&self) -> $t {
                0.0
            }

            fn combine(&self, a: &$t, b: &$t) -> $t {
                a + b
            }

            fn compare(&self, a: &$t, b: &$t) -> Ordering {
                a.total_cmp(b)
            }
        }
    )*};
}

additive_float!(f32, f64);
