//! Monoids: a type with an identity value and an associative `combine`.
//!
//! Formally a monoid is a triple `(T, e, f)` where `f: (T, T) -> T` satisfies
//!
//! ```text
//! f(x, f(y, z)) == f(f(x, y), z)   // associativity
//! f(x, e) == f(e, x) == x          // identity
//! ```
//!
//! Numbers under addition (`e = 0`) and multiplication (`e = 1`), sequences
//! under concatenation (`e = []`) and booleans under `||` (`e = false`) are the
//! instances provided here. [`laws`] checks the two laws for concrete values.

use crate::fold::reduce;
use crate::{String, Vec};
use core::ops::{Add, Mul};

pub mod laws;

pub use laws::{LawViolation, check_associativity, check_identity};

/// Primitive numbers with additive and multiplicative identities.
pub trait Numeric: Copy + Add<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_numeric {
    ($zero:literal, $one:literal => $($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )+
    };
}

impl_numeric!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0 => f32, f64);

pub trait Monoid: Sized {
    /// The identity element.
    fn empty() -> Self;

    /// Associative binary operation.
    fn combine(self, other: Self) -> Self;
}

/// Numbers under addition.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Sum<N>(pub N);

/// Numbers under multiplication.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Product<N>(pub N);

/// Booleans under logical or.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Any(pub bool);

impl<N: Numeric> Monoid for Sum<N> {
    fn empty() -> Self {
        Sum(N::ZERO)
    }

    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<N: Numeric> Monoid for Product<N> {
    fn empty() -> Self {
        Product(N::ONE)
    }

    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Any(false)
    }

    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// Combines every item from left to right, starting at [`Monoid::empty`].
///
/// ```
/// use refold_core::monoid::{Sum, mconcat};
///
/// assert_eq!(mconcat(&[Sum(1), Sum(2), Sum(3)]), Sum(6));
/// assert_eq!(mconcat::<Vec<i32>>(&[]), Vec::<i32>::new());
/// ```
pub fn mconcat<M: Monoid + Clone>(items: &[M]) -> M {
    reduce(
        items,
        |value, accumulator: M, _, _| accumulator.combine(value.clone()),
        M::empty(),
    )
}

/// Maps every element into a monoid and combines the results in order.
///
/// ```
/// use refold_core::monoid::{Any, fold_map};
///
/// let has_negative = fold_map(&[3, -1, 4], |n: &i32| Any(*n < 0));
/// assert_eq!(has_negative, Any(true));
/// ```
pub fn fold_map<T, M, F>(array: &[T], mut f: F) -> M
where
    M: Monoid,
    F: FnMut(&T) -> M,
{
    reduce(
        array,
        |value, accumulator: M, _, _| accumulator.combine(f(value)),
        M::empty(),
    )
}
