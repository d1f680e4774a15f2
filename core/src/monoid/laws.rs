//! Checks for the monoid laws on concrete values.

use super::Monoid;
use crate::{String, format};
use core::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    #[error("associativity violated: (x <> y) <> z = {left}, but x <> (y <> z) = {right}")]
    Associativity { left: String, right: String },

    #[error("left identity violated: empty <> x = {found}, expected {expected}")]
    LeftIdentity { expected: String, found: String },

    #[error("right identity violated: x <> empty = {found}, expected {expected}")]
    RightIdentity { expected: String, found: String },
}

/// Checks `(x <> y) <> z == x <> (y <> z)`.
pub fn check_associativity<M>(x: &M, y: &M, z: &M) -> Result<(), LawViolation>
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let left = x.clone().combine(y.clone()).combine(z.clone());
    let right = x.clone().combine(y.clone().combine(z.clone()));
    if left == right {
        Ok(())
    } else {
        Err(LawViolation::Associativity {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// Checks `empty <> x == x <> empty == x`.
pub fn check_identity<M>(x: &M) -> Result<(), LawViolation>
where
    M: Monoid + Clone + PartialEq + Debug,
{
    let left = M::empty().combine(x.clone());
    if &left != x {
        return Err(LawViolation::LeftIdentity {
            expected: format!("{x:?}"),
            found: format!("{left:?}"),
        });
    }

    let right = x.clone().combine(M::empty());
    if &right != x {
        return Err(LawViolation::RightIdentity {
            expected: format!("{x:?}"),
            found: format!("{right:?}"),
        });
    }

    Ok(())
}
