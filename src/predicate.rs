//! Predicate evaluation between two structural types.
//!
//! [`Relate`] reduces each relation to a [`Bool`]; the `Is*` aliases pick
//! one of two outcome types from it, the way a type-level conditional
//! would.

use crate::{
    logic::{And, Bool, False, If, Not, True},
    shape::{ShapeSub, Structural},
};

/// Relations between `Self` and `B`, evaluated from their shapes.
///
/// Implemented for every pair of [`Structural`] types, so each predicate is
/// total: it is either [`True`] or [`False`], never missing.
#[diagnostic::on_unimplemented(
    message = "cannot relate `{Self}` to `{B}`",
    note = "both sides must be `Structural` types"
)]
pub trait Relate<B> {
    /// `Self` is assignable to `B`.
    type Subtype: Bool;
    /// `B` is assignable to `Self`.
    type Supertype: Bool;
    /// Assignable both ways.
    type Equal: Bool;
    /// Assignable neither way.
    type Disjoint: Bool;
}

type SubOut<A, B> = <<A as Structural>::Shape as ShapeSub<<B as Structural>::Shape>>::Out;

impl<A, B> Relate<B> for A
where
    A: Structural,
    B: Structural,
    A::Shape: ShapeSub<B::Shape>,
    B::Shape: ShapeSub<A::Shape>,
{
    type Subtype = SubOut<A, B>;
    type Supertype = SubOut<B, A>;
    type Equal = And<SubOut<A, B>, SubOut<B, A>>;
    type Disjoint = And<Not<SubOut<A, B>>, Not<SubOut<B, A>>>;
}

/// `Y` if `A` and `B` are assignable to each other, else `N`.
pub type IsEqual<A, B, Y = True, N = False> = If<<A as Relate<B>>::Equal, Y, N>;

/// `Y` if `A` is assignable to `B`, else `N`.
pub type IsSubtype<A, B, Y = True, N = False> = If<<A as Relate<B>>::Subtype, Y, N>;

/// `Y` if `B` is assignable to `A`, else `N`.
pub type IsSupertype<A, B, Y = True, N = False> = If<<A as Relate<B>>::Supertype, Y, N>;

/// `Y` if neither is assignable to the other, else `N`.
pub type IsDisjoint<A, B, Y = True, N = False> = If<<A as Relate<B>>::Disjoint, Y, N>;
