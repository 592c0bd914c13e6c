//! Type-level booleans.
//!
//! Predicates reduce to [`True`] or [`False`], and everything built on top
//! of them is ordinary associated-type projection, so the compiler does
//! the evaluation.

/// Truth at the type level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct True;

/// Falsehood at the type level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct False;

/// A type-level boolean.
pub trait Bool: Copy {
    /// The runtime mirror of this boolean, for tests and debugging.
    const VALUE: bool;

    type Not: Bool;
    type And<Q: Bool>: Bool;
    type Or<Q: Bool>: Bool;
    /// Selects `Y` for [`True`] and `N` for [`False`].
    type If<Y, N>;
}

impl Bool for True {
    const VALUE: bool = true;

    type Not = False;
    type And<Q: Bool> = Q;
    type Or<Q: Bool> = True;
    type If<Y, N> = Y;
}

impl Bool for False {
    const VALUE: bool = false;

    type Not = True;
    type And<Q: Bool> = False;
    type Or<Q: Bool> = Q;
    type If<Y, N> = N;
}

pub type Not<P> = <P as Bool>::Not;
pub type And<P, Q> = <P as Bool>::And<Q>;
pub type Or<P, Q> = <P as Bool>::Or<Q>;
pub type If<C, Y, N> = <C as Bool>::If<Y, N>;

/// Reads a type-level boolean back as a `bool`.
pub const fn value<B: Bool>() -> bool {
    B::VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectives_follow_truth_tables() {
        assert!(value::<And<True, True>>());
        assert!(!value::<And<True, False>>());
        assert!(!value::<And<False, True>>());
        assert!(value::<Or<False, True>>());
        assert!(!value::<Or<False, False>>());
        assert!(value::<Not<False>>());
        assert!(!value::<Not<Not<False>>>());
    }

    #[test]
    fn if_selects_branch() {
        let picked: If<True, u8, u16> = 7u8;
        let other: If<False, u8, u16> = 7u16;
        assert_eq!(u16::from(picked), other);
    }
}
