//! Type-level ids.
//!
//! Primitive kinds are numbered with unary ids ([`Z`], [`S`]). Record labels
//! are spelled out byte by byte ([`Chars`], [`Byte`]), so a label's id only
//! depends on its name. Comparing two ids is total: the answer is a
//! [`Bool`] rather than a missing impl.

use std::marker::PhantomData;

use crate::logic::{And, Bool, False, True};

/// The first id.
pub enum Z {}

/// The id after `N`.
pub struct S<N>(PhantomData<N>);

/// Type-level id equality.
pub trait IdEq<M> {
    type Out: Bool;
}

impl IdEq<Z> for Z {
    type Out = True;
}

impl<M> IdEq<S<M>> for Z {
    type Out = False;
}

impl<N> IdEq<Z> for S<N> {
    type Out = False;
}

impl<N: IdEq<M>, M> IdEq<S<M>> for S<N> {
    type Out = N::Out;
}

/// End of a spelled label.
pub enum End {}

/// Spelled label: byte `H` followed by the rest `T`.
pub struct Chars<H, T>(PhantomData<(H, T)>);

/// One byte of a label, most significant bit first.
pub struct Byte<B7, B6, B5, B4, B3, B2, B1, B0>(PhantomData<(B7, B6, B5, B4, B3, B2, B1, B0)>);

impl IdEq<True> for True {
    type Out = True;
}

impl IdEq<False> for True {
    type Out = False;
}

impl IdEq<True> for False {
    type Out = False;
}

impl IdEq<False> for False {
    type Out = True;
}

impl IdEq<End> for End {
    type Out = True;
}

impl<H, T> IdEq<Chars<H, T>> for End {
    type Out = False;
}

impl<H, T> IdEq<End> for Chars<H, T> {
    type Out = False;
}

impl<H1, T1, H2, T2> IdEq<Chars<H2, T2>> for Chars<H1, T1>
where
    H1: IdEq<H2>,
    T1: IdEq<T2>,
{
    type Out = And<<H1 as IdEq<H2>>::Out, <T1 as IdEq<T2>>::Out>;
}

type BitEq<A, B> = <A as IdEq<B>>::Out;

impl<A7, A6, A5, A4, A3, A2, A1, A0, B7, B6, B5, B4, B3, B2, B1, B0>
    IdEq<Byte<B7, B6, B5, B4, B3, B2, B1, B0>> for Byte<A7, A6, A5, A4, A3, A2, A1, A0>
where
    A7: IdEq<B7>,
    A6: IdEq<B6>,
    A5: IdEq<B5>,
    A4: IdEq<B4>,
    A3: IdEq<B3>,
    A2: IdEq<B2>,
    A1: IdEq<B1>,
    A0: IdEq<B0>,
{
    type Out = And<
        And<And<BitEq<A7, B7>, BitEq<A6, B6>>, And<BitEq<A5, B5>, BitEq<A4, B4>>>,
        And<And<BitEq<A3, B3>, BitEq<A2, B2>>, And<BitEq<A1, B1>, BitEq<A0, B0>>>,
    >;
}
