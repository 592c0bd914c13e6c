//! Connectives for combining relation proofs.

/// Intersection: holds both proofs.
#[derive(Clone, Copy, Debug)]
pub struct And<P, Q>(pub P, pub Q);

/// Union: holds one of the proofs.
#[derive(Clone, Copy, Debug)]
pub enum Or<P, Q> {
    Left(P),
    Right(Q),
}

/// Construct and from its parts
pub fn and<P, Q>(p: P, q: Q) -> And<P, Q> {
    And(p, q)
}

/// Construct or from left value
pub fn or_l<P, Q>(p: P) -> Or<P, Q> {
    Or::Left(p)
}

/// Construct or from right value
pub fn or_r<P, Q>(q: Q) -> Or<P, Q> {
    Or::Right(q)
}

impl<P, Q> And<P, Q> {
    /// Extract the left component of and
    pub fn elim_l(self) -> P {
        self.0
    }

    /// Extract the right component of and
    pub fn elim_r(self) -> Q {
        self.1
    }

    /// Extract both components of and
    pub fn elim(self) -> (P, Q) {
        (self.0, self.1)
    }
}

impl<P, Q> Or<P, Q> {
    /// Elimination by case analysis: if a fact follows from both cases, it
    /// follows from the or.
    pub fn elim<R>(self, l: impl FnOnce(P) -> R, r: impl FnOnce(Q) -> R) -> R {
        match self {
            Or::Left(p) => l(p),
            Or::Right(q) => r(q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_keeps_both_parts() {
        let (p, q) = and(1u8, "two").elim();
        assert_eq!((p, q), (1, "two"));
        assert_eq!(and(1u8, 2u8).elim_r(), 2);
    }

    #[test]
    fn or_dispatches_on_side() {
        let l: Or<u8, &str> = or_l(4);
        let r: Or<u8, &str> = or_r("four");
        assert_eq!(l.elim(|n| n as usize, str::len), 4);
        assert_eq!(r.elim(|n| n as usize, str::len), 4);
    }
}
