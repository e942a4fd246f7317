//! Sign enum, used for lattice coordinates and face orientation.

use std::ops::{Mul, Neg};

/// Positive, negative, or zero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// All signs, from negative to positive.
    pub const ALL: [Sign; 3] = [Sign::Neg, Sign::Zero, Sign::Pos];

    /// Returns the sign with the given integer value, or `None` if `i` is not
    /// -1, 0, or 1.
    pub const fn from_int(i: i8) -> Option<Sign> {
        match i {
            -1 => Some(Sign::Neg),
            0 => Some(Sign::Zero),
            1 => Some(Sign::Pos),
            _ => None,
        }
    }
    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i8 {
        self as i8
    }
    /// Returns the integer shifted into the range 0..3, for use as an array
    /// index.
    pub const fn idx(self) -> usize {
        (self.int() + 1) as usize
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Returns an iterator over all signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        Self::ALL.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_arithmetic() {
        for a in Sign::iter() {
            assert_eq!(-(-a), a);
            for b in Sign::iter() {
                assert_eq!((a * b).int(), a.int() * b.int());
            }
        }
    }

    #[test]
    fn test_sign_int_conversion() {
        for s in Sign::iter() {
            assert_eq!(Sign::from_int(s.int()), Some(s));
        }
        assert_eq!(Sign::from_int(2), None);
        assert_eq!(Sign::from_int(-2), None);
    }
}
