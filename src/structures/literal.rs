//! Atoms, and literals --- atoms paired with a (boolean) polarity.
//!
//! Literals are represented as non-zero integers, with the sign of the integer indicating polarity, as is typical of DIMACS.
//!
//! ```rust
//! # use otter_coloring::structures::literal::Literal;
//! let atom = 79;
//! let literal = Literal::new(atom, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, Literal::new(79, false));
//! assert_eq!(literal.as_int(), 79);
//! ```

/// The representation of an atom.
///
/// Atoms are positive integers, and zero is never used as an atom.
pub type Atom = u32;

/// A literal, as a non-zero integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(i32);

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    ///
    /// The atom must be non-zero and representable as a (positive) i32.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        debug_assert!(atom != 0 && atom <= i32::MAX as Atom);
        let atom = atom as i32;
        match polarity {
            true => Literal(atom),
            false => Literal(-atom),
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.0.unsigned_abs()
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.0 > 0
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal(-self.0)
    }

    /// The literal in it's integer form, with sign indicating polarity.
    pub fn as_int(&self) -> i32 {
        self.0
    }

    /// A dense index for the literal, with both polarities of an atom adjacent.
    ///
    /// Used to index watch lists.
    pub fn index(&self) -> usize {
        2 * self.atom() as usize + self.polarity() as usize
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl TryFrom<i32> for Literal {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 | i32::MIN => Err(()),
            _ => Ok(Literal(value)),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
