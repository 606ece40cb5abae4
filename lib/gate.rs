//! Gates whose operations belong to the *n*-qubit Clifford group, and the
//! Pauli operators they act on by conjugation.
//!
//! See also: <https://en.wikipedia.org/wiki/Clifford_gates>

use std::fmt;
use itertools::Itertools;
use rand::Rng;

/// Description of a single gate for a register of `n` qubits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Hadamard
    H(usize),
    /// π rotation about X
    X(usize),
    /// π rotation about Y
    Y(usize),
    /// π rotation about Z
    Z(usize),
    /// π/2 rotation about Z
    S(usize),
    /// Z-controlled π rotation about X.
    ///
    /// The first qubit index is the control.
    CX(usize, usize),
    /// Z-controlled π rotation about Z.
    ///
    /// The first qubit index is the control.
    CZ(usize, usize),
    /// Swap
    Swap(usize, usize),
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::H(k) => write!(f, "H({})", k),
            Self::X(k) => write!(f, "X({})", k),
            Self::Y(k) => write!(f, "Y({})", k),
            Self::Z(k) => write!(f, "Z({})", k),
            Self::S(k) => write!(f, "S({})", k),
            Self::CX(a, b) => write!(f, "CX({}, {})", a, b),
            Self::CZ(a, b) => write!(f, "CZ({}, {})", a, b),
            Self::Swap(a, b) => write!(f, "Swap({}, {})", a, b),
        }
    }
}

impl Gate {
    /// Return `true` if `self` acts on two qubits.
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Self::CX(..) | Self::CZ(..) | Self::Swap(..))
    }

    /// Sample a random single-qubit gate (`H`, `X`, `Y`, `Z`, or `S`) for a
    /// given qubit index.
    pub fn sample_single<R>(idx: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        match rng.gen_range(0..5_usize) {
            0 => Self::H(idx),
            1 => Self::X(idx),
            2 => Self::Y(idx),
            3 => Self::Z(idx),
            4 => Self::S(idx),
            _ => unreachable!(),
        }
    }

    /// Sample a random two-qubit gate (`CX` in either direction, `CZ`, or
    /// `Swap`) acting on qubits `a` and `b`.
    pub fn sample_pair<R>(a: usize, b: usize, rng: &mut R) -> Self
    where R: Rng + ?Sized
    {
        match rng.gen_range(0..4_usize) {
            0 => Self::CX(a, b),
            1 => Self::CX(b, a),
            2 => Self::CZ(a, b),
            3 => Self::Swap(a, b),
            _ => unreachable!(),
        }
    }
}

/// A single-qubit Pauli operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity
    I,
    /// σ<sub>*x*</sub>
    X,
    /// σ<sub>*y*</sub>
    Y,
    /// σ<sub>*z*</sub>
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::I => write!(f, "{}", if f.alternate() { "." } else { "I" }),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl Pauli {
    /// Decode from a (Z-bit, X-bit) pair.
    pub fn from_bits(z: bool, x: bool) -> Self {
        match (z, x) {
            (false, false) => Self::I,
            (true,  false) => Self::Z,
            (false, true ) => Self::X,
            (true,  true ) => Self::Y,
        }
    }

    /// Encode as a (Z-bit, X-bit) pair.
    pub fn to_bits(self) -> (bool, bool) {
        match self {
            Self::I => (false, false),
            Self::Z => (true,  false),
            Self::X => (false, true ),
            Self::Y => (true,  true ),
        }
    }

    /// Return `true` if `self` and `other` commute.
    pub fn commutes_with(self, other: Self) -> bool {
        match (self, other) {
            (_, Self::I) => true,
            (Self::I, _) => true,
            (a, b) => a == b,
        }
    }
}

/// A single `n`-qubit Pauli operator with a sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NPauli {
    /// `true` for an overall factor of −1.
    pub negative: bool,
    pub ops: Vec<Pauli>,
}

impl fmt::Display for NPauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.negative { "-" } else { "+" })?;
        self.ops.iter()
            .try_for_each(|p| fmt::Display::fmt(p, f))
    }
}

impl NPauli {
    pub fn new<I>(negative: bool, ops: I) -> Self
    where I: IntoIterator<Item = Pauli>
    {
        Self { negative, ops: ops.into_iter().collect() }
    }

    /// The identity on `n` qubits.
    pub fn identity(n: usize) -> Self {
        Self { negative: false, ops: vec![Pauli::I; n] }
    }

    /// A single `op` on qubit `k` of `n`, with identities elsewhere.
    pub fn single(n: usize, k: usize, op: Pauli) -> Self {
        let mut p = Self::identity(n);
        if let Some(pk) = p.ops.get_mut(k) { *pk = op; }
        p
    }

    /// Number of qubits.
    pub fn n(&self) -> usize { self.ops.len() }

    /// Number of qubits acted on by a non-identity.
    pub fn weight(&self) -> usize {
        self.ops.iter().filter(|p| **p != Pauli::I).count()
    }

    /// Return `true` if `self` and `other` commute, i.e. they anti-commute on
    /// an even number of qubits.
    ///
    /// Operators of different sizes are compared over their common prefix.
    pub fn commutes_with(&self, other: &Self) -> bool {
        self.ops.iter().zip(&other.ops)
            .filter(|(a, b)| !a.commutes_with(**b))
            .count() % 2 == 0
    }

    /// Render the operator string alone, without sign.
    pub fn ops_string(&self) -> String { self.ops.iter().join("") }
}
