//! *n*-qubit stabilizer states in the stabilizer/destabilizer tableau
//! representation.
//!
//! Rather than 2<sup>*n*</sup> complex amplitudes, a stabilizer state is
//! identified by *n* commuting Pauli operators that stabilize it, together
//! with *n* complementary "destabilizers" that make every gate update a
//! handful of bitwise operations. Each of these 2*n* generators needs two bits
//! per qubit plus a sign bit, so the whole state fits in a 2*n* × (2*n* + 1)
//! binary matrix:
//!
//! | columns        | content                                  |
//! | :------------: | :--------------------------------------- |
//! | `0..n`         | Z-component of the generator, per qubit  |
//! | `n..2n`        | X-component of the generator, per qubit  |
//! | `2n`           | sign (`1` for −1)                        |
//!
//! Rows `0..n` are stabilizers and rows `n..2n` are destabilizers. For qubit
//! `j`, the pair of bits in columns (`j`, `n + j`) decodes as
//!
//! | Z | X | Pauli |
//! | :-: | :-: | :-: |
//! | 0 | 0 | *I* |
//! | 1 | 0 | *Z* |
//! | 0 | 1 | *X* |
//! | 1 | 1 | *Y* |
//!
//! Internally the matrix is stored column-major with each column packed into
//! `u32` words, so every gate is a pass over the words of at most five columns,
//! which is *O*(*n*) in runtime.
//!
//! # Example
//! ```
//! use tableau_sim::{ tableau::Tableau, gate::Gate };
//!
//! // initialize a new state to ∣00⟩
//! let mut tab = Tableau::new(2).unwrap();
//!
//! // generate a Bell state on qubits 0, 1
//! tab.apply_h(0).unwrap()
//!     .apply_cx(0, 1).unwrap();
//!
//! assert_eq!(
//!     tab.to_string(),
//!     "Stabilizers: [+XX, +ZZ]\nDestabilizers: [+ZI, +IX]",
//! );
//!
//! // rejected calls leave the state untouched
//! assert!(tab.apply_gate(Gate::CZ(1, 1)).is_err());
//! ```

use std::fmt;
use itertools::Itertools;
use ndarray::{ self as nd, s };
use tracing::{ debug, trace };
use crate::{
    error::{ GateError, GateResult, MalformedTableau },
    gate::{ Gate, NPauli, Pauli },
};

const PW: [u32; 32] = [ // PW[i] = 2^i
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768,
    65536, 131072, 262144, 524288, 1048576, 2097152, 4194304, 8388608, 16777216,
    33554432, 67108864, 134217728, 268435456, 536870912, 1073741824, 2147483648
];

/// A stabilizer/destabilizer tableau for a register of `n` qubits.
///
/// Gate methods take `&mut self`, so a tableau can't be mutated from more than
/// one place at a time; share one across threads behind a lock, or give each
/// thread its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tableau {
    n: usize,
    // one packed column per row of this array: Z bits in 0..n, X bits in
    // n..2n, signs in 2n; size (2n + 1) × ceil(2n / 32)
    //
    // bits past row 2n in the last word are always zero
    cols: nd::Array2<u32>,
}

impl Tableau {
    /// Create the identity tableau for `n` qubits, i.e. the state ∣0...0⟩
    /// with stabilizers +Z<sub>*i*</sub> and destabilizers +X<sub>*i*</sub>.
    ///
    /// Fails if `n == 0` or `2n + 1` overflows `usize`.
    pub fn new(n: usize) -> Result<Self, MalformedTableau> {
        let rows = n.checked_mul(2);
        let Some((rows, cols)) = rows.zip(rows.and_then(|r| r.checked_add(1)))
        else {
            debug!(n, "rejected oversized tableau");
            return Err(MalformedTableau { rows: usize::MAX, cols: usize::MAX });
        };
        let mut tab = Self::zeros(rows, cols)?;
        for i in 0..n {
            tab.set_bit(i, i, true);
            tab.set_bit(n + i, n + i, true);
        }
        debug!(n, "created identity tableau");
        Ok(tab)
    }

    // all-zero tableau after checking that `rows × cols` is a valid shape
    fn zeros(rows: usize, cols: usize) -> Result<Self, MalformedTableau> {
        if rows == 0 || rows % 2 != 0 || rows.checked_add(1) != Some(cols) {
            debug!(rows, cols, "rejected malformed tableau");
            return Err(MalformedTableau { rows, cols });
        }
        let n = rows / 2;
        let words = rows.div_ceil(32);
        if cols.checked_mul(words).map_or(true, |len| len > isize::MAX as usize) {
            debug!(rows, cols, "rejected oversized tableau");
            return Err(MalformedTableau { rows, cols });
        }
        let cols = nd::Array2::zeros((2 * n + 1, words));
        Ok(Self { n, cols })
    }

    /// Create a tableau from a `2n × (2n + 1)` matrix in the layout described
    /// in the [module-level documentation][self].
    ///
    /// Any element not equal to `T::default()` (`false`, `0`, `0.0`, ...) is
    /// read as a `1`.
    pub fn from_array<S, T>(data: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<Self, MalformedTableau>
    where
        S: nd::Data<Elem = T>,
        T: Copy + PartialEq + Default,
    {
        let (rows, cols) = data.dim();
        let mut tab = Self::zeros(rows, cols)?;
        let zero = T::default();
        data.indexed_iter()
            .filter(|(_, v)| **v != zero)
            .for_each(|((i, j), _)| { tab.set_bit(i, j, true); });
        debug!(n = tab.n, "created tableau from array");
        Ok(tab)
    }

    /// Like [`Self::from_array`], but for nested rows.
    ///
    /// Ragged input is malformed.
    pub fn from_rows<R, T>(data: &[R]) -> Result<Self, MalformedTableau>
    where
        R: AsRef<[T]>,
        T: Copy + PartialEq + Default,
    {
        let rows = data.len();
        let cols = data.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if data.iter().any(|r| r.as_ref().len() != cols) {
            debug!(rows, cols, "rejected ragged tableau");
            return Err(MalformedTableau { rows, cols });
        }
        let mut tab = Self::zeros(rows, cols)?;
        let zero = T::default();
        for (i, row) in data.iter().enumerate() {
            row.as_ref().iter().enumerate()
                .filter(|(_, v)| **v != zero)
                .for_each(|(j, _)| { tab.set_bit(i, j, true); });
        }
        debug!(n = tab.n, "created tableau from rows");
        Ok(tab)
    }

    /// Create a tableau from explicit stabilizer and destabilizer generators.
    ///
    /// There must be the same number `n > 0` of each, and every generator
    /// must act on `n` qubits. Whether the generators actually form a valid
    /// stabilizer/destabilizer pair is not checked; see
    /// [`Self::is_symplectic`].
    ///
    /// On failure, the error reports the total number of generators as `rows`
    /// and `2n + 1` as `cols`, with `n` taken from the number of stabilizers.
    pub fn from_paulis(stabs: &[NPauli], destabs: &[NPauli])
        -> Result<Self, MalformedTableau>
    {
        let n = stabs.len();
        let rows = stabs.len() + destabs.len();
        if destabs.len() != n
            || stabs.iter().chain(destabs).any(|p| p.n() != n)
        {
            debug!(rows, n, "rejected mismatched generators");
            return Err(MalformedTableau { rows, cols: 2 * n + 1 });
        }
        let mut tab = Self::zeros(rows, 2 * n + 1)?;
        for (i, p) in stabs.iter().chain(destabs).enumerate() {
            for (j, op) in p.ops.iter().enumerate() {
                let (z, x) = op.to_bits();
                tab.set_bit(i, j, z);
                tab.set_bit(i, n + j, x);
            }
            tab.set_bit(i, 2 * n, p.negative);
        }
        debug!(n, "created tableau from generators");
        Ok(tab)
    }

    /// Number of qubits.
    pub fn n(&self) -> usize { self.n }

    fn word_bit(row: usize) -> (usize, u32) { (row >> 5, PW[row & 31]) }

    fn bit(&self, row: usize, col: usize) -> bool {
        let (w, pw) = Self::word_bit(row);
        self.cols[[col, w]] & pw != 0
    }

    fn set_bit(&mut self, row: usize, col: usize, val: bool) {
        let (w, pw) = Self::word_bit(row);
        if val {
            self.cols[[col, w]] |= pw;
        } else {
            self.cols[[col, w]] &= !pw;
        }
    }

    /// Return the entry at (`row`, `col`), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < 2 * self.n && col <= 2 * self.n)
            .then(|| self.bit(row, col))
    }

    /// Return `true` if the `row`-th generator has a negative sign, or `None`
    /// if out of bounds.
    pub fn phase(&self, row: usize) -> Option<bool> {
        self.get(row, 2 * self.n)
    }

    /// Return a fresh copy of the full `2n × (2n + 1)` matrix with entries
    /// `0` or `1`.
    pub fn as_array(&self) -> nd::Array2<u8> {
        let n = self.n;
        nd::Array2::from_shape_fn(
            (2 * n, 2 * n + 1), |(i, j)| u8::from(self.bit(i, j)))
    }

    /// Return the `i`-th generator as a signed Pauli string, or `None` if out
    /// of bounds.
    ///
    /// Rows `0..n` are stabilizers and `n..2n` are destabilizers.
    pub fn row(&self, i: usize) -> Option<NPauli> {
        (i < 2 * self.n).then(|| {
            let n = self.n;
            NPauli {
                negative: self.bit(i, 2 * n),
                ops: (0..n)
                    .map(|j| Pauli::from_bits(self.bit(i, j), self.bit(i, n + j)))
                    .collect(),
            }
        })
    }

    /// Return all stabilizer generators in row order.
    pub fn stabilizers(&self) -> Vec<NPauli> {
        (0..self.n).filter_map(|i| self.row(i)).collect()
    }

    /// Return all destabilizer generators in row order.
    pub fn destabilizers(&self) -> Vec<NPauli> {
        (self.n..2 * self.n).filter_map(|i| self.row(i)).collect()
    }

    /// Check the commutation structure of the generators: stabilizers commute
    /// with each other, destabilizers commute with each other, and the `i`-th
    /// stabilizer anti-commutes with the `j`-th destabilizer iff `i == j`.
    ///
    /// This is *O*(*n*<sup>3</sup>) and never run by the gates themselves,
    /// which preserve the structure by construction.
    pub fn is_symplectic(&self) -> bool {
        let stab = self.stabilizers();
        let destab = self.destabilizers();
        let mutually_commuting = |ps: &[NPauli]| {
            ps.iter().tuple_combinations()
                .all(|(a, b)| a.commutes_with(b))
        };
        mutually_commuting(&stab)
            && mutually_commuting(&destab)
            && stab.iter().enumerate()
                .cartesian_product(destab.iter().enumerate())
                .all(|((i, s), (j, d))| s.commutes_with(d) == (i != j))
    }

    /// Fail with [`GateError::InvalidQubitIndex`] unless `index < n`.
    pub fn validate_qubit_index(&self, index: usize) -> GateResult<()> {
        if index < self.n {
            Ok(())
        } else {
            debug!(index, n = self.n, "rejected qubit index");
            Err(GateError::InvalidQubitIndex { index, n: self.n })
        }
    }

    /// Fail with [`GateError::InvalidGateArguments`] unless
    /// `control != target`.
    pub fn validate_distinct(control: usize, target: usize) -> GateResult<()> {
        if control != target {
            Ok(())
        } else {
            debug!(index = control, "rejected two-qubit gate on a single qubit");
            Err(GateError::InvalidGateArguments { index: control })
        }
    }

    fn validate_pair(&self, control: usize, target: usize) -> GateResult<()> {
        self.validate_qubit_index(control)?;
        self.validate_qubit_index(target)?;
        Self::validate_distinct(control, target)
    }

    /// Check that `gate` could be applied without changing anything.
    pub fn validate_gate(&self, gate: Gate) -> GateResult<()> {
        match gate {
            Gate::H(k)
            | Gate::X(k)
            | Gate::Y(k)
            | Gate::Z(k)
            | Gate::S(k)
            => self.validate_qubit_index(k),
            Gate::CX(a, b)
            | Gate::CZ(a, b)
            | Gate::Swap(a, b)
            => self.validate_pair(a, b),
        }
    }

    // each gate below reads every word it needs into locals before writing
    // any of them back

    fn apply_h_unchecked(&mut self, k: usize) -> &mut Self {
        let n = self.n;
        let (z, x, r)
            = self.cols.multi_slice_mut(
                (s![k, ..], s![n + k, ..], s![2 * n, ..]));
        nd::Zip::from(z).and(x).and(r)
            .for_each(|z_k, x_k, r| {
                let (zk, xk) = (*z_k, *x_k);
                *r ^= zk & xk;
                *z_k = xk;
                *x_k = zk;
            });
        self
    }

    fn apply_s_unchecked(&mut self, k: usize) -> &mut Self {
        let n = self.n;
        let (z, x, r)
            = self.cols.multi_slice_mut(
                (s![k, ..], s![n + k, ..], s![2 * n, ..]));
        nd::Zip::from(z).and(x).and(r)
            .for_each(|z_k, x_k, r| {
                let (zk, xk) = (*z_k, *x_k);
                *r ^= zk & xk;
                *z_k = zk ^ xk;
            });
        self
    }

    fn apply_x_unchecked(&mut self, k: usize) -> &mut Self {
        let n = self.n;
        let (z, r) = self.cols.multi_slice_mut((s![k, ..], s![2 * n, ..]));
        nd::Zip::from(z).and(r)
            .for_each(|z_k, r| { *r ^= *z_k; });
        self
    }

    fn apply_y_unchecked(&mut self, k: usize) -> &mut Self {
        let n = self.n;
        let (z, x, r)
            = self.cols.multi_slice_mut(
                (s![k, ..], s![n + k, ..], s![2 * n, ..]));
        nd::Zip::from(z).and(x).and(r)
            .for_each(|z_k, x_k, r| { *r ^= *z_k ^ *x_k; });
        self
    }

    fn apply_z_unchecked(&mut self, k: usize) -> &mut Self {
        let n = self.n;
        let (x, r) = self.cols.multi_slice_mut((s![n + k, ..], s![2 * n, ..]));
        nd::Zip::from(x).and(r)
            .for_each(|x_k, r| { *r ^= *x_k; });
        self
    }

    fn apply_cx_unchecked(&mut self, c: usize, t: usize) -> &mut Self {
        let n = self.n;
        let (z_c, z_t, x_c, x_t, r)
            = self.cols.multi_slice_mut((
                s![c, ..],
                s![t, ..],
                s![n + c, ..],
                s![n + t, ..],
                s![2 * n, ..],
            ));
        nd::Zip::from(z_c).and(z_t).and(x_c).and(x_t).and(r)
            .for_each(|z_c, z_t, x_c, x_t, r| {
                let (zc, zt, xc, xt) = (*z_c, *z_t, *x_c, *x_t);
                // padding bits of `!(xt ^ zc)` are masked by `xc & zt`
                *r ^= xc & zt & !(xt ^ zc);
                *x_t = xt ^ xc;
                *z_c = zc ^ zt;
            });
        self
    }

    fn apply_cz_unchecked(&mut self, c: usize, t: usize) -> &mut Self {
        self.apply_h_unchecked(t)
            .apply_cx_unchecked(c, t)
            .apply_h_unchecked(t)
    }

    fn apply_swap_unchecked(&mut self, a: usize, b: usize) -> &mut Self {
        let n = self.n;
        let (z_a, z_b, x_a, x_b)
            = self.cols.multi_slice_mut((
                s![a, ..],
                s![b, ..],
                s![n + a, ..],
                s![n + b, ..],
            ));
        nd::Zip::from(z_a).and(z_b).and(x_a).and(x_b)
            .for_each(|z_a, z_b, x_a, x_b| {
                std::mem::swap(z_a, z_b);
                std::mem::swap(x_a, x_b);
            });
        self
    }

    fn apply_gate_unchecked(&mut self, gate: Gate) -> &mut Self {
        trace!(%gate, "apply");
        match gate {
            Gate::H(k) => self.apply_h_unchecked(k),
            Gate::X(k) => self.apply_x_unchecked(k),
            Gate::Y(k) => self.apply_y_unchecked(k),
            Gate::Z(k) => self.apply_z_unchecked(k),
            Gate::S(k) => self.apply_s_unchecked(k),
            Gate::CX(a, b) => self.apply_cx_unchecked(a, b),
            Gate::CZ(a, b) => self.apply_cz_unchecked(a, b),
            Gate::Swap(a, b) => self.apply_swap_unchecked(a, b),
        }
    }

    /// Apply a Hadamard gate to the `k`-th qubit (X ↔ Z, Y → −Y).
    pub fn apply_h(&mut self, k: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::H(k))
    }

    /// Apply an S gate (= Z(π/2)) to the `k`-th qubit (X → Y, Y → −X).
    pub fn apply_s(&mut self, k: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::S(k))
    }

    /// Apply an X gate to the `k`-th qubit.
    pub fn apply_x(&mut self, k: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::X(k))
    }

    /// Apply a Y gate to the `k`-th qubit.
    pub fn apply_y(&mut self, k: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::Y(k))
    }

    /// Apply a Z gate to the `k`-th qubit.
    pub fn apply_z(&mut self, k: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::Z(k))
    }

    /// Apply a CNOT gate with control `c` and target `t`.
    pub fn apply_cx(&mut self, c: usize, t: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::CX(c, t))
    }

    /// Apply a CZ gate with control `c` and target `t`, as
    /// H<sub>*t*</sub> CX<sub>*ct*</sub> H<sub>*t*</sub>.
    pub fn apply_cz(&mut self, c: usize, t: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::CZ(c, t))
    }

    /// Swap qubits `a` and `b`.
    pub fn apply_swap(&mut self, a: usize, b: usize) -> GateResult<&mut Self> {
        self.apply_gate(Gate::Swap(a, b))
    }

    /// Perform the action of a gate.
    ///
    /// Fails without modifying `self` if any qubit index is out of bounds or a
    /// two-qubit gate is given the same index twice.
    pub fn apply_gate(&mut self, gate: Gate) -> GateResult<&mut Self> {
        self.validate_gate(gate)?;
        Ok(self.apply_gate_unchecked(gate))
    }

    /// Perform a series of gates.
    ///
    /// Every gate is validated before any is applied, so on failure `self` is
    /// left unchanged.
    pub fn apply_circuit<'a, I>(&mut self, gates: I) -> GateResult<&mut Self>
    where I: IntoIterator<Item = &'a Gate>
    {
        let gates: Vec<Gate> = gates.into_iter().copied().collect();
        gates.iter()
            .try_for_each(|g| self.validate_gate(*g))?;
        gates.into_iter()
            .for_each(|g| { self.apply_gate_unchecked(g); });
        Ok(self)
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stabilizers: [{}]", self.stabilizers().iter().join(", "))?;
        writeln!(f)?;
        write!(f, "Destabilizers: [{}]", self.destabilizers().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(ps: &[NPauli]) -> Vec<String> {
        ps.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn identity_layout() {
        let tab = Tableau::new(3).unwrap();
        let expected = nd::Array2::from_shape_fn((6, 7), |(i, j)| {
            u8::from(i == j && j < 6)
        });
        assert_eq!(tab.as_array(), expected);
        assert_eq!(strings(&tab.stabilizers()), ["+ZII", "+IZI", "+IIZ"]);
        assert_eq!(strings(&tab.destabilizers()), ["+XII", "+IXI", "+IIX"]);
        assert!(tab.is_symplectic());
    }

    #[test]
    fn zero_qubits_rejected() {
        assert_eq!(
            Tableau::new(0),
            Err(MalformedTableau { rows: 0, cols: 1 }),
        );
    }

    #[test]
    fn oversized_rejected() {
        assert_eq!(
            Tableau::new(usize::MAX),
            Err(MalformedTableau { rows: usize::MAX, cols: usize::MAX }),
        );
        let n = usize::MAX / 2;
        assert_eq!(
            Tableau::new(n),
            Err(MalformedTableau { rows: 2 * n, cols: 2 * n + 1 }),
        );
    }

    #[test]
    fn bad_shapes_rejected() {
        let odd: nd::Array2<u8> = nd::Array2::zeros((3, 4));
        assert_eq!(
            Tableau::from_array(&odd),
            Err(MalformedTableau { rows: 3, cols: 4 }),
        );
        let wide: nd::Array2<bool> = nd::Array2::from_elem((2, 4), false);
        assert!(Tableau::from_array(&wide).is_err());
        let ragged: Vec<Vec<u8>> = vec![vec![1, 0, 0], vec![0, 1]];
        assert_eq!(
            Tableau::from_rows(&ragged),
            Err(MalformedTableau { rows: 2, cols: 3 }),
        );
    }

    #[test]
    fn element_types_coerce() {
        let ints = nd::array![[1_i64, 0, 0], [0, 7, 0]];
        let floats = nd::array![[1.0_f64, 0.0, 0.0], [0.0, 0.5, 0.0]];
        let bools = nd::array![[true, false, false], [false, true, false]];
        let a = Tableau::from_array(&ints).unwrap();
        assert_eq!(a, Tableau::from_array(&floats).unwrap());
        assert_eq!(a, Tableau::from_array(&bools).unwrap());
        assert_eq!(a, Tableau::new(1).unwrap());
    }

    #[test]
    fn from_paulis_matches_rows() {
        let stabs = vec![
            NPauli::new(true, [Pauli::X, Pauli::Y]),
            NPauli::new(false, [Pauli::I, Pauli::Z]),
        ];
        let destabs = vec![
            NPauli::new(false, [Pauli::Z, Pauli::I]),
            NPauli::new(false, [Pauli::I, Pauli::X]),
        ];
        let tab = Tableau::from_paulis(&stabs, &destabs).unwrap();
        assert_eq!(tab.stabilizers(), stabs);
        assert_eq!(tab.destabilizers(), destabs);
        assert_eq!(tab.phase(0), Some(true));
        assert_eq!(tab.phase(1), Some(false));
        assert_eq!(tab.phase(4), None);

        let short = vec![NPauli::identity(2)];
        assert_eq!(
            Tableau::from_paulis(&short, &destabs),
            Err(MalformedTableau { rows: 3, cols: 3 }),
        );
        assert_eq!(
            Tableau::from_paulis(&stabs, &short),
            Err(MalformedTableau { rows: 3, cols: 5 }),
        );
    }

    #[test]
    fn from_paulis_reports_generator_count() {
        let stabs = vec![NPauli::identity(2), NPauli::identity(3)];
        let destabs = vec![NPauli::identity(2), NPauli::identity(2)];
        assert_eq!(
            Tableau::from_paulis(&stabs, &destabs),
            Err(MalformedTableau { rows: 4, cols: 5 }),
        );
        assert_eq!(
            Tableau::from_paulis(&destabs, &stabs),
            Err(MalformedTableau { rows: 4, cols: 5 }),
        );
    }

    #[test]
    fn hadamard_swaps_and_signs() {
        // stabilizer Y picks up a sign under H
        let mut tab = Tableau::from_rows(&[[1_u8, 1, 0], [0, 1, 0]]).unwrap();
        tab.apply_h(0).unwrap();
        assert_eq!(tab.row(0).unwrap().to_string(), "-Y");
        assert_eq!(tab.row(1).unwrap().to_string(), "+Z");
    }

    #[test]
    fn s_cycles_x_to_y() {
        let mut tab = Tableau::new(1).unwrap();
        tab.apply_s(0).unwrap();
        assert_eq!(tab.row(1).unwrap().to_string(), "+Y");
        tab.apply_s(0).unwrap();
        assert_eq!(tab.row(1).unwrap().to_string(), "-X");
        assert_eq!(tab.row(0).unwrap().to_string(), "+Z");
    }

    #[test]
    fn paulis_flip_signs() {
        let mut tab = Tableau::new(1).unwrap();
        tab.apply_x(0).unwrap();
        assert_eq!(tab.to_string(), "Stabilizers: [-Z]\nDestabilizers: [+X]");
        tab.apply_z(0).unwrap();
        assert_eq!(tab.to_string(), "Stabilizers: [-Z]\nDestabilizers: [-X]");
        tab.apply_y(0).unwrap();
        assert_eq!(tab.to_string(), "Stabilizers: [+Z]\nDestabilizers: [+X]");
    }

    #[test]
    fn cx_on_identity() {
        let mut tab = Tableau::new(2).unwrap();
        tab.apply_cx(0, 1).unwrap();
        assert_eq!(strings(&tab.stabilizers()), ["+ZI", "+ZZ"]);
        assert_eq!(strings(&tab.destabilizers()), ["+XX", "+IX"]);
        assert!(tab.is_symplectic());
    }

    #[test]
    fn cx_sign_from_snapshot() {
        // X_c Z_t -> -Y_c Y_t under CNOT: the sign must come from the
        // pre-update columns
        let mut tab = Tableau::from_rows(&[
            [0_u8, 1, 1, 0, 0],
            [1, 0, 0, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 1, 0, 0],
        ]).unwrap();
        tab.apply_cx(0, 1).unwrap();
        assert_eq!(tab.row(0).unwrap().to_string(), "-YY");
    }

    #[test]
    fn swap_exchanges_qubits() {
        let mut tab = Tableau::new(3).unwrap();
        tab.apply_h(0).unwrap()
            .apply_s(0).unwrap()
            .apply_swap(0, 2).unwrap();
        assert_eq!(strings(&tab.stabilizers()), ["+IIY", "+IZI", "+ZII"]);
        assert_eq!(strings(&tab.destabilizers()), ["+IIZ", "+IXI", "+XII"]);
    }

    #[test]
    fn get_bounds() {
        let tab = Tableau::new(2).unwrap();
        assert_eq!(tab.get(0, 0), Some(true));
        assert_eq!(tab.get(3, 3), Some(true));
        assert_eq!(tab.get(3, 4), Some(false));
        assert_eq!(tab.get(4, 0), None);
        assert_eq!(tab.get(0, 5), None);
        assert!(tab.row(4).is_none());
    }

    #[test]
    fn many_qubits_cross_word_boundaries() {
        // 2n = 80 rows spans three words per column
        let n = 40;
        let mut tab = Tableau::new(n).unwrap();
        tab.apply_h(35).unwrap()
            .apply_cx(35, 2).unwrap()
            .apply_s(2).unwrap();
        assert!(tab.is_symplectic());
        assert_eq!(tab.as_array().dim(), (80, 81));
        let d35 = tab.row(n + 35).unwrap();
        assert_eq!(d35.weight(), 1);
        assert_eq!(d35.ops[35], Pauli::Z);
    }

    #[test]
    fn rejected_gates_leave_state() {
        let mut tab = Tableau::new(2).unwrap();
        tab.apply_h(1).unwrap();
        let before = tab.clone();
        assert_eq!(
            tab.apply_h(2).unwrap_err(),
            GateError::InvalidQubitIndex { index: 2, n: 2 },
        );
        assert_eq!(
            tab.apply_cx(1, 1).unwrap_err(),
            GateError::InvalidGateArguments { index: 1 },
        );
        // range is checked before distinctness
        assert_eq!(
            tab.apply_cz(5, 5).unwrap_err(),
            GateError::InvalidQubitIndex { index: 5, n: 2 },
        );
        let circuit = [Gate::H(0), Gate::S(1), Gate::Swap(0, 3)];
        assert!(tab.apply_circuit(&circuit).is_err());
        assert_eq!(tab, before);
    }
}
