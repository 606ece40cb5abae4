//! Error types for tableau construction and gate application.

use thiserror::Error;

/// Returned when a gate is called with arguments that don't describe a valid
/// operation on the tableau.
///
/// Gates check their arguments before touching any state, so receiving one of
/// these means the tableau is exactly as it was before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum GateError {
    /// A qubit index outside `0..n`.
    #[error("invalid qubit index {index} for a tableau of {n} qubits")]
    InvalidQubitIndex {
        /// The offending index.
        index: usize,
        /// Number of qubits in the tableau.
        n: usize,
    },

    /// A two-qubit gate whose control and target are the same qubit.
    #[error("control and target must be distinct; both were {index}")]
    InvalidGateArguments {
        /// The repeated index.
        index: usize,
    },
}

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// Returned when initial tableau data doesn't have shape `2n × (2n + 1)` for
/// some `n > 0`.
///
/// `rows × cols` is the shape the input would have as a matrix. For ragged
/// rows, `cols` is the length of the first row. For generator lists, `rows` is
/// the total number of generators and `cols` is `2n + 1` where `n` is the
/// number of stabilizers. A requested qubit count too large for `2n + 1` to fit
/// in `usize` is reported as `usize::MAX × usize::MAX`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("malformed tableau: expected shape 2n × (2n + 1) with n > 0, got {rows} × {cols}")]
pub struct MalformedTableau {
    /// Number of rows supplied.
    pub rows: usize,
    /// Number of columns supplied.
    pub cols: usize,
}
