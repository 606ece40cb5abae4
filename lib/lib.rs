//! Tools for simulating registers of qubits under Clifford-group operations
//! using the stabilizer/destabilizer tableau formalism.
//!
//! Assumes all operations will be limited to Clifford-group transformations
//! (i.e. Hadamard, Pauli, singly controlled Pauli, or phase rotations that are
//! integer multiples of π/2).

pub mod error;
pub mod gate;
pub mod tableau;
pub mod circuit;
pub mod legacy;

pub use error::{ GateError, GateResult, MalformedTableau };
pub use gate::{ Gate, NPauli, Pauli };
pub use tableau::Tableau;
