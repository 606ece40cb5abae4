//! Free-function gates over bare `2n × (2n + 1)` matrices.
//!
//! Each function takes a matrix in the layout described in
//! [`tableau`][crate::tableau], applies a single gate via [`Tableau`], and
//! returns the updated matrix as `u8`s. Input elements are read the same way as
//! in [`Tableau::from_array`], so `bool`, integer and float matrices are all
//! accepted. Prefer [`Tableau`] directly; these exist for callers that pass
//! matrices around.
//!
//! Unlike plain matrix updates, these check their input: the shape must be
//! `2n × (2n + 1)` and the qubit indices must be valid for `n`.
//!
//! *All functions panic if the matrix is malformed or the gate arguments are
//! invalid.*

#![allow(non_snake_case)]

use ndarray as nd;
use crate::{ gate::Gate, tableau::Tableau };

fn apply<S, T>(name: &str, tableau: &nd::ArrayBase<S, nd::Ix2>, gate: Gate)
    -> nd::Array2<u8>
where
    S: nd::Data<Elem = T>,
    T: Copy + PartialEq + Default,
{
    let mut tab = match Tableau::from_array(tableau) {
        Ok(tab) => tab,
        Err(err) => panic!("{}: {}", name, err),
    };
    if let Err(err) = tab.apply_gate(gate) {
        panic!("{}: {}", name, err);
    }
    tab.as_array()
}

/// Apply a Hadamard gate to qubit `index`.
pub fn Hadamard<S, T>(tableau: nd::ArrayBase<S, nd::Ix2>, index: usize)
    -> nd::Array2<u8>
where
    S: nd::Data<Elem = T>,
    T: Copy + PartialEq + Default,
{
    apply("Hadamard", &tableau, Gate::H(index))
}

/// Apply an S gate to qubit `index`.
pub fn Phase<S, T>(tableau: nd::ArrayBase<S, nd::Ix2>, index: usize)
    -> nd::Array2<u8>
where
    S: nd::Data<Elem = T>,
    T: Copy + PartialEq + Default,
{
    apply("Phase", &tableau, Gate::S(index))
}

/// Apply a CNOT gate from `control` to `target`.
pub fn CNOT<S, T>(
    tableau: nd::ArrayBase<S, nd::Ix2>,
    control: usize,
    target: usize,
) -> nd::Array2<u8>
where
    S: nd::Data<Elem = T>,
    T: Copy + PartialEq + Default,
{
    apply("CNOT", &tableau, Gate::CX(control, target))
}
