//! Random Clifford circuits in a brickwork pattern on a 1D chain.

use rand::Rng;
use crate::gate::Gate;

/// Generate `depth` layers of a random brickwork circuit on `n` qubits.
///
/// Each layer consists of
/// 1. a random single-qubit gate (*H*, *X*, *Y*, *Z*, *S*) on each qubit
/// 1. a random two-qubit gate (CX in either direction, CZ, or Swap) on
/// adjacent pairs of qubits, alternating between left and right neighbors on
/// each layer
pub fn random_circuit<R>(n: usize, depth: usize, rng: &mut R) -> Vec<Gate>
where R: Rng + ?Sized
{
    let mut gates: Vec<Gate> = Vec::new();
    for d in 0..depth {
        (0..n).for_each(|k| { gates.push(Gate::sample_single(k, rng)); });
        Pairs::new(d % 2 == 1, n).for_each(|(a, b)| {
            gates.push(Gate::sample_pair(a, b, rng));
        });
    }
    gates
}

struct Pairs {
    iter: std::ops::Range<usize>
}

impl Pairs {
    fn new(offs: bool, stop: usize) -> Self {
        Self { iter: if offs { 1 } else { 0 } .. stop }
    }
}

impl Iterator for Pairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().zip(self.iter.next())
    }
}
