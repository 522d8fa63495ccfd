use crate::cycle::Cycle;
use crate::initial::InitialCycles;

/// Minimum cycle basis (SSSR) selected Horton-style: walk the candidate
/// pool in ascending weight order and keep each cycle whose incidence
/// vector is linearly independent of those already kept, until the
/// circuit rank is reached.
#[derive(Debug, Clone)]
pub struct MinimumCycleBasis {
    cycles: Vec<Cycle>,
}

impl MinimumCycleBasis {
    pub fn new(initial: &InitialCycles) -> Self {
        let cycles = greedy_select(initial, None);
        debug_assert_eq!(cycles.len(), initial.rank(), "candidate pool incomplete");
        Self { cycles }
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn size(&self) -> usize {
        self.cycles.len()
    }

    /// Sum of member weights.
    pub fn total_weight(&self) -> usize {
        self.cycles.iter().map(Cycle::weight).sum()
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}

/// Greedy independent selection over the sorted pool, optionally skipping
/// one candidate. The skip variant answers whether an equally good basis
/// exists without a particular cycle.
pub(crate) fn greedy_select(initial: &InitialCycles, skip: Option<&Cycle>) -> Vec<Cycle> {
    let rank = initial.rank();
    let mut basis: Vec<Vec<u64>> = Vec::with_capacity(rank);
    let mut selected = Vec::with_capacity(rank);

    for cycle in initial.cycles() {
        if selected.len() >= rank {
            break;
        }
        if skip == Some(cycle) {
            continue;
        }
        let bv = initial.edge_vector(cycle);
        if try_add_to_basis(&mut basis, bv) {
            selected.push(cycle.clone());
        }
    }
    selected
}

/// Reduce `candidate` against the basis rows; if a non-zero residue
/// remains, record it and report the candidate as independent.
pub(crate) fn try_add_to_basis(basis: &mut Vec<Vec<u64>>, candidate: Vec<u64>) -> bool {
    let v = reduce(basis, candidate);
    if is_zero(&v) {
        return false;
    }
    basis.push(v);
    true
}

pub(crate) fn reduce(basis: &[Vec<u64>], mut v: Vec<u64>) -> Vec<u64> {
    for row in basis {
        if let Some(p) = leading_bit(row) {
            if v[p / 64] & (1u64 << (p % 64)) != 0 {
                xor_into(&mut v, row);
            }
        }
    }
    v
}

pub(crate) fn is_zero(bv: &[u64]) -> bool {
    bv.iter().all(|&w| w == 0)
}

pub(crate) fn leading_bit(bv: &[u64]) -> Option<usize> {
    for (i, &word) in bv.iter().enumerate() {
        if word != 0 {
            return Some(i * 64 + word.trailing_zeros() as usize);
        }
    }
    None
}

pub(crate) fn xor_into(a: &mut [u64], b: &[u64]) {
    for (aw, bw) in a.iter_mut().zip(b.iter()) {
        *aw ^= *bw;
    }
}
