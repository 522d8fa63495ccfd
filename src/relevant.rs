use crate::basis::{greedy_select, is_zero, reduce, try_add_to_basis};
use crate::cycle::Cycle;
use crate::initial::InitialCycles;

/// The union of all minimum cycle bases. A candidate of weight `w` is
/// relevant exactly when it is linearly independent of the span of all
/// strictly shorter candidates: some minimum basis can then be completed
/// around it. Computed as a sweep over the weight tiers of the pool.
#[derive(Debug, Clone)]
pub struct RelevantCycles {
    cycles: Vec<Cycle>,
}

impl RelevantCycles {
    pub fn new(initial: &InitialCycles) -> Self {
        let pool = initial.cycles();
        let mut relevant = Vec::new();
        // span of every candidate strictly shorter than the current tier
        let mut shorter: Vec<Vec<u64>> = Vec::new();

        let mut tier_start = 0;
        while tier_start < pool.len() {
            let weight = pool[tier_start].weight();
            let mut tier_end = tier_start;
            while tier_end < pool.len() && pool[tier_end].weight() == weight {
                tier_end += 1;
            }

            for cycle in &pool[tier_start..tier_end] {
                let residue = reduce(&shorter, initial.edge_vector(cycle));
                if !is_zero(&residue) {
                    relevant.push(cycle.clone());
                }
            }
            // close the tier: its members now count as strictly shorter
            for cycle in &pool[tier_start..tier_end] {
                try_add_to_basis(&mut shorter, initial.edge_vector(cycle));
            }
            tier_start = tier_end;
        }

        Self { cycles: relevant }
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn number_of_cycles(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}

/// The intersection of all minimum cycle bases. A basis member is
/// essential when excluding it from the candidate pool makes an equally
/// light basis impossible: the re-run either falls short of the circuit
/// rank or pays a higher total weight.
#[derive(Debug, Clone)]
pub struct EssentialCycles {
    cycles: Vec<Cycle>,
}

impl EssentialCycles {
    pub fn new(initial: &InitialCycles) -> Self {
        let reference = greedy_select(initial, None);
        let base_weight: usize = reference.iter().map(Cycle::weight).sum();
        let rank = initial.rank();

        let mut essential = Vec::new();
        for cycle in &reference {
            let alternative = greedy_select(initial, Some(cycle));
            let alt_weight: usize = alternative.iter().map(Cycle::weight).sum();
            if alternative.len() < rank || alt_weight > base_weight {
                essential.push(cycle.clone());
            }
        }

        Self { cycles: essential }
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn number_of_cycles(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}
