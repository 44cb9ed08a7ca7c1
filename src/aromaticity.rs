//! Two-phase aromaticity perception over the enumerated small rings.
//!
//! The strict pass only recognises 6-rings with a perfectly alternating
//! Kekulé pattern. The relaxed pass then counts pi electrons, including
//! heteroatom lone pairs, and applies the 4N+2 rule to every ring of size
//! up to 7. Both passes repeat until nothing changes, because marking one
//! ring aromatic relaxes the constraints on the rings fused to it.

use tracing::debug;

use crate::graph::MolGraph;
use crate::rings::{Ring, MAX_RING_SIZE};

/// Perceived aromaticity, indexed by atom and by bond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AromaticFlags {
    pub atoms: Vec<bool>,
    pub bonds: Vec<bool>,
}

impl AromaticFlags {
    pub fn new(atom_count: usize, bond_count: usize) -> Self {
        Self {
            atoms: vec![false; atom_count],
            bonds: vec![false; bond_count],
        }
    }

    /// A ring counts as aromatic when every one of its bonds is.
    pub fn is_ring_aromatic(&self, ring: &Ring) -> bool {
        ring.bonds().iter().all(|&b| self.bonds[b])
    }

    fn mark(&mut self, ring: &Ring) {
        for &a in ring.atoms() {
            self.atoms[a] = true;
        }
        for &b in ring.bonds() {
            self.bonds[b] = true;
        }
    }
}

/// Run the strict pass and then the relaxed pass.
pub fn perceive(graph: &MolGraph, rings: &[Ring]) -> AromaticFlags {
    let mut flags = AromaticFlags::new(graph.atom_count(), graph.bond_count());
    let strict = perceive_strict(graph, rings, &mut flags);
    let relaxed = perceive_relaxed(graph, rings, &mut flags);
    debug!(strict, relaxed, "aromatic rings marked");
    flags
}

/// Mark 6-rings of pi-capable atoms whose bonds alternate double/single.
/// Returns the number of rings marked.
pub fn perceive_strict(graph: &MolGraph, rings: &[Ring], flags: &mut AromaticFlags) -> usize {
    let mut candidates: Vec<&Ring> = rings
        .iter()
        .filter(|ring| {
            ring.len() == 6
                && ring.atoms().iter().all(|&a| graph.is_pi_capable(a))
                && ring
                    .bonds()
                    .iter()
                    .all(|&b| matches!(graph.bond_order(b), 1 | 2))
        })
        .collect();

    let mut marked = 0;
    loop {
        let before = marked;
        candidates.retain(|ring| {
            if alternates(graph, ring, flags, true) || alternates(graph, ring, flags, false) {
                flags.mark(ring);
                marked += 1;
                false
            } else {
                true
            }
        });
        if marked == before {
            return marked;
        }
    }
}

/// Bond `i` must be double when `i` is even (`double_first`) or odd
/// (otherwise). Bonds already aromatic match either way.
fn alternates(graph: &MolGraph, ring: &Ring, flags: &AromaticFlags, double_first: bool) -> bool {
    ring.bonds().iter().enumerate().all(|(i, &b)| {
        let expected = if (i % 2 == 0) == double_first { 2 } else { 1 };
        flags.bonds[b] || graph.bond_order(b) == expected
    })
}

/// Mark rings that close a 4N+2 pi system once lone pairs are counted.
/// Returns the number of rings marked.
pub fn perceive_relaxed(graph: &MolGraph, rings: &[Ring], flags: &mut AromaticFlags) -> usize {
    let mut pending: Vec<&Ring> = rings
        .iter()
        .filter(|ring| ring.len() <= MAX_RING_SIZE && !flags.is_ring_aromatic(ring))
        .collect();

    let mut marked = 0;
    loop {
        let before = marked;
        pending.retain(|ring| {
            if flags.is_ring_aromatic(ring) {
                return false;
            }
            if !is_eligible(graph, ring, flags) {
                return true;
            }
            let (fixed, maybe) = pi_electrons(graph, ring, flags);
            if closes_huckel(fixed, maybe) {
                flags.mark(ring);
                marked += 1;
                false
            } else {
                true
            }
        });
        if marked == before {
            return marked;
        }
    }
}

fn is_eligible(graph: &MolGraph, ring: &Ring, flags: &AromaticFlags) -> bool {
    ring.atoms()
        .iter()
        .all(|&a| graph.is_pi_capable(a) || flags.atoms[a] || graph.lone_electrons(a) >= 2)
        && ring
            .bonds()
            .iter()
            .all(|&b| matches!(graph.bond_order(b), 1 | 2))
}

/// Count ring pi electrons as `(fixed, maybe)`.
///
/// Double bonds and donated lone pairs are fixed. Already-aromatic bonds go
/// to `maybe`: their electrons may belong to a neighbouring ring instead.
/// A lone pair only counts when neither ring bond at its atom is double.
fn pi_electrons(graph: &MolGraph, ring: &Ring, flags: &AromaticFlags) -> (i32, i32) {
    let mut fixed = 0;
    let mut maybe = 0;
    for (i, (&atom, &bond)) in ring.atoms().iter().zip(ring.bonds()).enumerate() {
        if flags.bonds[bond] {
            maybe += 2;
        } else if graph.bond_order(bond) == 2 {
            fixed += 2;
        }

        let (incoming, outgoing) = ring.bonds_at(i);
        if graph.lone_electrons(atom) >= 2
            && graph.bond_order(incoming) != 2
            && graph.bond_order(outgoing) != 2
        {
            fixed += 2;
        }
    }
    (fixed, maybe)
}

/// True if some share of the `maybe` electrons, taken in pairs from all of
/// them down to none, brings the total to 4N+2.
fn closes_huckel(fixed: i32, maybe: i32) -> bool {
    (0..=maybe)
        .rev()
        .step_by(2)
        .any(|m| (fixed + m - 2).rem_euclid(4) == 0)
}
