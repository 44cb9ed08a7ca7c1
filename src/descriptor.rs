//! The small-ring descriptor: ring, aromatic-ring and ring-block counts.

use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::unionfind::UnionFind;
use tracing::{debug, warn};

use crate::aromaticity::{self, AromaticFlags};
use crate::atom::Atom;
use crate::bond::Bond;
use crate::error::RingError;
use crate::graph::MolGraph;
use crate::mol::Mol;
use crate::ring_blocks::{block_count, ring_blocks};
use crate::rings::{small_rings, Ring, SearchLimits, MIN_RING_SIZE};
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge};

/// Largest ring size reported in the descriptor vector. Enumeration stops at
/// [`MAX_RING_SIZE`](crate::rings::MAX_RING_SIZE), so `nRings8` and
/// `nRings9` are always zero.
pub const MAX_REPORTED_RING_SIZE: usize = 9;

const SIZE_SLOTS: usize = MAX_REPORTED_RING_SIZE - MIN_RING_SIZE + 1;

/// The 11-value small-ring descriptor vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SmallRingCounts {
    pub n_small_rings: u32,
    pub n_arom_rings: u32,
    pub n_ring_blocks: u32,
    pub n_arom_blocks: u32,
    /// Ring counts for sizes 3 through 9.
    pub n_rings: [u32; SIZE_SLOTS],
}

impl SmallRingCounts {
    pub const NAMES: [&'static str; 11] = [
        "nSmallRings",
        "nAromRings",
        "nRingBlocks",
        "nAromBlocks",
        "nRings3",
        "nRings4",
        "nRings5",
        "nRings6",
        "nRings7",
        "nRings8",
        "nRings9",
    ];

    /// Values in the order of [`Self::NAMES`].
    pub fn values(&self) -> [u32; 11] {
        let mut out = [0u32; 11];
        out[0] = self.n_small_rings;
        out[1] = self.n_arom_rings;
        out[2] = self.n_ring_blocks;
        out[3] = self.n_arom_blocks;
        out[4..].copy_from_slice(&self.n_rings);
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> {
        Self::NAMES.into_iter().zip(self.values())
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.iter().find(|&(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn rings_of_size(&self, size: usize) -> u32 {
        size.checked_sub(MIN_RING_SIZE)
            .and_then(|slot| self.n_rings.get(slot))
            .copied()
            .unwrap_or(0)
    }
}

/// Everything ring perception derives for one molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingAnalysis {
    /// Ring-block id per atom, `0` for acyclic atoms.
    pub ring_blocks: Vec<u32>,
    pub rings: Vec<Ring>,
    pub aromatic: AromaticFlags,
    pub counts: SmallRingCounts,
}

/// Calculator for [`SmallRingCounts`].
///
/// Holds only configuration; every call builds and drops its own working
/// arrays, so one value can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use ringcrab::{Atom, Bond, BondOrder, Mol, SmallRingDescriptor};
///
/// let mut mol = Mol::new();
/// let atoms: Vec<_> = (0..6).map(|_| mol.add_atom(Atom::new(6))).collect();
/// for i in 0..6 {
///     let order = if i % 2 == 0 { BondOrder::Double } else { BondOrder::Single };
///     mol.add_bond(atoms[i], atoms[(i + 1) % 6], Bond::new(order));
/// }
///
/// let counts = SmallRingDescriptor::default().calculate(&mol).unwrap();
/// assert_eq!(counts.values(), [1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmallRingDescriptor {
    limits: SearchLimits,
}

impl SmallRingDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn analyze<A, B>(&self, mol: &Mol<A, B>) -> Result<RingAnalysis, RingError>
    where
        A: HasAtomicNum + HasFormalCharge,
        B: HasBondOrder,
    {
        let graph = MolGraph::build(mol);
        let blocks = ring_blocks(&graph)?;
        let rings = small_rings(&graph, &blocks, &self.limits)?;
        let aromatic = aromaticity::perceive(&graph, &rings);

        let mut counts = SmallRingCounts {
            n_small_rings: rings.len() as u32,
            n_ring_blocks: block_count(&blocks),
            n_arom_blocks: aromatic_block_count(&graph, &aromatic),
            ..SmallRingCounts::default()
        };
        for ring in &rings {
            if let Some(slot) = counts.n_rings.get_mut(ring.len() - MIN_RING_SIZE) {
                *slot += 1;
            }
            if aromatic.is_ring_aromatic(ring) {
                counts.n_arom_rings += 1;
            }
        }
        debug!(
            atoms = graph.atom_count(),
            rings = counts.n_small_rings,
            aromatic_rings = counts.n_arom_rings,
            blocks = counts.n_ring_blocks,
            "small ring analysis"
        );

        Ok(RingAnalysis {
            ring_blocks: blocks,
            rings,
            aromatic,
            counts,
        })
    }

    pub fn calculate<A, B>(&self, mol: &Mol<A, B>) -> Result<SmallRingCounts, RingError>
    where
        A: HasAtomicNum + HasFormalCharge,
        B: HasBondOrder,
    {
        self.analyze(mol).map(|analysis| analysis.counts)
    }

    /// Like [`calculate`](Self::calculate), but an analysis failure yields
    /// an all-zero vector instead of an error.
    pub fn calculate_or_zero<A, B>(&self, mol: &Mol<A, B>) -> SmallRingCounts
    where
        A: HasAtomicNum + HasFormalCharge,
        B: HasBondOrder,
    {
        self.calculate(mol).unwrap_or_else(|e| {
            warn!(error = %e, "small ring analysis failed; reporting zeros");
            SmallRingCounts::default()
        })
    }
}

/// [`SmallRingDescriptor::calculate`] with default limits.
pub fn small_ring_counts<A, B>(mol: &Mol<A, B>) -> Result<SmallRingCounts, RingError>
where
    A: HasAtomicNum + HasFormalCharge,
    B: HasBondOrder,
{
    SmallRingDescriptor::default().calculate(mol)
}

/// Connected components of the aromatic-bond subgraph that contain at least
/// one bond.
fn aromatic_block_count(graph: &MolGraph, flags: &AromaticFlags) -> u32 {
    let n = graph.atom_count();
    let mut components = UnionFind::new(n);
    let mut touched = vec![false; n];
    for a in 0..n {
        for (&nb, &b) in graph.neighbors(a).iter().zip(graph.incident_bonds(a)) {
            if flags.bonds[b] {
                components.union(a, nb);
                touched[a] = true;
            }
        }
    }
    (0..n)
        .filter(|&a| touched[a] && components.find(a) == a)
        .count() as u32
}

/// Overwrite the aromaticity flags of `mol` with a perception result.
///
/// `analysis` must come from the same molecule; atoms or bonds it does not
/// cover are set non-aromatic.
pub fn apply_aromaticity(mol: &mut Mol<Atom, Bond>, analysis: &RingAnalysis) {
    for i in 0..mol.atom_count() {
        mol.atom_mut(NodeIndex::new(i)).is_aromatic =
            analysis.aromatic.atoms.get(i).copied().unwrap_or(false);
    }
    for i in 0..mol.bond_count() {
        mol.bond_mut(EdgeIndex::new(i)).is_aromatic =
            analysis.aromatic.bonds.get(i).copied().unwrap_or(false);
    }
}
