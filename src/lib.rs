//! Small-ring and aromaticity descriptors for molecular graphs.
//!
//! Given a Kekulé molecule, [`SmallRingDescriptor`] finds the ring blocks,
//! every ring with 3 to 7 atoms, which of those rings are aromatic, and
//! reports them as the 11-value vector named by [`SmallRingCounts::NAMES`].

pub mod aromaticity;
pub mod atom;
pub mod bond;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod graph;
pub mod mol;
pub mod ring_blocks;
pub mod rings;
pub mod traits;

pub use aromaticity::AromaticFlags;
pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use descriptor::{
    apply_aromaticity, small_ring_counts, RingAnalysis, SmallRingCounts, SmallRingDescriptor,
};
pub use error::RingError;
pub use graph::MolGraph;
pub use mol::Mol;
pub use rings::{Ring, SearchLimits, MAX_RING_SIZE, MIN_RING_SIZE};
pub use traits::{HasAtomicNum, HasBondOrder, HasFormalCharge};
