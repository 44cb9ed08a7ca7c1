//! Enumeration of every small ring inside each ring block.
//!
//! Unlike an SSSR, the result holds *all* chordless cycles of size
//! [`MIN_RING_SIZE`]..=[`MAX_RING_SIZE`], so naphthalene gives two rings and
//! norbornane gives three (two 5-rings and the 6-ring around the bridge).
//!
//! The search is exhaustive: for heavily bridged blocks its cost grows
//! exponentially with block size. [`SearchLimits`] caps the number of path
//! extensions so such inputs fail with
//! [`RingError::SearchBudgetExceeded`] instead of running unbounded.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::RingError;
use crate::graph::MolGraph;

pub const MIN_RING_SIZE: usize = 3;
pub const MAX_RING_SIZE: usize = 7;

/// Bounds on the exhaustive ring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of times a partial path may be extended by one atom,
    /// summed over every ring size and start atom.
    pub max_path_extensions: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_path_extensions: 1_000_000,
        }
    }
}

/// A simple cycle in canonical form.
///
/// `atoms` starts at the smallest atom index and runs in the direction whose
/// second atom is smaller. `bonds[i]` joins `atoms[i]` and
/// `atoms[(i + 1) % len]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ring {
    atoms: Vec<usize>,
    bonds: Vec<usize>,
}

impl Ring {
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[usize] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.atoms.contains(&atom)
    }

    /// The two ring bonds meeting at position `i`: the one arriving from
    /// the previous atom and the one leaving towards the next.
    pub fn bonds_at(&self, i: usize) -> (usize, usize) {
        let len = self.bonds.len();
        (self.bonds[(i + len - 1) % len], self.bonds[i])
    }
}

/// Rotate a cycle to start at its smallest atom, then orient it so the
/// second atom is the smaller of that atom's two ring neighbours.
pub fn canonical_ring(path: &[usize]) -> Vec<usize> {
    let len = path.len();
    let Some(first) = (0..len).min_by_key(|&i| path[i]) else {
        return Vec::new();
    };
    let next = path[(first + 1) % len];
    let prev = path[(first + len - 1) % len];
    if prev < next {
        (0..len).map(|i| path[(first + len - i) % len]).collect()
    } else {
        (0..len).map(|i| path[(first + i) % len]).collect()
    }
}

/// Find every ring of size 3..=7 whose atoms share a ring block.
///
/// Rings are ordered by size, then by the start atom that first reached
/// them. `blocks` must come from [`ring_blocks`](crate::ring_blocks::ring_blocks)
/// on the same graph.
pub fn small_rings(
    graph: &MolGraph,
    blocks: &[u32],
    limits: &SearchLimits,
) -> Result<Vec<Ring>, RingError> {
    let mut search = RingSearch {
        graph,
        blocks,
        limits,
        extensions: 0,
        seen: HashSet::new(),
        rings: Vec::new(),
    };
    for size in MIN_RING_SIZE..=MAX_RING_SIZE {
        for start in 0..graph.atom_count() {
            if blocks[start] != 0 {
                search.extend_from(start, size)?;
            }
        }
    }
    debug!(
        rings = search.rings.len(),
        extensions = search.extensions,
        "small ring search finished"
    );
    Ok(search.rings)
}

struct RingSearch<'a> {
    graph: &'a MolGraph,
    blocks: &'a [u32],
    limits: &'a SearchLimits,
    extensions: usize,
    seen: HashSet<Vec<usize>>,
    rings: Vec<Ring>,
}

impl RingSearch<'_> {
    /// Depth-first walk over all paths of `size` atoms from `start`, kept
    /// inside `start`'s block. `cursor[k]` is the next neighbour of
    /// `path[k]` to try.
    fn extend_from(&mut self, start: usize, size: usize) -> Result<(), RingError> {
        let block = self.blocks[start];
        let mut path = vec![start];
        let mut cursor = vec![0usize];

        while let Some(&pos) = cursor.last() {
            if path.len() == size {
                self.accept(&path)?;
                path.pop();
                cursor.pop();
                continue;
            }

            let tail = path[path.len() - 1];
            let neighbors = self.graph.neighbors(tail);
            let step = neighbors[pos..]
                .iter()
                .position(|&nb| self.blocks[nb] == block && !path.contains(&nb));

            match step {
                Some(k) => {
                    self.extensions += 1;
                    if self.extensions > self.limits.max_path_extensions {
                        return Err(RingError::SearchBudgetExceeded {
                            limit: self.limits.max_path_extensions,
                        });
                    }
                    let depth = cursor.len() - 1;
                    cursor[depth] = pos + k + 1;
                    path.push(neighbors[pos + k]);
                    cursor.push(0);
                }
                None => {
                    path.pop();
                    cursor.pop();
                }
            }
        }
        Ok(())
    }

    fn accept(&mut self, path: &[usize]) -> Result<(), RingError> {
        let first = path[0];
        let last = path[path.len() - 1];
        if self.graph.bond_between(last, first).is_none() {
            return Ok(());
        }

        // A member with a third in-path neighbour means the path cuts across
        // a bridge.
        let chordless = path.iter().all(|&a| {
            self.graph
                .neighbors(a)
                .iter()
                .filter(|&&nb| path.contains(&nb))
                .count()
                == 2
        });
        if !chordless {
            return Ok(());
        }

        let atoms = canonical_ring(path);
        if self.seen.contains(&atoms) {
            return Ok(());
        }

        let len = atoms.len();
        let bonds = (0..len)
            .map(|i| {
                let (a, b) = (atoms[i], atoms[(i + 1) % len]);
                self.graph
                    .bond_between(a, b)
                    .ok_or(RingError::MissingRingBond { a, b })
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!(?atoms, "found ring");
        self.seen.insert(atoms.clone());
        self.rings.push(Ring { atoms, bonds });
        Ok(())
    }
}
