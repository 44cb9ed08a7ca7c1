//! Partition of atoms into ring blocks.
//!
//! A ring block is a maximal set of atoms joined by ring-containing paths.
//! Fused, bridged and spiro systems all collapse into one block; atoms on
//! no cycle get block `0`.

use crate::error::RingError;
use crate::graph::MolGraph;

/// Assign a ring-block id to every atom: `0` for acyclic atoms, `1..=K` for
/// the `K` ring blocks, numbered in order of their lowest atom index.
///
/// Walks the graph depth-first with an explicit path stack. Just before an
/// atom is visited, every already-visited neighbour other than the path tail
/// closes a cycle, and every atom on that cycle is merged into one block.
pub fn ring_blocks(graph: &MolGraph) -> Result<Vec<u32>, RingError> {
    let n = graph.atom_count();
    // Working labels are `atom + 1` of the atom that closed the cycle.
    let mut label = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut path: Vec<usize> = Vec::with_capacity(n);

    loop {
        let next = match path.last() {
            None => match (0..n).find(|&a| !visited[a]) {
                Some(start) => Some(start),
                None => break,
            },
            Some(&tail) => graph.neighbors(tail).iter().copied().find(|&a| !visited[a]),
        };

        let Some(current) = next else {
            path.pop();
            continue;
        };

        if path.len() >= 2 {
            let tail = path[path.len() - 1];
            for &join in graph.neighbors(current) {
                if join == tail || !visited[join] {
                    continue;
                }
                let start = path
                    .iter()
                    .rposition(|&a| a == join)
                    .ok_or(RingError::DetachedClosure {
                        atom: current,
                        join,
                    })?;
                let id = current + 1;
                for &member in path[start..].iter().chain(std::iter::once(&current)) {
                    merge(&mut label, member, id);
                }
            }
        }

        visited[current] = true;
        path.push(current);
    }

    Ok(renumber(&label))
}

fn merge(label: &mut [usize], atom: usize, id: usize) {
    let old = label[atom];
    if old == 0 {
        label[atom] = id;
    } else if old != id {
        for l in label.iter_mut().filter(|l| **l == old) {
            *l = id;
        }
    }
}

fn renumber(label: &[usize]) -> Vec<u32> {
    let mut dense = vec![0u32; label.len() + 1];
    let mut next = 0u32;
    label
        .iter()
        .map(|&l| {
            if l == 0 {
                return 0;
            }
            if dense[l] == 0 {
                next += 1;
                dense[l] = next;
            }
            dense[l]
        })
        .collect()
}

/// Number of ring blocks in a block assignment.
pub fn block_count(blocks: &[u32]) -> u32 {
    blocks.iter().copied().max().unwrap_or(0)
}
