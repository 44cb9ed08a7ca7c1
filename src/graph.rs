//! Dense index-based view of a molecule used by every ring perception pass.

use tracing::trace;

use crate::element::{self, Block, HydrogenValence};
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge};

/// Adjacency arrays plus per-atom electron bookkeeping, built once per
/// calculation.
///
/// `neighbors(i)` and `incident_bonds(i)` are parallel: the bond joining
/// atom `i` to `neighbors(i)[k]` is `incident_bonds(i)[k]`. Bond indices are
/// the molecule's own edge indices.
#[derive(Debug, Clone)]
pub struct MolGraph {
    atom_adj: Vec<Vec<usize>>,
    bond_adj: Vec<Vec<usize>>,
    bond_order: Vec<u8>,
    implicit_h: Vec<u8>,
    double_bonds: Vec<u8>,
    lone_electrons: Vec<u8>,
}

impl MolGraph {
    pub fn build<A, B>(mol: &Mol<A, B>) -> Self
    where
        A: HasAtomicNum + HasFormalCharge,
        B: HasBondOrder,
    {
        let n = mol.atom_count();
        let mut atom_adj = vec![Vec::new(); n];
        let mut bond_adj = vec![Vec::new(); n];
        let mut bond_order = vec![0u8; mol.bond_count()];
        let mut double_bonds = vec![0u8; n];

        for edge in mol.bonds() {
            let (a, b) = match mol.bond_endpoints(edge) {
                Some((a, b)) if a != b => (a.index(), b.index()),
                _ => {
                    trace!(bond = edge.index(), "skipping bond without two distinct atoms");
                    continue;
                }
            };
            let order = mol.bond(edge).bond_order().as_u8();
            bond_order[edge.index()] = order;
            atom_adj[a].push(b);
            bond_adj[a].push(edge.index());
            atom_adj[b].push(a);
            bond_adj[b].push(edge.index());
            if order == 2 {
                double_bonds[a] += 1;
                double_bonds[b] += 1;
            }
        }

        let mut implicit_h = vec![0u8; n];
        let mut lone_electrons = vec![0u8; n];
        for idx in mol.atoms() {
            let i = idx.index();
            let atom = mol.atom(idx);
            let bonded: i16 = bond_adj[i].iter().map(|&b| bond_order[b] as i16).sum();
            let charge = atom.formal_charge();

            let hv = HydrogenValence::of(atom.atomic_num());
            if hv != HydrogenValence::Unknown {
                let h = hv.valence() as i16 + hv.charge_adjustment(charge) - bonded;
                implicit_h[i] = h.clamp(0, u8::MAX as i16) as u8;
            }

            if element::block(atom.atomic_num()) == Some(Block::P) {
                let e = element::valence_electrons(atom.atomic_num()) as i16
                    - charge as i16
                    - implicit_h[i] as i16
                    - bonded;
                lone_electrons[i] = e.clamp(0, u8::MAX as i16) as u8;
            }
        }

        Self {
            atom_adj,
            bond_adj,
            bond_order,
            implicit_h,
            double_bonds,
            lone_electrons,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atom_adj.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bond_order.len()
    }

    pub fn neighbors(&self, atom: usize) -> &[usize] {
        &self.atom_adj[atom]
    }

    pub fn incident_bonds(&self, atom: usize) -> &[usize] {
        &self.bond_adj[atom]
    }

    /// Numeric order 1..=4, or 0 for a bond that was skipped.
    pub fn bond_order(&self, bond: usize) -> u8 {
        self.bond_order[bond]
    }

    pub fn bond_between(&self, a: usize, b: usize) -> Option<usize> {
        self.atom_adj[a]
            .iter()
            .position(|&nb| nb == b)
            .map(|k| self.bond_adj[a][k])
    }

    pub fn implicit_hydrogens(&self, atom: usize) -> u8 {
        self.implicit_h[atom]
    }

    /// An atom is pi-capable when it takes part in at least one double bond.
    pub fn is_pi_capable(&self, atom: usize) -> bool {
        self.double_bonds[atom] > 0
    }

    /// Estimated non-bonding electrons available to a pi system. Only
    /// p-block atoms are ever nonzero.
    pub fn lone_electrons(&self, atom: usize) -> u8 {
        self.lone_electrons[atom]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};
    use crate::tests::{benzene, build, pyridine, pyrrole};

    #[test]
    fn adjacency_is_parallel() {
        let graph = MolGraph::build(&benzene());
        assert_eq!(graph.atom_count(), 6);
        assert_eq!(graph.bond_count(), 6);
        for a in 0..6 {
            assert_eq!(graph.neighbors(a).len(), 2);
            assert_eq!(graph.neighbors(a).len(), graph.incident_bonds(a).len());
            for (k, &nb) in graph.neighbors(a).iter().enumerate() {
                assert_eq!(graph.bond_between(a, nb), Some(graph.incident_bonds(a)[k]));
            }
        }
        assert_eq!(graph.bond_between(0, 3), None);
    }

    #[test]
    fn benzene_carbons_have_one_hydrogen() {
        let graph = MolGraph::build(&benzene());
        for a in 0..6 {
            assert_eq!(graph.implicit_hydrogens(a), 1);
            assert!(graph.is_pi_capable(a));
            assert_eq!(graph.lone_electrons(a), 0);
        }
    }

    #[test]
    fn pyrrole_nitrogen_has_lone_pair() {
        let graph = MolGraph::build(&pyrrole());
        assert_eq!(graph.implicit_hydrogens(0), 1);
        assert_eq!(graph.lone_electrons(0), 2);
        assert!(!graph.is_pi_capable(0));
    }

    #[test]
    fn pyridine_nitrogen_has_no_hydrogen() {
        let graph = MolGraph::build(&pyridine());
        assert_eq!(graph.implicit_hydrogens(0), 0);
        assert!(graph.is_pi_capable(0));
    }

    #[test]
    fn charges_adjust_hydrogens() {
        let ammonium = build(&[Atom::new(7).with_charge(1)], &[]);
        assert_eq!(MolGraph::build(&ammonium).implicit_hydrogens(0), 4);

        let methyl_cation = build(&[Atom::new(6).with_charge(1)], &[]);
        assert_eq!(MolGraph::build(&methyl_cation).implicit_hydrogens(0), 3);

        let methanide = build(&[Atom::new(6).with_charge(-1)], &[]);
        let graph = MolGraph::build(&methanide);
        assert_eq!(graph.implicit_hydrogens(0), 3);
        assert_eq!(graph.lone_electrons(0), 2);
    }

    #[test]
    fn elements_without_standard_valence_get_no_hydrogens() {
        let mol = build(
            &[Atom::new(6), Atom::new(35), Atom::new(26)],
            &[(0, 1, BondOrder::Single), (0, 2, BondOrder::Single)],
        );
        let graph = MolGraph::build(&mol);
        assert_eq!(graph.implicit_hydrogens(0), 2);
        assert_eq!(graph.implicit_hydrogens(1), 0);
        assert_eq!(graph.implicit_hydrogens(2), 0);
        assert_eq!(graph.lone_electrons(1), 6);
        assert_eq!(graph.lone_electrons(2), 0);
    }

    #[test]
    fn hydrogen_count_clamps_at_zero() {
        let mol = build(
            &[Atom::new(8), Atom::new(6), Atom::new(6), Atom::new(6)],
            &[
                (0, 1, BondOrder::Double),
                (0, 2, BondOrder::Single),
                (0, 3, BondOrder::Single),
            ],
        );
        assert_eq!(MolGraph::build(&mol).implicit_hydrogens(0), 0);
    }

    #[test]
    fn self_loop_is_skipped() {
        let mut mol = build(&[Atom::new(6), Atom::new(6)], &[(0, 1, BondOrder::Single)]);
        let a = petgraph::graph::NodeIndex::new(0);
        mol.add_bond(a, a, Bond::new(BondOrder::Single));
        let graph = MolGraph::build(&mol);
        assert_eq!(graph.bond_count(), 2);
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.bond_order(1), 0);
        assert_eq!(graph.implicit_hydrogens(0), 3);
    }
}
