use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use serde::Deserialize;

use ringcrab::{Atom, Bond, BondOrder, Mol, SmallRingCounts, SmallRingDescriptor};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RingEntry {
    name: String,
    atoms: Vec<String>,
    /// `(atom, formal charge)` pairs; unlisted atoms are neutral.
    #[serde(default)]
    charges: Vec<(usize, i8)>,
    /// `(atom, atom, order)` with order 1..=4.
    bonds: Vec<(usize, usize, u8)>,
    /// Descriptor values by name; unlisted names are expected to be zero.
    expected: HashMap<String, u32>,
}

fn order(n: u8) -> Option<BondOrder> {
    match n {
        1 => Some(BondOrder::Single),
        2 => Some(BondOrder::Double),
        3 => Some(BondOrder::Triple),
        4 => Some(BondOrder::Quadruple),
        _ => None,
    }
}

fn build(entry: &RingEntry) -> Result<Mol<Atom, Bond>, String> {
    let mut mol = Mol::new();
    let mut idx = Vec::with_capacity(entry.atoms.len());
    for sym in &entry.atoms {
        let atom = Atom::from_symbol(sym).ok_or_else(|| format!("unknown element {sym:?}"))?;
        idx.push(mol.add_atom(atom));
    }
    for &(atom, charge) in &entry.charges {
        let node: NodeIndex = *idx.get(atom).ok_or_else(|| format!("no atom {atom}"))?;
        mol.atom_mut(node).formal_charge = charge;
    }
    for &(a, b, n) in &entry.bonds {
        let bond_order = order(n).ok_or_else(|| format!("bad bond order {n}"))?;
        let (Some(&a), Some(&b)) = (idx.get(a), idx.get(b)) else {
            return Err(format!("bond {a}-{b} out of range"));
        };
        mol.add_bond(a, b, Bond::new(bond_order));
    }
    Ok(mol)
}

// ---------------------------------------------------------------------------
// Small ring descriptor
// ---------------------------------------------------------------------------

#[test]
fn approval_small_rings() {
    let data: Vec<RingEntry> =
        serde_json::from_str(include_str!("approval_data/small_rings.json")).unwrap();

    let descriptor = SmallRingDescriptor::default();
    let mut failures = Vec::new();
    for entry in &data {
        for name in entry.expected.keys() {
            if !SmallRingCounts::NAMES.contains(&name.as_str()) {
                failures.push(format!("[data] {}: unknown descriptor {name:?}", entry.name));
            }
        }

        let mol = match build(entry) {
            Ok(m) => m,
            Err(e) => {
                failures.push(format!("[build] {}: {e}", entry.name));
                continue;
            }
        };

        let counts = match descriptor.calculate(&mol) {
            Ok(c) => c,
            Err(e) => {
                failures.push(format!("[calculate] {}: {e}", entry.name));
                continue;
            }
        };

        for (name, got) in counts.iter() {
            let expected = entry.expected.get(name).copied().unwrap_or(0);
            if got != expected {
                failures.push(format!(
                    "[{name}] {}: expected {expected}, got {got}",
                    entry.name
                ));
            }
        }

        let by_size: u32 = counts.n_rings.iter().sum();
        if by_size != counts.n_small_rings {
            failures.push(format!(
                "[size_sum] {}: {} rings but sizes sum to {by_size}",
                entry.name, counts.n_small_rings
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} small ring failures:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn approval_aromatic_atoms_cover_aromatic_rings() {
    let data: Vec<RingEntry> =
        serde_json::from_str(include_str!("approval_data/small_rings.json")).unwrap();

    let descriptor = SmallRingDescriptor::default();
    for entry in &data {
        let mol = build(entry).unwrap();
        let analysis = descriptor.analyze(&mol).unwrap();
        for ring in &analysis.rings {
            if analysis.aromatic.is_ring_aromatic(ring) {
                for &a in ring.atoms() {
                    assert!(
                        analysis.aromatic.atoms[a],
                        "{}: atom {a} of aromatic ring {:?} not flagged",
                        entry.name,
                        ring.atoms()
                    );
                }
            }
        }
    }
}
