//! Element data needed by ring perception.
//!
//! Only three facts about an element matter here: its symbol, the periodic
//! block it sits in, and how many valence electrons it brings. Block and
//! valence electrons are derived from the atomic number's position in the
//! periodic table rather than stored per element.

/// Periodic table block. Lone pairs are only estimated for p-block atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    S,
    P,
    D,
    F,
}

/// Elements with a standard hydrogen valence used for implicit-H estimation.
///
/// Every other element is [`HydrogenValence::Unknown`] and never receives
/// implicit hydrogens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HydrogenValence {
    Carbon,
    Nitrogen,
    Oxygen,
    Sulfur,
    Phosphorus,
    Unknown,
}

impl HydrogenValence {
    pub fn of(atomic_num: u8) -> Self {
        match atomic_num {
            6 => Self::Carbon,
            7 => Self::Nitrogen,
            8 => Self::Oxygen,
            15 => Self::Phosphorus,
            16 => Self::Sulfur,
            _ => Self::Unknown,
        }
    }

    pub fn valence(self) -> u8 {
        match self {
            Self::Carbon => 4,
            Self::Nitrogen | Self::Phosphorus => 3,
            Self::Oxygen | Self::Sulfur => 2,
            Self::Unknown => 0,
        }
    }

    /// Valence adjustment for a formal charge. Any charge on carbon removes
    /// one bonding slot, so carbon uses `-|charge|`.
    pub fn charge_adjustment(self, formal_charge: i8) -> i16 {
        let charge = formal_charge as i16;
        match self {
            Self::Carbon => -charge.abs(),
            _ => charge,
        }
    }
}

/// Position of an element in the 18-column table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    /// Offset from the first element of the period.
    offset: u8,
    /// IUPAC group 1..=18, `None` for lanthanides and actinides.
    group: Option<u8>,
}

const PERIOD_STARTS: [u8; 7] = [1, 3, 11, 19, 37, 55, 87];

fn position(atomic_num: u8) -> Option<Position> {
    if !(1..=118).contains(&atomic_num) {
        return None;
    }
    let period = PERIOD_STARTS
        .iter()
        .rposition(|&start| start <= atomic_num)?;
    let offset = atomic_num - PERIOD_STARTS[period];
    let group = match (period, offset) {
        (0, 0) => Some(1),
        (0, _) => Some(18),
        (1 | 2, 0 | 1) => Some(offset + 1),
        (1 | 2, _) => Some(offset + 11),
        (3 | 4, _) => Some(offset + 1),
        (_, 0 | 1) => Some(offset + 1),
        (_, 2..=15) => None,
        (_, _) => Some(offset - 13),
    };
    Some(Position { offset, group })
}

pub fn block(atomic_num: u8) -> Option<Block> {
    let pos = position(atomic_num)?;
    Some(match pos.group {
        None => Block::F,
        Some(1 | 2) => Block::S,
        // He has a filled 1s shell.
        Some(18) if atomic_num == 2 => Block::S,
        Some(3..=12) => Block::D,
        Some(_) => Block::P,
    })
}

/// Electrons outside the preceding noble-gas core (ignoring filled d/f
/// shells for p-block elements). `0` for unknown atomic numbers.
pub fn valence_electrons(atomic_num: u8) -> u8 {
    let Some(pos) = position(atomic_num) else {
        return 0;
    };
    match (block(atomic_num), pos.group) {
        (Some(Block::S), _) if atomic_num == 2 => 2,
        (Some(Block::P), Some(group)) => group - 10,
        (Some(Block::F), _) => pos.offset + 1,
        (_, Some(group)) => group,
        _ => 0,
    }
}

pub fn symbol(atomic_num: u8) -> Option<&'static str> {
    SYMBOLS.get((atomic_num as usize).checked_sub(1)?).copied()
}

pub fn atomic_num_from_symbol(s: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|&sym| sym == s)
        .map(|i| i as u8 + 1)
}

#[rustfmt::skip]
static SYMBOLS: [&str; 118] = [
    "H", "He",
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe",
    "Cs", "Ba",
    "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn",
    "Fr", "Ra",
    "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No",
    "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];
