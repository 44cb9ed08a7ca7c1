use crate::element;

/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties ring perception reads: which
/// element it is and its formal charge. Hydrogens are implied by valence
/// unless they are added as explicit graph nodes.
///
/// # Examples
///
/// ```
/// use ringcrab::Atom;
///
/// let nitrogen = Atom::from_symbol("N").unwrap();
/// assert_eq!(nitrogen.atomic_num, 7);
/// assert_eq!(nitrogen.symbol(), Some("N"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Whether this atom is in an aromatic ring.
    ///
    /// Treated as an output slot: perception works from the Kekulé bond
    /// orders and never reads this flag. See
    /// [`apply_aromaticity`](crate::apply_aromaticity).
    pub is_aromatic: bool,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        element::atomic_num_from_symbol(symbol).map(Self::new)
    }

    pub fn with_charge(self, formal_charge: i8) -> Self {
        Self {
            formal_charge,
            ..self
        }
    }

    pub fn symbol(&self) -> Option<&'static str> {
        element::symbol(self.atomic_num)
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}
