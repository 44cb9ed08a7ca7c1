use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}
