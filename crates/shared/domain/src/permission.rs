use crate::flags::{FlagSet, flag_set_impls};
use bitflags::bitflags;

bitflags! {
    /// Access rights on a resource. Any combination is valid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Permission: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const EXECUTE = 1 << 2;
        const ADMIN = 1 << 3;
    }
}

impl FlagSet for Permission {
    const KIND: &'static str = "Permission";
    const SEPARATOR: &'static str = "|";
    const LABELS: &'static [(Self, &'static str)] = &[
        (Self::READ, "Read"),
        (Self::WRITE, "Write"),
        (Self::EXECUTE, "Execute"),
        (Self::ADMIN, "Admin"),
    ];
}

flag_set_impls!(Permission);

impl From<u8> for Permission {
    fn from(bits: u8) -> Self {
        Self::from_bits_retain(bits)
    }
}
