// flags.rs - Help/version flag set and the argument scan

use std::ffi::OsStr;
use std::ops::{BitOr, BitOrAssign};

/// Bit set over the two recognised options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    pub const HELP: Flags = Flags(1 << 0);
    pub const VERSION: Flags = Flags(1 << 1);
    pub const ALL: Flags = Flags(Self::HELP.0 | Self::VERSION.0);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    /// Map a single argument to the flag it spells, if any
    pub fn from_arg(arg: &OsStr) -> Flags {
        match arg.to_str() {
            Some("-h") | Some("--help") => Flags::HELP,
            Some("-v") | Some("--version") => Flags::VERSION,
            _ => Flags::NONE,
        }
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.insert(rhs);
    }
}

/// Collect the flags present anywhere in `args`.
///
/// Only exact matches count; everything else is left for the file list.
/// Stops as soon as both flags have been seen.
pub fn scan_flags<S: AsRef<OsStr>>(args: &[S]) -> Flags {
    let mut flags = Flags::NONE;
    for arg in args {
        flags |= Flags::from_arg(arg.as_ref());
        if flags == Flags::ALL {
            break;
        }
    }
    flags
}
