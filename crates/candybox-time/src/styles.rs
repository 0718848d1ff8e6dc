use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Flags adjusting how a parsed date is interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateTimeStyles(u32);

impl DateTimeStyles {
    pub const NONE: Self = Self(0);
    /// Time-only input gets 0001-01-01 instead of today.
    pub const NO_CURRENT_DATE_DEFAULT: Self = Self(0x08);
    /// Return the value in UTC.
    pub const ADJUST_TO_UNIVERSAL: Self = Self(0x10);
    /// Input without an offset is local time.
    pub const ASSUME_LOCAL: Self = Self(0x20);
    /// Input without an offset is UTC.
    pub const ASSUME_UNIVERSAL: Self = Self(0x40);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::NO_CURRENT_DATE_DEFAULT, "NoCurrentDateDefault"),
        (Self::ADJUST_TO_UNIVERSAL, "AdjustToUniversal"),
        (Self::ASSUME_LOCAL, "AssumeLocal"),
        (Self::ASSUME_UNIVERSAL, "AssumeUniversal"),
    ];

    pub const fn bits(self) -> u32 { self.0 }

    pub const fn contains(self, other: Self) -> bool { self.0 & other.0 == other.0 }

    /// `ASSUME_LOCAL` and `ASSUME_UNIVERSAL` are mutually exclusive.
    pub const fn is_valid(self) -> bool {
        !self.contains(Self(Self::ASSUME_LOCAL.0 | Self::ASSUME_UNIVERSAL.0))
    }
}

impl BitOr for DateTimeStyles {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl BitOrAssign for DateTimeStyles {
    fn bitor_assign(&mut self, rhs: Self) { self.0 |= rhs.0; }
}

impl fmt::Display for DateTimeStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&names.join(" | "))
        }
    }
}

impl fmt::Debug for DateTimeStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTimeStyles({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_flags_are_exclusive() {
        assert!(DateTimeStyles::NONE.is_valid());
        assert!((DateTimeStyles::ASSUME_LOCAL | DateTimeStyles::ADJUST_TO_UNIVERSAL).is_valid());
        assert!(!(DateTimeStyles::ASSUME_LOCAL | DateTimeStyles::ASSUME_UNIVERSAL).is_valid());
    }

    #[test]
    fn display_lists_flags() {
        let styles = DateTimeStyles::ASSUME_UNIVERSAL | DateTimeStyles::ADJUST_TO_UNIVERSAL;
        assert_eq!(styles.to_string(), "AdjustToUniversal | AssumeUniversal");
        assert_eq!(DateTimeStyles::default().to_string(), "None");
    }
}
