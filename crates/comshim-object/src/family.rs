use core::fmt;

use crate::guid::Guid;

/// Ordinal naming which interface version in a family a proxy currently
/// presents. Level 0 is the baseline interface; each higher level is a strict
/// superset of the one below it. A proxy's level only ever moves forward.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct InterfaceLevel(pub u32);

impl InterfaceLevel {
    pub const BASE: Self = Self(0);
}

impl fmt::Display for InterfaceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Static descriptor of one versioned interface family.
///
/// `versions[k]` is the identity token of the level-`k` interface, so the
/// table index doubles as the capability level a successful query grants.
/// `generic` lists role identities (base object, generic-unknown,
/// device-child, base-family and the like) that every member of the family
/// answers to regardless of level.
pub struct InterfaceFamily {
    /// Human-readable family name, used in trace and diagnostic output.
    pub name: &'static str,
    /// Always-accepted role identities.
    pub generic: &'static [Guid],
    /// Leveled identities, index == capability level.
    pub versions: &'static [Guid],
}

impl InterfaceFamily {
    /// Highest level this family defines.
    pub fn max_level(&self) -> InterfaceLevel {
        debug_assert!(!self.versions.is_empty());
        InterfaceLevel(self.versions.len() as u32 - 1)
    }

    pub fn is_generic(&self, token: &Guid) -> bool {
        self.generic.contains(token)
    }

    /// Level granted by `token`, or `None` if the token is not one of this
    /// family's leveled identities.
    pub fn version_of(&self, token: &Guid) -> Option<InterfaceLevel> {
        self.versions
            .iter()
            .position(|iid| iid == token)
            .map(|index| InterfaceLevel(index as u32))
    }

    pub fn token_for(&self, level: InterfaceLevel) -> Option<&Guid> {
        self.versions.get(level.0 as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::IID_UNKNOWN;

    const V0: Guid = Guid::from_u128(0x10);
    const V1: Guid = Guid::from_u128(0x11);
    const V2: Guid = Guid::from_u128(0x12);

    static FAMILY: InterfaceFamily = InterfaceFamily {
        name: "test",
        generic: &[IID_UNKNOWN],
        versions: &[V0, V1, V2],
    };

    #[test]
    fn version_lookup_matches_table_index() {
        assert_eq!(FAMILY.version_of(&V0), Some(InterfaceLevel(0)));
        assert_eq!(FAMILY.version_of(&V2), Some(InterfaceLevel(2)));
        assert_eq!(FAMILY.version_of(&IID_UNKNOWN), None);
        assert_eq!(FAMILY.version_of(&Guid::from_u128(0x99)), None);
        assert_eq!(FAMILY.max_level(), InterfaceLevel(2));
    }

    #[test]
    fn generic_roles_are_not_leveled() {
        assert!(FAMILY.is_generic(&IID_UNKNOWN));
        assert!(!FAMILY.is_generic(&V1));
        assert_eq!(FAMILY.token_for(InterfaceLevel(1)), Some(&V1));
        assert_eq!(FAMILY.token_for(InterfaceLevel(3)), None);
    }
}
