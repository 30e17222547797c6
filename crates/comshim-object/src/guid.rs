use core::fmt;

/// A 128-bit interface identity token in COM GUID layout.
///
/// Interface families and generic object roles are named by these tokens; the
/// layout matches the on-the-wire `u32`/`u16`/`u16`/`[u8; 8]` split used by
/// COM-style object models so that real IIDs can be transcribed verbatim.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Builds a token from a bare 128-bit value, big-endian field order.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: (value as u64).to_be_bytes(),
        }
    }
}

/// The universal base-object identity (`IID_IUnknown` in COM). Every proxy
/// accepts it regardless of capability level.
pub const IID_UNKNOWN: Guid = Guid::new(
    0x0000_0000,
    0x0000,
    0x0000,
    [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
);

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}}}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_registry_format() {
        assert_eq!(
            IID_UNKNOWN.to_string(),
            "{00000000-0000-0000-c000-000000000046}"
        );
    }

    #[test]
    fn from_u128_round_trips_field_layout() {
        let token = Guid::from_u128(0x0000_0000_0000_0000_C000_0000_0000_0046);
        assert_eq!(token, IID_UNKNOWN);

        let token = Guid::from_u128(0x1234_5678_9abc_def0_1122_3344_5566_7788);
        assert_eq!(token.data1, 0x1234_5678);
        assert_eq!(token.data2, 0x9abc);
        assert_eq!(token.data3, 0xdef0);
        assert_eq!(token.data4, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    }
}
