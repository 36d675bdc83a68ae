use std::fmt;

/// Stable identifier of a catalog form (item, enchantment, actor, faction, ...).
///
/// Every comparison between forms goes through this value. The host may hand
/// out distinct in-memory handles for the same catalog entry, so identity is
/// never decided by reference equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormId(pub u32);

impl FormId {
    /// Number of bits reserved for the plugin-local part of an identifier.
    pub const LOCAL_BITS: u32 = 24;

    /// Mask selecting the plugin-local part of an identifier.
    pub const LOCAL_MASK: u32 = (1 << Self::LOCAL_BITS) - 1;

    /// Builds an identifier from a plugin load-order index and a local id.
    ///
    /// The local id is masked to 24 bits; higher bits are discarded.
    #[inline]
    pub const fn from_parts(load_index: u8, local_id: u32) -> Self {
        Self(((load_index as u32) << Self::LOCAL_BITS) | (local_id & Self::LOCAL_MASK))
    }

    /// Load-order index of the plugin that defines this form.
    #[inline]
    pub const fn load_index(self) -> u8 {
        (self.0 >> Self::LOCAL_BITS) as u8
    }

    /// Plugin-local part of the identifier.
    #[inline]
    pub const fn local_id(self) -> u32 {
        self.0 & Self::LOCAL_MASK
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<u32> for FormId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_load_index_and_local_id() {
        let id = FormId::from_parts(0x02, 0x00_0D62);
        assert_eq!(id, FormId(0x0200_0D62));
        assert_eq!(id.load_index(), 0x02);
        assert_eq!(id.local_id(), 0x00_0D62);
    }

    #[test]
    fn local_id_is_masked() {
        let id = FormId::from_parts(0x01, 0xFF00_0001);
        assert_eq!(id, FormId(0x0100_0001));
    }

    #[test]
    fn displays_as_padded_hex() {
        assert_eq!(FormId(0xF).to_string(), "0x0000000F");
    }
}
