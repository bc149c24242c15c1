//! Opaque participant identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a party interacting with the pool.
///
/// The engine only uses it as a map key; its 32 bytes are whatever the
/// host environment uses to name an account (an address, a public key
/// hash, ...).  All byte sequences are valid, so construction is
/// infallible.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::ParticipantId;
///
/// let alice = ParticipantId::from_bytes([0xaa; 32]);
/// assert_eq!(alice.as_bytes(), [0xaa; 32]);
/// assert!(alice.to_string().starts_with("0xaaaa"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId([u8; 32]);

impl ParticipantId {
    /// Creates a `ParticipantId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Left-pads a 20-byte account address.
    #[must_use]
    pub fn from_address(address: [u8; 20]) -> Self {
        let mut bytes = [0u8; 32];
        bytes[12..].copy_from_slice(&address);
        Self(bytes)
    }

    /// Returns the underlying 32 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
