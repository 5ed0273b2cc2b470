//! Subnet mask arithmetic.
//!
//! A mask is an [`Ipv4Address`] whose bits, read from the most significant,
//! are a run of ones followed by a run of zeros. The number of ones is the
//! prefix length. Masks are always validated before they are applied, so a
//! malformed mask produces an error instead of a garbage network ID.
//!
//! Wikipedia article on CIDR: <https://en.wikipedia.org/wiki/Classless_Inter-Domain_Routing>

use super::Ipv4Address;

#[derive(Clone, Copy, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Prefix {0} is greater than 32")]
    PrefixRange(u8),
    #[error("{0} is not a valid subnet mask")]
    InvalidMask(Ipv4Address),
}

/// Returns the mask with `prefix` leading ones.
///
/// Fails if `prefix` is greater than 32.
///
/// # Examples
///
/// ```
/// # use lpm_router::ipv4::{mask_from_prefix, Ipv4Address, SubnetError};
/// assert_eq!(mask_from_prefix(19), Ok(Ipv4Address::new([255, 255, 224, 0])));
/// assert_eq!(mask_from_prefix(33), Err(SubnetError::PrefixRange(33)));
/// ```
pub fn mask_from_prefix(prefix: u8) -> Result<Ipv4Address, SubnetError> {
    if prefix > Ipv4Address::BITS {
        return Err(SubnetError::PrefixRange(prefix));
    }
    let mut mask = [0u8; 4];
    let full = usize::from(prefix / 8);
    mask[..full].fill(255);
    let rem = prefix % 8;
    if rem != 0 {
        // 256 - 2^(8 - rem)
        mask[full] = 0xFF << (8 - rem);
    }
    Ok(Ipv4Address::new(mask))
}

// A byte below 255 may only close out a mask if its ones are all leading.
fn is_partial_mask_byte(byte: u8) -> bool {
    byte.leading_ones() + byte.trailing_zeros() == 8
}

impl Ipv4Address {
    /// Returns `true` if this address is a valid subnet mask.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lpm_router::Ipv4Address;
    /// assert!(Ipv4Address::new([255, 255, 192, 0]).is_mask());
    /// assert!(!Ipv4Address::new([255, 160, 0, 0]).is_mask());
    /// ```
    pub fn is_mask(self) -> bool {
        let mut ones = true;
        for byte in self.to_bytes() {
            if ones {
                if byte != 255 {
                    if !is_partial_mask_byte(byte) {
                        return false;
                    }
                    ones = false;
                }
            } else if byte != 0 {
                return false;
            }
        }
        true
    }

    /// Applies `mask` to this address, returning the network ID.
    ///
    /// Fails if `mask` is not a valid subnet mask.
    pub fn mask_with(self, mask: Ipv4Address) -> Result<Ipv4Address, SubnetError> {
        if !mask.is_mask() {
            return Err(SubnetError::InvalidMask(mask));
        }
        let mut masked = self.to_bytes();
        for (byte, mask_byte) in masked.iter_mut().zip(mask.to_bytes()) {
            *byte &= mask_byte;
        }
        Ok(Ipv4Address::new(masked))
    }

    /// Keeps only the first `prefix` bits of this address.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lpm_router::Ipv4Address;
    /// let address = Ipv4Address::new([192, 168, 100, 7]);
    /// assert_eq!(
    ///     address.mask_with_prefix(18),
    ///     Ok(Ipv4Address::new([192, 168, 64, 0]))
    /// );
    /// ```
    pub fn mask_with_prefix(self, prefix: u8) -> Result<Ipv4Address, SubnetError> {
        self.mask_with(mask_from_prefix(prefix)?)
    }
}
