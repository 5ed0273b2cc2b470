use std::{
    fmt::{self, Display},
    net::Ipv4Addr,
    str::FromStr,
};

/// An IPv4 address, stored as four bytes with the most significant first.
///
/// Masks are represented with this same type; see
/// [`subnetting`](super::subnetting) for the operations that validate and
/// apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4Address([u8; 4]);

impl Ipv4Address {
    /// The address `0.0.0.0`.
    pub const CURRENT_NETWORK: Self = Self([0u8, 0, 0, 0]);

    /// The address `127.0.0.1`.
    pub const LOCALHOST: Self = Self([127u8, 0, 0, 1]);

    /// The address `255.255.255.255`.
    pub const SUBNET: Self = Self([255u8, 255, 255, 255]);

    /// Number of bits in an address.
    pub const BITS: u8 = 32;

    /// Creates a new address from its four bytes.
    pub const fn new(address: [u8; 4]) -> Self {
        Self(address)
    }

    /// Parses an address in dotted-quad form, such as `192.168.0.1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lpm_router::Ipv4Address;
    /// let address = Ipv4Address::parse("10.0.3.4").unwrap();
    /// assert_eq!(address, Ipv4Address::new([10, 0, 3, 4]));
    /// assert!(Ipv4Address::parse("10.0.3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, Ipv4ParseError> {
        text.parse()
    }

    /// Gets the address as a `u32`.
    pub fn to_u32(self) -> u32 {
        self.into()
    }

    /// Gets the address as a `[u8; 4]`.
    pub fn to_bytes(self) -> [u8; 4] {
        self.into()
    }

    /// Returns bit `index` of the address, counting from the most
    /// significant bit of the first byte. `index` must be below 32.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lpm_router::Ipv4Address;
    /// let address = Ipv4Address::new([0b1000_0000, 0, 0, 1]);
    /// assert!(address.bit(0));
    /// assert!(!address.bit(1));
    /// assert!(address.bit(31));
    /// ```
    pub fn bit(self, index: u8) -> bool {
        debug_assert!(index < Self::BITS);
        let byte = self.0[usize::from(index / 8)];
        let shift = 7 - index % 8;
        (byte >> shift) & 1 == 1
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("Address {0} is not an IPv4 address")]
pub struct Ipv4ParseError(pub String);

impl FromStr for Ipv4Address {
    type Err = Ipv4ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s)
            .map(Self::from)
            .or(Err(Ipv4ParseError(s.to_string())))
    }
}

impl Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(f, "{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<u32> for Ipv4Address {
    fn from(n: u32) -> Self {
        Self::from(n.to_be_bytes())
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(n: [u8; 4]) -> Self {
        Self(n)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(address: Ipv4Addr) -> Self {
        Self(address.octets())
    }
}

impl From<Ipv4Address> for u32 {
    fn from(address: Ipv4Address) -> Self {
        u32::from_be_bytes(address.0)
    }
}

impl From<Ipv4Address> for [u8; 4] {
    fn from(address: Ipv4Address) -> Self {
        address.0
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        Ipv4Addr::from(address.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_quad() {
        assert_eq!(
            Ipv4Address::parse("192.168.0.1"),
            Ok(Ipv4Address::new([192, 168, 0, 1]))
        );
        assert_eq!(
            "255.255.255.255".parse::<Ipv4Address>(),
            Ok(Ipv4Address::SUBNET)
        );
    }

    #[test]
    fn rejects_malformed_text() {
        let malformed = [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "256.0.0.1",
            "a.b.c.d",
            "::1",
            " 1.2.3.4",
        ];
        for text in malformed {
            assert_eq!(
                Ipv4Address::parse(text),
                Err(Ipv4ParseError(text.to_string())),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn u32_conversion_is_big_endian() {
        let address = Ipv4Address::new([192, 168, 1, 2]);
        assert_eq!(address.to_u32(), 0xC0_A8_01_02);
        assert_eq!(Ipv4Address::from(0xC0_A8_01_02), address);
    }

    #[test]
    fn bits_are_read_most_significant_first() {
        let address = Ipv4Address::new([0b1010_0000, 0, 0b0000_0001, 0]);
        let set: Vec<u8> = (0..32).filter(|&i| address.bit(i)).collect();
        assert_eq!(set, vec![0, 2, 23]);
    }

    #[test]
    fn displays_dotted_quad() {
        assert_eq!(Ipv4Address::LOCALHOST.to_string(), "127.0.0.1");
    }
}
