//! Routes: a prefix of the address space bound to the gateway serving it.

use std::{fmt, num::ParseIntError, str::FromStr};

use crate::ipv4::{Ipv4Address, Ipv4ParseError, SubnetError};

/// A single entry of a routing table.
///
/// The masked address is computed once, when the route is created, and is
/// the key under which the route is stored. Routes cannot be modified;
/// updating a route means adding another one with the same prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    address: Ipv4Address,
    prefix: u8,
    masked: Ipv4Address,
    gateway: Ipv4Address,
}

impl Route {
    /// Creates a route sending everything in `address/prefix` to `gateway`.
    ///
    /// Fails if `prefix` is greater than 32. The gateway is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lpm_router::{Ipv4Address, Route};
    /// let route = Route::new([192, 168, 77, 1].into(), 18, [1, 1, 1, 1].into()).unwrap();
    /// assert_eq!(route.masked(), Ipv4Address::new([192, 168, 64, 0]));
    /// assert!(Route::new([192, 168, 77, 1].into(), 33, [1, 1, 1, 1].into()).is_err());
    /// ```
    pub fn new(
        address: Ipv4Address,
        prefix: u8,
        gateway: Ipv4Address,
    ) -> Result<Self, SubnetError> {
        let masked = address.mask_with_prefix(prefix)?;
        Ok(Self {
            address,
            prefix,
            masked,
            gateway,
        })
    }

    /// Creates a route matching every address (`0.0.0.0/0`).
    pub const fn default_route(gateway: Ipv4Address) -> Self {
        Self {
            address: Ipv4Address::CURRENT_NETWORK,
            prefix: 0,
            masked: Ipv4Address::CURRENT_NETWORK,
            gateway,
        }
    }

    /// Creates a route from a string in
    /// [CIDR notation](https://en.wikipedia.org/wiki/Classless_Inter-Domain_Routing#CIDR_notation),
    /// such as `10.0.0.0/8`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lpm_router::{Ipv4Address, Route};
    /// let gateway = Ipv4Address::new([9, 0, 0, 0]);
    /// let route = Route::from_cidr("0.0.0.0/0", gateway).unwrap();
    /// assert_eq!(route.prefix(), 0);
    ///
    /// Route::from_cidr("5.6.7.8", gateway).expect_err("5.6.7.8 has no prefix length");
    /// ```
    pub fn from_cidr(cidr: &str, gateway: Ipv4Address) -> Result<Self, RouteParseError> {
        let (address, prefix) = cidr.split_once('/').ok_or(RouteParseError::MissingPrefix)?;
        let address = Ipv4Address::from_str(address)?;
        let prefix = u8::from_str(prefix)?;
        Ok(Self::new(address, prefix, gateway)?)
    }

    /// The address the route was created with, before masking.
    pub fn address(&self) -> Ipv4Address {
        self.address
    }

    /// Number of leading bits of [`masked`](Self::masked) that the route covers.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The network ID of the route.
    pub fn masked(&self) -> Ipv4Address {
        self.masked
    }

    /// Where traffic matching this route is sent.
    pub fn gateway(&self) -> Ipv4Address {
        self.gateway
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} via {}", self.masked, self.prefix, self.gateway)
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteParseError {
    #[error("Expected a route of the form address/prefix")]
    MissingPrefix,
    #[error(transparent)]
    Address(#[from] Ipv4ParseError),
    #[error("Invalid prefix length: {0}")]
    Prefix(#[from] ParseIntError),
    #[error(transparent)]
    Subnet(#[from] SubnetError),
}
