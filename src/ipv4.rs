//! IPv4 addresses and the subnet mask arithmetic used to key routes.

mod ipv4_address;
pub use ipv4_address::{Ipv4Address, Ipv4ParseError};

pub mod subnetting;
pub use subnetting::{mask_from_prefix, SubnetError};
