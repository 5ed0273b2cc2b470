//! A longest-prefix-match routing table for IPv4 addresses.
//!
//! Given a destination address, the table returns the gateway of the most
//! specific route covering it, the way a router's forwarding table does.
//!
//! # Organization
//! - [`Ipv4Address`] and [`subnetting`](ipv4::subnetting) provide addresses
//!   and subnet mask arithmetic
//! - [`Route`] binds a prefix to a gateway
//! - [`PrefixTree`] is the binary trie that stores routes and answers lookups
//! - [`PrefixRouter`] adds a gateway index on top of the trie so that every
//!   route to a gateway can be dropped at once
//!
//! # Example
//!
//! ```
//! use lpm_router::{Ipv4Address, PrefixRouter, Route, Router};
//!
//! let mut router = PrefixRouter::new();
//! let gateway = Ipv4Address::new([1, 1, 1, 1]);
//! router.add(Route::new([192, 168, 0, 0].into(), 16, gateway).unwrap());
//!
//! assert_eq!(router.get([192, 168, 7, 7].into()), Some(gateway));
//! assert_eq!(router.get([10, 0, 0, 1].into()), None);
//! ```

pub mod cli;
pub mod logging;

pub mod ipv4;
pub use ipv4::Ipv4Address;

pub mod route;
pub use route::Route;

pub mod route_parsing;

pub mod prefix_tree;
pub use prefix_tree::{NodeId, PrefixTree};

mod router;
pub use router::Router;

pub mod prefix_router;
pub use prefix_router::PrefixRouter;
