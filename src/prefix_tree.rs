//! A binary trie providing longest-prefix-match lookups of IPv4 addresses.
//!
//! Each level of the trie consumes one bit of the address, most significant
//! bit first. A route with prefix length `n` is stored in the node reached
//! after `n` steps from the root, so a default route (`/0`) lives in the root
//! itself and host routes (`/32`) live at the deepest level.
//!
//! Nodes are created lazily as routes are added and are never freed: dropping
//! a route only clears the gateway stored in its node. This keeps every
//! [`NodeId`] handed out by [`PrefixTree::add`] valid for the life of the
//! tree.

use std::fmt;

use crate::{logging, Ipv4Address, Route};

/// Handle to a node of a [`PrefixTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    const ROOT: Self = Self(0);
}

#[derive(Clone, Debug, Default)]
struct Node {
    zero: Option<NodeId>,
    one: Option<NodeId>,
    gateway: Option<Ipv4Address>,
}

impl Node {
    fn child(&self, bit: bool) -> Option<NodeId> {
        if bit {
            self.one
        } else {
            self.zero
        }
    }
}

/// A binary trie of routes.
#[derive(Clone, Debug)]
pub struct PrefixTree {
    // nodes[0] is the root
    nodes: Vec<Node>,
    routes: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    /// Creates a tree holding no routes.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            routes: 0,
        }
    }

    /// Inserts a route into the trie, creating any missing nodes along its
    /// path. An existing route with the same prefix is replaced.
    ///
    /// Returns the node the route was stored in and the gateway it replaced.
    pub fn add(&mut self, route: &Route) -> (NodeId, Option<Ipv4Address>) {
        let mut current = NodeId::ROOT;
        for depth in 0..route.prefix() {
            let bit = route.masked().bit(depth);
            current = match self.node(current).child(bit) {
                Some(next) => next,
                None => self.push_child(current, bit),
            };
        }

        let previous = self.node_mut(current).gateway.replace(route.gateway());
        match previous {
            Some(previous) => logging::route_overwrite_event(route, previous),
            None => {
                self.routes += 1;
                logging::route_added_event(route);
            }
        }
        (current, previous)
    }

    /// Removes whatever route is stored at the route's prefix.
    ///
    /// The drop is soft: the node keeps its place in the trie and no nodes are
    /// pruned. The stored gateway is cleared even if it differs from the
    /// route's gateway. Returns the cleared gateway, or `None` if there was no
    /// route with that prefix.
    pub fn drop(&mut self, route: &Route) -> Option<Ipv4Address> {
        let id = self.find(route)?;
        let gateway = self.clear(id)?;
        logging::route_dropped_event(route, gateway);
        Some(gateway)
    }

    /// Returns the gateway of the longest prefix containing `address`, or
    /// `None` if no stored prefix contains it.
    pub fn get(&self, address: Ipv4Address) -> Option<Ipv4Address> {
        let mut current = self.node(NodeId::ROOT);
        let mut best = current.gateway;
        for depth in 0..Ipv4Address::BITS {
            match current.child(address.bit(depth)) {
                Some(next) => current = self.node(next),
                None => return best,
            }
            // deeper gateways are more specific
            if current.gateway.is_some() {
                best = current.gateway;
            }
        }
        best
    }

    /// Finds the node at exactly the route's prefix, if it exists.
    pub fn find(&self, route: &Route) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for depth in 0..route.prefix() {
            current = self.node(current).child(route.masked().bit(depth))?;
        }
        Some(current)
    }

    /// The gateway currently stored in a node.
    pub fn gateway_at(&self, id: NodeId) -> Option<Ipv4Address> {
        self.nodes.get(id.0).and_then(|node| node.gateway)
    }

    /// Clears the gateway of a node, returning it.
    pub fn clear(&mut self, id: NodeId) -> Option<Ipv4Address> {
        let gateway = self.nodes.get_mut(id.0)?.gateway.take()?;
        self.routes -= 1;
        Some(gateway)
    }

    /// Number of nodes in the trie, including the root and nodes whose
    /// routes were dropped.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of routes currently stored.
    pub fn route_count(&self) -> usize {
        self.routes
    }

    /// Returns `true` if no routes are stored.
    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn push_child(&mut self, parent: NodeId, bit: bool) -> NodeId {
        let child = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        let parent = self.node_mut(parent);
        if bit {
            parent.one = Some(child);
        } else {
            parent.zero = Some(child);
        }
        child
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, pad: usize) -> fmt::Result {
        let node = self.node(id);
        for (label, child) in [("0", node.zero), ("1", node.one)] {
            if let Some(child) = child {
                writeln!(f, "{:pad$}{}: {{", "", label, pad = pad)?;
                self.write_node(f, child, pad + 2)?;
                writeln!(f, "{:pad$}}},", "", pad = pad)?;
            }
        }
        if let Some(gateway) = node.gateway {
            writeln!(f, "{:pad$}R: {}", "", gateway, pad = pad)?;
        }
        Ok(())
    }
}

impl fmt::Display for PrefixTree {
    /// Writes an indented dump of the trie, one line per edge and stored
    /// gateway. Intended for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        self.write_node(f, NodeId::ROOT, 2)?;
        write!(f, "}}")
    }
}
