//! A [`Router`] built on a [`PrefixTree`], with an index of the nodes routing
//! to each gateway.
//!
//! The gateway index lets every route to a gateway be dropped without walking
//! the whole trie. It is only a set of hints: the trie is authoritative, and
//! an index entry goes stale when a later route with the same prefix points
//! the node at another gateway. Stale entries are checked against the trie
//! before anything is cleared, so [`Router::drop_all_to`] never drops a route
//! to a different gateway than the one requested.
//!
//! A node is indexed under a gateway whenever it starts routing to that
//! gateway. Re-adding a route the node already holds leaves the index alone,
//! so the same node can appear twice under a gateway only after routing
//! elsewhere in between.

use rustc_hash::FxHashMap;

use crate::{logging, Ipv4Address, NodeId, PrefixTree, Route, Router};

/// A longest-prefix-match routing table.
#[derive(Clone, Debug, Default)]
pub struct PrefixRouter {
    tree: PrefixTree,
    gateways: FxHashMap<Ipv4Address, Vec<NodeId>>,
}

impl PrefixRouter {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table whose only route is a default route to `gateway`.
    pub fn with_default_gateway(gateway: Ipv4Address) -> Self {
        let mut router = Self::new();
        router.add(Route::default_route(gateway));
        router
    }

    /// The underlying trie.
    pub fn tree(&self) -> &PrefixTree {
        &self.tree
    }

    /// Nodes indexed under `gateway`. Some may no longer route to it.
    pub fn indexed(&self, gateway: Ipv4Address) -> &[NodeId] {
        self.gateways
            .get(&gateway)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Router for PrefixRouter {
    fn add(&mut self, route: Route) {
        let (id, previous) = self.tree.add(&route);
        if previous != Some(route.gateway()) {
            self.gateways.entry(route.gateway()).or_default().push(id);
        }
    }

    fn drop(&mut self, route: &Route) {
        self.tree.drop(route);
    }

    fn drop_all_to(&mut self, gateway: Ipv4Address) -> usize {
        let nodes = match self.gateways.remove(&gateway) {
            Some(nodes) => nodes,
            None => return 0,
        };
        let mut dropped = 0;
        for id in nodes {
            if self.tree.gateway_at(id) == Some(gateway) {
                self.tree.clear(id);
                dropped += 1;
            }
        }
        logging::gateway_dropped_event(gateway, dropped);
        dropped
    }

    fn get(&self, address: Ipv4Address) -> Option<Ipv4Address> {
        self.tree.get(address)
    }
}

impl Extend<Route> for PrefixRouter {
    fn extend<T: IntoIterator<Item = Route>>(&mut self, iter: T) {
        for route in iter {
            self.add(route);
        }
    }
}

impl FromIterator<Route> for PrefixRouter {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        let mut router = Self::new();
        router.extend(iter);
        router
    }
}
