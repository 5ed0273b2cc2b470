use crate::{Ipv4Address, Route};

/// The operations of a routing table.
pub trait Router {
    /// Adds a route to the table, replacing any route with the same prefix.
    fn add(&mut self, route: Route);

    /// Removes the route stored at the route's prefix, if any.
    fn drop(&mut self, route: &Route);

    /// Removes every route that sends traffic to `gateway`, returning how
    /// many were removed.
    fn drop_all_to(&mut self, gateway: Ipv4Address) -> usize;

    /// Returns the gateway of the longest matching prefix, or `None` if the
    /// address is unroutable.
    fn get(&self, address: Ipv4Address) -> Option<Ipv4Address>;
}
