use std::fmt::Display;

use crate::network::{Network, NodeIndex, TravelTime};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown station {0}.")]
    UnknownStation(String),
    #[error("No route found.")]
    NoRouteFound,
}

pub type RouteResult<'a> = Result<Route<'a>, RouteError>;

/// A path through the network, from the first node to the last.
pub struct Route<'a> {
    pub nodes: Vec<NodeIndex>,
    pub travel_time: TravelTime,
    pub network: &'a Network,
}

impl<'a> Route<'a> {
    pub(crate) fn new(nodes: Vec<NodeIndex>, travel_time: TravelTime, network: &'a Network) -> Self {
        debug_assert!(!nodes.is_empty(), "A route visits at least one node.");
        Self { nodes, travel_time, network }
    }

    // Walk parent pointers back from `end` to a search root.
    pub(crate) fn from_parents(parents: &[Option<NodeIndex>], end: NodeIndex, travel_time: TravelTime, network: &'a Network) -> Self {
        let mut nodes = vec![end];
        let mut current = end;
        while let Some(parent) = parents[current as usize] {
            nodes.push(parent);
            current = parent;
            // Parent pointers form a forest, so a walk can never be longer than the network.
            debug_assert!(nodes.len() <= network.num_nodes(), "Cycle in parent pointers.");
        }
        nodes.reverse();
        Self::new(nodes, travel_time, network)
    }

    /// Number of edges travelled.
    pub fn stops(&self) -> usize { self.nodes.len() - 1 }

    pub fn start(&self) -> NodeIndex { self.nodes[0] }

    pub fn end(&self) -> NodeIndex { self.nodes[self.nodes.len() - 1] }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|&node| self.network.get_node_id(node))
    }

    /// Sum of the lightest edge between each pair of consecutive nodes, or `None` if two of them are not adjacent.
    pub fn edge_time_sum(&self) -> Option<TravelTime> {
        self.nodes
            .windows(2)
            .map(|pair| self.network.travel_time(pair[0], pair[1]))
            .sum()
    }
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node_id) in self.node_ids().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{node_id}")?;
        }
        Ok(())
    }
}
