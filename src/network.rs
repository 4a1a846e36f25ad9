use std::collections::HashMap;

use crate::route::RouteError;
use crate::station::Station;

pub type NodeIndex = u32;
// Minutes.
pub type TravelTime = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeIndex,
    pub travel_time: TravelTime,
}

/// How a user-supplied station name is turned into a set of candidate nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StationMatch {
    /// The station name, or the full node identifier, must be equal to the query.
    #[default]
    Exact,
    /// The node identifier must start with the query.
    /// Note that a name which is a prefix of another station's name matches both:
    /// "Ang" selects "Ang Mo Kio (NS)" as well as any station called "Ang".
    Prefix,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Unknown node {0}.")]
    UnknownNode(String),
    #[error("Invalid network configuration: {0}.")]
    InvalidConfig(String),
}

/// Adjacency store of line-qualified stations.
///
/// Nodes are kept in registration order and addressed by [`NodeIndex`]. Every connection
/// is stored in both directions with the same travel time.
#[derive(Default)]
pub struct Network {
    pub stations: Vec<Station>,
    pub node_ids: Vec<Box<str>>,
    pub node_index: HashMap<String, NodeIndex>,
    pub edges: Vec<Vec<Edge>>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            stations: Vec::with_capacity(num_nodes),
            node_ids: Vec::with_capacity(num_nodes),
            node_index: HashMap::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_nodes),
        }
    }

    /// Register a station as a node.
    ///
    /// Registering a (name, line) pair a second time keeps its index but replaces the
    /// station and clears every connection stored under it. Neighbours still hold their
    /// half of those connections, so this should only happen before any edges are added.
    pub fn add_station(&mut self, station: Station) -> NodeIndex {
        let id = station.id();
        if let Some(&node) = self.node_index.get(&id) {
            self.stations[node as usize] = station;
            self.edges[node as usize].clear();
            return node;
        }

        assert!(
            self.stations.len() < NodeIndex::MAX as usize,
            "Too many stations (we currently use a {}-bit index for nodes).",
            std::mem::size_of::<NodeIndex>() * 8
        );
        let node = self.stations.len() as NodeIndex;
        self.node_index.insert(id.clone(), node);
        self.node_ids.push(id.into_boxed_str());
        self.stations.push(station);
        self.edges.push(Vec::new());
        node
    }

    /// Add a bidirectional connection between two registered nodes.
    pub fn add_connection(&mut self, from: NodeIndex, to: NodeIndex, travel_time: TravelTime) {
        assert!(
            (from as usize) < self.edges.len() && (to as usize) < self.edges.len(),
            "Connection {from} <-> {to} references a node that was never registered."
        );
        self.edges[from as usize].push(Edge { to, travel_time });
        self.edges[to as usize].push(Edge { to: from, travel_time });
    }

    /// Add a bidirectional connection between two nodes given by their identifiers.
    pub fn connect(&mut self, from_id: &str, to_id: &str, travel_time: TravelTime) -> Result<(), NetworkError> {
        let from = self.get_node_idx(from_id).ok_or_else(|| NetworkError::UnknownNode(from_id.to_owned()))?;
        let to = self.get_node_idx(to_id).ok_or_else(|| NetworkError::UnknownNode(to_id.to_owned()))?;
        self.add_connection(from, to, travel_time);
        Ok(())
    }

    pub fn get_station(&self, node: NodeIndex) -> &Station { &self.stations[node as usize] }

    pub fn get_node_id(&self, node: NodeIndex) -> &str { &self.node_ids[node as usize] }

    pub fn get_node_idx(&self, node_id: &str) -> Option<NodeIndex> { self.node_index.get(node_id).copied() }

    pub fn neighbours(&self, node: NodeIndex) -> &[Edge] { &self.edges[node as usize] }

    pub fn num_nodes(&self) -> usize { self.stations.len() }

    // Each connection is stored twice.
    pub fn num_edges(&self) -> usize { self.edges.iter().map(Vec::len).sum::<usize>() / 2 }

    /// The lightest direct connection between two nodes, if they are adjacent.
    pub fn travel_time(&self, from: NodeIndex, to: NodeIndex) -> Option<TravelTime> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.travel_time)
            .min()
    }

    /// All nodes matching a station name, in registration order. May be empty.
    pub fn candidates(&self, name: &str, matching: StationMatch) -> Vec<NodeIndex> {
        (0..self.num_nodes() as NodeIndex)
            .filter(|&node| match matching {
                StationMatch::Exact => {
                    &*self.get_station(node).name == name || self.get_node_id(node) == name
                }
                StationMatch::Prefix => self.get_node_id(node).starts_with(name),
            })
            .collect()
    }

    /// Like [`Network::candidates`], but an unknown station name is an error.
    pub fn resolve(&self, name: &str, matching: StationMatch) -> Result<Vec<NodeIndex>, RouteError> {
        let candidates = self.candidates(name, matching);
        if candidates.is_empty() {
            return Err(RouteError::UnknownStation(name.to_owned()));
        }
        Ok(candidates)
    }

    pub fn print_stats(&self) {
        let mut lines: Vec<&str> = self.stations.iter().map(|station| &*station.line).collect();
        lines.sort_unstable();
        lines.dedup();
        println!(
            "Network loaded with {} stations on {} lines and {} connections.",
            self.num_nodes(),
            lines.len(),
            self.num_edges()
        );
    }
}
