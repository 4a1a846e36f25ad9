use std::collections::{BTreeMap, HashSet};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::network::{Network, NetworkError, NodeIndex, TravelTime};
use crate::station::Station;

/// One record of the station list: a station served by a line.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StationRow {
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Line")]
    pub line: String,
}

impl StationRow {
    pub fn new(station: &str, line: &str) -> Self {
        Self {
            station: station.to_owned(),
            line: line.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    // Travel times between neighbouring stations on a line are drawn uniformly from this inclusive range.
    pub min_travel_time: TravelTime,
    pub max_travel_time: TravelTime,
    // Time to change between two lines at the same station.
    pub transfer_time: TravelTime,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_travel_time: 2,
            max_travel_time: 8,
            transfer_time: 5,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.min_travel_time == 0 || self.transfer_time == 0 {
            return Err(NetworkError::InvalidConfig("travel times must be positive".to_owned()));
        }
        if self.min_travel_time > self.max_travel_time {
            return Err(NetworkError::InvalidConfig(format!(
                "minimum travel time {} exceeds maximum travel time {}",
                self.min_travel_time, self.max_travel_time
            )));
        }
        Ok(())
    }
}

impl Network {
    /// Build a network from a station list.
    ///
    /// Every row becomes a node. Stations on the same line are connected in ascending order
    /// of station name (not in the order they are listed), with a random travel time drawn
    /// from `rng`. Every pair of lines sharing a station name gets a transfer connection.
    ///
    /// Duplicate (station, line) rows are skipped.
    pub fn build(rows: &[StationRow], config: &NetworkConfig, rng: &mut fastrand::Rng) -> Self {
        assert!(config.validate().is_ok(), "Invalid network configuration: {config:?}");

        let mut network = Network::with_capacity(rows.len());

        // All nodes must exist before any connection references them.
        let mut seen = HashSet::with_capacity(rows.len());
        let mut row_nodes: Vec<(&StationRow, NodeIndex)> = Vec::with_capacity(rows.len());
        for row in rows {
            if !seen.insert((row.station.as_str(), row.line.as_str())) {
                warn!("Skipping duplicate station {} on line {}.", row.station, row.line);
                continue;
            }
            let node = network.add_station(Station::new(&row.station, &row.line));
            row_nodes.push((row, node));
        }

        // Connect neighbouring stations on each line.
        let mut lines: BTreeMap<&str, Vec<(&str, NodeIndex)>> = BTreeMap::new();
        for &(row, node) in &row_nodes {
            lines.entry(row.line.as_str()).or_default().push((row.station.as_str(), node));
        }
        let num_lines = lines.len();
        for (line, mut stations) in lines {
            stations.sort_by(|(a, _), (b, _)| a.cmp(b));
            for pair in stations.windows(2) {
                let travel_time = rng.u32(config.min_travel_time..=config.max_travel_time);
                network.add_connection(pair[0].1, pair[1].1, travel_time);
            }
            debug!("Line {line} has {} stations.", stations.len());
        }

        // Transfers between every pair of lines at an interchange.
        let mut interchanges: BTreeMap<&str, Vec<NodeIndex>> = BTreeMap::new();
        for &(row, node) in &row_nodes {
            interchanges.entry(row.station.as_str()).or_default().push(node);
        }
        let mut num_interchanges = 0;
        for nodes in interchanges.values().filter(|nodes| nodes.len() > 1) {
            num_interchanges += 1;
            for (i, &a) in nodes.iter().enumerate() {
                for &b in &nodes[i + 1..] {
                    network.add_connection(a, b, config.transfer_time);
                }
            }
        }

        info!(
            "Built network with {} nodes, {} connections, {} lines and {} interchanges.",
            network.num_nodes(),
            network.num_edges(),
            num_lines,
            num_interchanges
        );

        network
    }
}
