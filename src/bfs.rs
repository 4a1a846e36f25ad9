use std::collections::VecDeque;

use log::debug;

use crate::network::{Network, NodeIndex, StationMatch};
use crate::Route;

/// Find the route with the fewest stops between two station names.
///
/// Every node matching `start` is a search root at distance zero, and the first node
/// matching `end` to leave the queue ends the search. Which of several equally short
/// routes is returned depends on the order nodes were registered and connected.
///
/// Returns `None` if no route exists, including when either name matches no node.
/// The route's travel time is the sum of the lightest edge between consecutive nodes.
pub fn find_shortest_path<'a>(network: &'a Network, start: &str, end: &str, matching: StationMatch) -> Option<Route<'a>> {
    let num_nodes = network.num_nodes();
    let start_nodes = network.candidates(start, matching);
    let mut is_end = vec![false; num_nodes];
    for node in network.candidates(end, matching) {
        is_end[node as usize] = true;
    }

    let mut visited = vec![false; num_nodes];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; num_nodes];
    let mut queue = VecDeque::with_capacity(num_nodes);

    // Candidates are distinct, each one is its own root.
    for &node in &start_nodes {
        visited[node as usize] = true;
        queue.push_back(node);
    }

    let mut num_expanded = 0;
    while let Some(current) = queue.pop_front() {
        if is_end[current as usize] {
            debug!("Fewest stops search from {} candidates expanded {num_expanded} nodes.", start_nodes.len());
            let mut route = Route::from_parents(&parents, current, 0, network);
            route.travel_time = route.edge_time_sum().unwrap_or_default();
            return Some(route);
        }
        num_expanded += 1;

        for edge in network.neighbours(current) {
            if !visited[edge.to as usize] {
                visited[edge.to as usize] = true;
                parents[edge.to as usize] = Some(current);
                queue.push_back(edge.to);
            }
        }
    }

    debug!("Fewest stops search from {} candidates found no route after expanding {num_expanded} nodes.", start_nodes.len());
    None
}
