use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::network::{Network, NodeIndex, StationMatch, TravelTime};
use crate::Route;

/// Find the route with the least total travel time between two station names.
///
/// Every node matching `start` begins at time zero. The search stops as soon as a node
/// matching `end` is settled, and that node's distance is the route's travel time.
///
/// Returns `None` if no route exists, including when either name matches no node.
pub fn find_fastest_path<'a>(network: &'a Network, start: &str, end: &str, matching: StationMatch) -> Option<Route<'a>> {
    let num_nodes = network.num_nodes();
    let start_nodes = network.candidates(start, matching);
    let mut is_end = vec![false; num_nodes];
    for node in network.candidates(end, matching) {
        is_end[node as usize] = true;
    }

    // Best known travel time to each node. MAX stands for unreached.
    let mut tau = vec![TravelTime::MAX; num_nodes];
    let mut parents: Vec<Option<NodeIndex>> = vec![None; num_nodes];
    let mut queue = BinaryHeap::with_capacity(num_nodes);

    for &node in &start_nodes {
        tau[node as usize] = 0;
        queue.push(Reverse((0, node)));
    }

    let mut num_settled = 0;
    while let Some(Reverse((time, current))) = queue.pop() {
        // Stale entry, a faster way here was already settled.
        if time > tau[current as usize] {
            continue;
        }
        trace!("Settled {} at {time}.", network.get_node_id(current));

        if is_end[current as usize] {
            debug!("Fastest search from {} candidates settled {num_settled} nodes.", start_nodes.len());
            return Some(Route::from_parents(&parents, current, time, network));
        }
        num_settled += 1;

        for edge in network.neighbours(current) {
            let new_time = time + edge.travel_time;
            if new_time < tau[edge.to as usize] {
                tau[edge.to as usize] = new_time;
                parents[edge.to as usize] = Some(current);
                queue.push(Reverse((new_time, edge.to)));
            }
        }
    }

    debug!("Fastest search from {} candidates found no route after settling {num_settled} nodes.", start_nodes.len());
    None
}
