//! Property tests over randomly generated station lists.

use std::collections::{BTreeMap, HashMap, VecDeque};

use metro::network::{NodeIndex, TravelTime};
use metro::{find_fastest_path, find_shortest_path, Network, NetworkConfig, Route, StationMatch, StationRow};
use proptest::prelude::*;

fn station_rows() -> impl Strategy<Value = Vec<StationRow>> {
    prop::collection::vec((0..10usize, 0..4usize), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(station, line)| StationRow::new(&format!("S{station}"), &format!("L{line}")))
            .collect()
    })
}

fn build(rows: &[StationRow], seed: u64) -> Network {
    Network::build(rows, &NetworkConfig::default(), &mut fastrand::Rng::with_seed(seed))
}

fn same_line(network: &Network, a: NodeIndex, b: NodeIndex) -> bool {
    network.get_station(a).line == network.get_station(b).line
}

// Every (from, to, time) triple, once per direction.
fn directed_edges(network: &Network) -> Vec<(NodeIndex, NodeIndex, TravelTime)> {
    let mut edges = Vec::new();
    for from in 0..network.num_nodes() as NodeIndex {
        for edge in network.neighbours(from) {
            edges.push((from, edge.to, edge.travel_time));
        }
    }
    edges
}

fn reference_hops(network: &Network, sources: &[NodeIndex]) -> Vec<Option<usize>> {
    let mut hops = vec![None; network.num_nodes()];
    let mut queue = VecDeque::new();
    for &source in sources {
        hops[source as usize] = Some(0);
        queue.push_back(source);
    }
    while let Some(node) = queue.pop_front() {
        let next = hops[node as usize].map(|h| h + 1);
        for edge in network.neighbours(node) {
            if hops[edge.to as usize].is_none() {
                hops[edge.to as usize] = next;
                queue.push_back(edge.to);
            }
        }
    }
    hops
}

// Bellman-Ford, independent of the priority queue.
fn reference_times(network: &Network, sources: &[NodeIndex]) -> Vec<Option<TravelTime>> {
    let mut times = vec![None; network.num_nodes()];
    for &source in sources {
        times[source as usize] = Some(0);
    }
    let edges = directed_edges(network);
    for _ in 0..network.num_nodes() {
        let mut changed = false;
        for &(from, to, time) in &edges {
            if let Some(base) = times[from as usize] {
                if times[to as usize].map_or(true, |current| base + time < current) {
                    times[to as usize] = Some(base + time);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    times
}

fn assert_valid_route(network: &Network, route: &Route, start: &[NodeIndex], end: &[NodeIndex]) {
    assert!(start.contains(&route.start()));
    assert!(end.contains(&route.end()));
    assert!(route.edge_time_sum().is_some(), "Route {route} uses a missing connection.");
    for pair in route.nodes.windows(2) {
        assert!(network.travel_time(pair[0], pair[1]).is_some());
    }
}

proptest! {
    #[test]
    fn edges_are_symmetric(rows in station_rows(), seed in any::<u64>()) {
        let network = build(&rows, seed);
        let mut counts: HashMap<(NodeIndex, NodeIndex, TravelTime), i32> = HashMap::new();
        for (from, to, time) in directed_edges(&network) {
            *counts.entry((from, to, time)).or_default() += 1;
        }
        for (&(from, to, time), &count) in &counts {
            prop_assert_eq!(counts.get(&(to, from, time)).copied(), Some(count));
        }
    }

    #[test]
    fn lines_are_chained_in_name_order(rows in station_rows(), seed in any::<u64>()) {
        let network = build(&rows, seed);

        let mut lines: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for row in &rows {
            lines.entry(row.line.as_str()).or_default().push(row.station.as_str());
        }
        for (line, mut stations) in lines {
            stations.sort_unstable();
            stations.dedup();

            let mut expected: Vec<(String, String)> = stations
                .windows(2)
                .map(|pair| (format!("{} ({line})", pair[0]), format!("{} ({line})", pair[1])))
                .collect();
            expected.sort();

            let mut actual: Vec<(String, String)> = directed_edges(&network)
                .into_iter()
                .filter(|&(from, to, _)| same_line(&network, from, to) && &*network.get_station(from).line == line)
                .filter(|&(from, to, _)| network.get_station(from).name < network.get_station(to).name)
                .map(|(from, to, _)| (network.get_node_id(from).to_owned(), network.get_node_id(to).to_owned()))
                .collect();
            actual.sort();

            prop_assert_eq!(actual.len(), stations.len().saturating_sub(1));
            prop_assert_eq!(actual, expected);
        }

        for (from, to, time) in directed_edges(&network) {
            if same_line(&network, from, to) {
                prop_assert!((2..=8).contains(&time));
            }
        }
    }

    #[test]
    fn interchanges_get_every_transfer(rows in station_rows(), seed in any::<u64>()) {
        let network = build(&rows, seed);

        let mut lines_at: HashMap<&str, Vec<&str>> = HashMap::new();
        for row in &rows {
            let lines = lines_at.entry(row.station.as_str()).or_default();
            if !lines.contains(&row.line.as_str()) {
                lines.push(row.line.as_str());
            }
        }

        let mut transfers: HashMap<String, usize> = HashMap::new();
        for (from, to, time) in directed_edges(&network) {
            if !same_line(&network, from, to) {
                prop_assert_eq!(time, 5);
                prop_assert_eq!(&network.get_station(from).name, &network.get_station(to).name);
                if from < to {
                    *transfers.entry(network.get_station(from).name.to_string()).or_default() += 1;
                }
            }
        }
        for (station, lines) in lines_at {
            let l = lines.len();
            prop_assert_eq!(transfers.get(station).copied().unwrap_or(0), l * (l - 1) / 2);
        }
    }

    #[test]
    fn fewest_stops_is_minimal(rows in station_rows(), seed in any::<u64>(), start in 0..10usize, end in 0..10usize) {
        let network = build(&rows, seed);
        let (start, end) = (format!("S{start}"), format!("S{end}"));
        let start_nodes = network.candidates(&start, StationMatch::Exact);
        let end_nodes = network.candidates(&end, StationMatch::Exact);

        let hops = reference_hops(&network, &start_nodes);
        let best = end_nodes.iter().filter_map(|&node| hops[node as usize]).min();

        match find_shortest_path(&network, &start, &end, StationMatch::Exact) {
            Some(route) => {
                assert_valid_route(&network, &route, &start_nodes, &end_nodes);
                prop_assert_eq!(Some(route.stops()), best);
                prop_assert_eq!(route.edge_time_sum(), Some(route.travel_time));
            }
            None => prop_assert_eq!(best, None),
        }
    }

    #[test]
    fn fastest_is_minimal(rows in station_rows(), seed in any::<u64>(), start in 0..10usize, end in 0..10usize) {
        let network = build(&rows, seed);
        let (start, end) = (format!("S{start}"), format!("S{end}"));
        let start_nodes = network.candidates(&start, StationMatch::Exact);
        let end_nodes = network.candidates(&end, StationMatch::Exact);

        let times = reference_times(&network, &start_nodes);
        let best = end_nodes.iter().filter_map(|&node| times[node as usize]).min();

        match find_fastest_path(&network, &start, &end, StationMatch::Exact) {
            Some(route) => {
                assert_valid_route(&network, &route, &start_nodes, &end_nodes);
                prop_assert_eq!(Some(route.travel_time), best);
                prop_assert_eq!(route.edge_time_sum(), Some(route.travel_time));
            }
            None => prop_assert_eq!(best, None),
        }
    }

    #[test]
    fn queries_are_repeatable(rows in station_rows(), seed in any::<u64>(), start in 0..10usize, end in 0..10usize) {
        let network = build(&rows, seed);
        let (start, end) = (format!("S{start}"), format!("S{end}"));

        let first = find_shortest_path(&network, &start, &end, StationMatch::Exact).map(|route| route.nodes);
        let second = find_shortest_path(&network, &start, &end, StationMatch::Exact).map(|route| route.nodes);
        prop_assert_eq!(first, second);

        let first = find_fastest_path(&network, &start, &end, StationMatch::Exact).map(|route| (route.nodes, route.travel_time));
        let second = find_fastest_path(&network, &start, &end, StationMatch::Exact).map(|route| (route.nodes, route.travel_time));
        prop_assert_eq!(first, second);
    }
}
