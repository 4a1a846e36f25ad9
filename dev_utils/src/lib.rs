use metro::loader::{read_stations_from_path, LoadError};
use metro::{Network, NetworkConfig, StationRow};

// Common example data for the tests and benchmarks.

pub const EXAMPLE_SEED: u64 = 2024;

pub fn load_example_stations() -> Result<Vec<StationRow>, LoadError> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/singapore_mrt.csv");
    read_stations_from_path(path)
}

pub fn build_example_network(rows: &[StationRow]) -> Network {
    let mut rng = fastrand::Rng::with_seed(EXAMPLE_SEED);
    Network::build(rows, &NetworkConfig::default(), &mut rng)
}

pub fn get_example_start() -> &'static str {
    "Boon Lay"
}

pub fn get_example_end() -> &'static str {
    "Punggol"
}

pub fn get_example_scenario() -> (Network, &'static str, &'static str) {
    let rows = load_example_stations().unwrap();
    let network = build_example_network(&rows);
    (network, get_example_start(), get_example_end())
}

/// A grid of `num_lines` horizontal and `num_lines` vertical lines, each with `stations_per_line` stations.
/// Horizontal line `h` and vertical line `v` cross at station "X{h}_{v}".
pub fn grid_rows(num_lines: usize, stations_per_line: usize) -> Vec<StationRow> {
    assert!(stations_per_line >= num_lines, "Every line needs a station at each crossing.");
    let mut rows = Vec::with_capacity(2 * num_lines * stations_per_line);
    for h in 0..num_lines {
        for s in 0..stations_per_line {
            let station = if s < num_lines { format!("X{h}_{s}") } else { format!("H{h}_{s:04}") };
            rows.push(StationRow::new(&station, &format!("H{h}")));
        }
    }
    for v in 0..num_lines {
        for s in 0..stations_per_line {
            let station = if s < num_lines { format!("X{s}_{v}") } else { format!("V{v}_{s:04}") };
            rows.push(StationRow::new(&station, &format!("V{v}")));
        }
    }
    rows
}

pub fn get_grid_scenario(num_lines: usize, stations_per_line: usize) -> (Network, String, String) {
    let rows = grid_rows(num_lines, stations_per_line);
    let network = Network::build(&rows, &NetworkConfig::default(), &mut fastrand::Rng::with_seed(EXAMPLE_SEED));
    let start = format!("H0_{:04}", stations_per_line - 1);
    let end = format!("V{}_{:04}", num_lines - 1, stations_per_line - 1);
    (network, start, end)
}
