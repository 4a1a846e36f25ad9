pub mod station;

pub use station::Station;

pub mod network;

pub use network::{Network, StationMatch};

pub mod builder;

pub use builder::{NetworkConfig, StationRow};

pub mod route;

pub use route::{Route, RouteError};

pub mod bfs;

pub use bfs::find_shortest_path;

pub mod dijkstra;

pub use dijkstra::find_fastest_path;

pub mod loader;
