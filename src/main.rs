use std::io::{stdout, Write};
use std::path::PathBuf;

use clap::Parser;

use metro::loader::read_stations_from_path;
use metro::network::TravelTime;
use metro::{find_fastest_path, find_shortest_path, Network, NetworkConfig, StationMatch};

/// Find the route with the fewest stops and the fastest route between two stations.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with "Station" and "Line" columns.
    #[arg(long, default_value = "stations.csv")]
    stations: PathBuf,
    /// Start station. Prompted for if missing.
    #[arg(long)]
    from: Option<String>,
    /// Destination station. Prompted for if missing.
    #[arg(long)]
    to: Option<String>,
    /// Seed for the random travel times between stations.
    #[arg(long)]
    seed: Option<u64>,
    /// Match any station whose "Name (Line)" starts with the given text.
    #[arg(long)]
    prefix: bool,
    #[arg(long, default_value_t = NetworkConfig::default().min_travel_time)]
    min_travel_time: TravelTime,
    #[arg(long, default_value_t = NetworkConfig::default().max_travel_time)]
    max_travel_time: TravelTime,
    #[arg(long, default_value_t = NetworkConfig::default().transfer_time)]
    transfer_time: TravelTime,
}

fn get_station_from_user(network: &Network, prompt: &str, matching: StationMatch) -> Result<String, std::io::Error> {
    loop {
        print!("Enter {prompt} station: ");
        stdout().flush()?;
        let mut name = String::new();
        if std::io::stdin().read_line(&mut name)? == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        let name = name.trim();
        match network.resolve(name, matching) {
            Ok(_) => return Ok(name.to_owned()),
            Err(e) => println!("{e} Please try again."),
        }
    }
}

fn get_station(network: &Network, arg: Option<String>, prompt: &str, matching: StationMatch) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(name) => {
            network.resolve(&name, matching)?;
            Ok(name)
        }
        None => Ok(get_station_from_user(network, prompt, matching)?),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = NetworkConfig {
        min_travel_time: args.min_travel_time,
        max_travel_time: args.max_travel_time,
        transfer_time: args.transfer_time,
    };
    config.validate()?;
    let matching = if args.prefix { StationMatch::Prefix } else { StationMatch::Exact };

    println!("Metro Route Finder");
    let rows = read_stations_from_path(&args.stations)?;
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let network = Network::build(&rows, &config, &mut rng);
    network.print_stats();
    println!();

    let start = get_station(&network, args.from, "start", matching)?;
    let end = get_station(&network, args.to, "destination", matching)?;

    println!();
    println!("Shortest Path (by number of stops)");
    match find_shortest_path(&network, &start, &end, matching) {
        Some(route) => {
            println!("{route}");
            println!("Stops: {}", route.stops());
        }
        None => println!("No route found."),
    }

    println!();
    println!("Fastest Path (by travel time)");
    match find_fastest_path(&network, &start, &end, matching) {
        Some(route) => {
            println!("{route}");
            println!("Time: {} minutes", route.travel_time);
        }
        None => println!("No route found."),
    }

    Ok(())
}
