use clap::Parser;
use log::error;
use rota::{Idx, RoadNetwork, RoutingError, SelectionPolicy, Strategy, VehicleClass};
use rota_load::import_network_json;
use std::path::PathBuf;
use std::time::Instant;

/// Loads a road network and optionally compares the routing strategies between two nodes.
#[derive(Parser)]
#[command(name = "rota-load")]
struct Args {
    /// Network file in JSON
    network: PathBuf,

    /// Start node of the comparison
    #[arg(long, requires = "to")]
    from: Option<Idx>,

    /// Goal node of the comparison
    #[arg(long, requires = "from")]
    to: Option<Idx>,

    #[arg(long, default_value_t = VehicleClass::Motorcycle)]
    vehicle: VehicleClass,

    /// Number of alternative paths to list, the shortest one included
    #[arg(long, default_value_t = 2)]
    alternatives: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let load_timer = Instant::now();

    let mut network = match import_network_json(&args.network) {
        Ok(network) => network,
        Err(e) => {
            error!("Failed to load {}: {}", args.network.display(), e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded network with {} nodes and {} roads in {:.3} seconds",
        network.number_of_nodes(),
        network.number_of_edges(),
        load_timer.elapsed().as_secs_f32()
    );

    let violations = network.integrity_violations();
    if violations.is_empty() {
        println!("Network is consistent");
    } else {
        println!("Network has {} integrity violations", violations.len());
    }

    if let (Some(from), Some(to)) = (args.from, args.to) {
        let policy = SelectionPolicy {
            alternatives: args.alternatives,
            ..SelectionPolicy::default()
        };
        if let Err(e) = compare(&mut network, &policy, from, to, args.vehicle) {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn compare(
    network: &mut RoadNetwork,
    policy: &SelectionPolicy,
    from: Idx,
    to: Idx,
    vehicle: VehicleClass,
) -> Result<(), RoutingError> {
    let timer = Instant::now();
    let segment = policy.compare_segment(network, from, to, vehicle)?;

    println!();
    println!(
        "{} -> {} for a {} ({:.1} ms)",
        network.node(from)?.name,
        network.node(to)?.name,
        vehicle,
        timer.elapsed().as_secs_f64() * 1000.0
    );
    println!(
        "{:<28}{:>12}{:>12}{:>10}{:>10}",
        "algorithm", "distance", "cost", "visited", "edges"
    );
    for strategy in Strategy::ALL.iter() {
        let route = segment.route(*strategy);
        let marker = if *strategy == segment.selected { "*" } else { " " };
        println!(
            "{}{:<27}{:>12.3}{:>12.3}{:>10}{:>10}",
            marker,
            strategy.name(),
            route.distance(),
            route.cost,
            route.stats.nodes_visited,
            route.stats.edges_examined
        );
    }

    for (rank, alternative) in segment.alternatives.iter().enumerate() {
        let path: Vec<String> = alternative.path.iter().map(|id| id.to_string()).collect();
        println!(
            "path {}: {:.3} km via {}",
            rank + 1,
            alternative.cost,
            path.join(" -> ")
        );
    }
    Ok(())
}
