mod api;
mod routes;

use clap::Parser;
use log::{error, info};
use rota::SelectionPolicy;
use rota_load::import_network_json;
use routes::{routes, Shared};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Instant;

/// Serves routes on a road network over HTTP.
#[derive(Parser)]
#[command(name = "rota-service")]
struct Args {
    /// Network file in JSON
    #[arg(default_value = "data/roads.json")]
    network: PathBuf,

    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Number of alternative paths reported per journey segment, the shortest one included
    #[arg(long, default_value_t = 2)]
    alternatives: usize,

    /// Penalty ratio above which the context-weighted route is selected
    #[arg(long, default_value_t = 1.10)]
    penalty_threshold: f64,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let startup_timer = Instant::now();

    let network = match import_network_json(&args.network) {
        Ok(network) => network,
        Err(e) => {
            error!("Failed to load {}: {}", args.network.display(), e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded network with {} nodes and {} roads in {:.3} seconds",
        network.number_of_nodes(),
        network.number_of_edges(),
        startup_timer.elapsed().as_secs_f32()
    );

    let policy = SelectionPolicy {
        penalty_threshold: args.penalty_threshold,
        alternatives: args.alternatives,
        ..SelectionPolicy::default()
    };
    let shared = Shared::new(network, policy);

    let address = SocketAddr::new(args.host, args.port);
    info!("Started service with the bind address {}", address);
    warp::serve(routes(shared)).run(address).await;
}
