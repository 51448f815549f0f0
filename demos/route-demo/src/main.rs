//! route-demo: load a travel network and query it.
//!
//! ```text
//! route-demo --from loc1 --to loc5 --budget 30
//! route-demo --locations locs.csv --segments segs.csv --from a --to b
//! RUST_LOG=tn_conn=debug route-demo --no-cache
//! ```
//!
//! Without `--locations`/`--segments` the bundled six-location sample
//! network is used.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tn_conn::Path;
use tn_core::{ConnConfig, InvalidationPolicy, Miles};
use tn_manager::TravelNetworkManager;
use tn_network::{TravelNetwork, load_network_csv, load_network_reader};

const SAMPLE_LOCATIONS: &str = include_str!("../data/locations.csv");
const SAMPLE_SEGMENTS: &str = include_str!("../data/segments.csv");

/// Shortest-path and bounded-route queries over a travel network.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Locations CSV (`name,kind`).
    #[arg(long, requires = "segments")]
    locations: Option<PathBuf>,

    /// Segments CSV (`name,kind,source,destination,length`).
    #[arg(long, requires = "locations")]
    segments: Option<PathBuf>,

    /// Query origin.
    #[arg(long, default_value = "loc1")]
    from: String,

    /// Query destination.
    #[arg(long, default_value = "loc5")]
    to: String,

    /// Distance budget for route enumeration.
    #[arg(long, default_value_t = 30.0)]
    budget: f64,

    /// Bypass the shortest-path cache.
    #[arg(long)]
    no_cache: bool,

    /// Clear the whole cache on every graph mutation.
    #[arg(long)]
    full_flush: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let network = load(&args)?;
    info!(
        locations = network.location_count(),
        segments = network.segment_count(),
        "network loaded"
    );

    let config = ConnConfig {
        cache_enabled: !args.no_cache,
        invalidation:  if args.full_flush { InvalidationPolicy::FullFlush } else { InvalidationPolicy::Precise },
    };
    info!(cache = config.cache_enabled, invalidation = %config.invalidation, "engine configured");
    let mut mgr = TravelNetworkManager::from_network(network, config);

    for name in [&args.from, &args.to] {
        if mgr.network().location(name).is_none() {
            bail!("unknown location {name:?}");
        }
    }

    println!("shortest path {} -> {}:", args.from, args.to);
    match mgr.shortest_path(&args.from, &args.to) {
        Some(path) => print_path(&path),
        None => println!("  (no route)"),
    }
    // Second query shows the cache at work.
    mgr.shortest_path(&args.from, &args.to);

    let budget = Miles::new(args.budget).context("--budget must be a non-negative number")?;
    let routes = mgr.paths(&args.from, budget);
    println!("\nroutes from {} within {budget} miles: {}", args.from, routes.len());
    for path in &routes {
        print_path(path);
    }

    let stats = mgr.conn().stats();
    println!(
        "\ncache: {} requests, {} hits, {} misses ({:.0}% hit rate)",
        stats.request_count,
        stats.hit_count,
        stats.miss_count,
        stats.hit_rate() * 100.0,
    );

    Ok(())
}

fn load(args: &Args) -> Result<TravelNetwork> {
    match (&args.locations, &args.segments) {
        (Some(locs), Some(segs)) => load_network_csv(locs, segs)
            .with_context(|| format!("loading {} and {}", locs.display(), segs.display())),
        _ => load_network_reader(Cursor::new(SAMPLE_LOCATIONS), Cursor::new(SAMPLE_SEGMENTS))
            .context("loading bundled sample network"),
    }
}

fn print_path(path: &Path) {
    println!("  {:>6} mi  {path}", path.length().value());
}
