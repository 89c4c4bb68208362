#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
//! `Holdprint` CLI - fingerprint climbing routes and find them again
//!
//! Usage:
//!   `holdprint add-route routes.json --name "Crimp Line"`
//!   `holdprint add-image routes.json <route-id> --points "0.2,0.1 0.7,0.3 0.4,0.9"`
//!   `holdprint search routes.json --points "0.2,0.1 0.7,0.3 0.4,0.9"`

mod logging;
mod output;
mod points;
mod store;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use holdprint_core::config::DEFAULT_CONFIG_FILE;
use holdprint_core::{explain, normalize, Error, HoldprintConfig};

use output::OutputFormat;
use points::PointList;

#[derive(Parser)]
#[command(name = "holdprint")]
#[command(
    author,
    version,
    about = "Holdprint CLI - match climbing routes by tapped hold positions"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "HOLDPRINT_CONFIG")]
    config: PathBuf,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized fingerprint of a point list
    Normalize {
        /// Points as "x,y x,y ..."
        #[arg(long, allow_hyphen_values = true)]
        points: PointList,
    },

    /// Create an empty route and print its id
    AddRoute {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Add a tapped reference image to a route and print its id
    AddImage {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Route to attach the image to
        route_id: String,

        /// Points as "x,y x,y ..."
        #[arg(long, allow_hyphen_values = true)]
        points: PointList,

        /// Reference to the stored photo
        #[arg(long, default_value = "")]
        photo: String,
    },

    /// Delete a route and all of its images
    RemoveRoute {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Route to delete
        route_id: String,
    },

    /// Delete one image from a route
    RemoveImage {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Route owning the image
        route_id: String,

        /// Image to delete
        image_id: String,
    },

    /// List stored routes
    List {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Rank stored routes against a tapped query
    Search {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Query points as "x,y x,y ..."
        #[arg(long, allow_hyphen_values = true)]
        points: PointList,

        /// Number of results (overrides search.top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Distance at which set similarity reaches 0 (overrides search.max_distance)
        #[arg(long)]
        max_distance: Option<f64>,

        /// Set similarity weight (overrides search.set_weight)
        #[arg(long)]
        set_weight: Option<f64>,

        /// Order similarity weight (overrides search.order_weight)
        #[arg(long)]
        order_weight: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show how a query scores against each image of one route
    Explain {
        /// Path to the route store (JSON)
        store: PathBuf,

        /// Route to explain
        route_id: String,

        /// Query points as "x,y x,y ..."
        #[arg(long, allow_hyphen_values = true)]
        points: PointList,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Search flags that override the loaded configuration.
struct SearchOverrides {
    top_k: Option<usize>,
    max_distance: Option<f64>,
    set_weight: Option<f64>,
    order_weight: Option<f64>,
}

impl SearchOverrides {
    /// Applies each flag that was given on top of `config`, then re-validates.
    fn apply(self, config: &HoldprintConfig) -> anyhow::Result<HoldprintConfig> {
        let mut merged = config.clone();
        if let Some(top_k) = self.top_k {
            merged.search.top_k = top_k;
        }
        if let Some(max_distance) = self.max_distance {
            merged.search.max_distance = max_distance;
        }
        if let Some(set_weight) = self.set_weight {
            merged.search.set_weight = set_weight;
        }
        if let Some(order_weight) = self.order_weight {
            merged.search.order_weight = order_weight;
        }
        merged.validate().map_err(Error::from)?;
        Ok(merged)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = HoldprintConfig::load_from_path(&cli.config)
        .map_err(Error::from)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    config.validate().map_err(Error::from)?;
    logging::init(&config.logging)?;

    run(cli.command, &config)
}

fn run(command: Commands, config: &HoldprintConfig) -> anyhow::Result<()> {
    match command {
        Commands::Normalize { points } => {
            output::print_points(&normalize(&points.0))?;
        }
        Commands::AddRoute { store: path, name } => {
            let catalog = store::load(&path)?;
            let id = catalog.add_route(name);
            store::save(&path, &catalog)?;
            println!("{id}");
        }
        Commands::AddImage {
            store: path,
            route_id,
            points,
            photo,
        } => {
            let catalog = store::load(&path)?;
            let image_id = catalog.add_image(&route_id, photo, points.into_inner())?;
            store::save(&path, &catalog)?;
            println!("{image_id}");
        }
        Commands::RemoveRoute {
            store: path,
            route_id,
        } => {
            let catalog = store::load(&path)?;
            let removed = catalog.delete_route(&route_id)?;
            store::save(&path, &catalog)?;
            eprintln!("{} {}", "Removed route".green(), removed.name);
        }
        Commands::RemoveImage {
            store: path,
            route_id,
            image_id,
        } => {
            let catalog = store::load(&path)?;
            catalog.delete_image(&route_id, &image_id)?;
            store::save(&path, &catalog)?;
            eprintln!("{} {}", "Removed image".green(), image_id);
        }
        Commands::List {
            store: path,
            format,
        } => {
            let catalog = store::load(&path)?;
            output::print_routes(&catalog.snapshot(), format)?;
        }
        Commands::Search {
            store: path,
            points,
            top_k,
            max_distance,
            set_weight,
            order_weight,
            format,
        } => {
            let merged = SearchOverrides {
                top_k,
                max_distance,
                set_weight,
                order_weight,
            }
            .apply(config)?;
            run_search(&path, &points, &merged, format)?;
        }
        Commands::Explain {
            store: path,
            route_id,
            points,
            format,
        } => {
            let catalog = store::load(&path)?;
            let route = catalog
                .get(&route_id)
                .ok_or_else(|| Error::RouteNotFound(route_id.clone()))?;
            let scores = explain(&points.0, &route, &config.search.options());
            output::print_explain(&route, &scores, format)?;
        }
    }

    Ok(())
}

fn run_search(
    path: &Path,
    points: &PointList,
    config: &HoldprintConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = store::load(path)?;
    let snapshot = catalog.snapshot();
    let options = config.search.options();

    #[cfg(feature = "parallel")]
    let results =
        holdprint_core::search_parallel(&points.0, &snapshot, config.search.top_k, &options);
    #[cfg(not(feature = "parallel"))]
    let results = holdprint_core::search(&points.0, &snapshot, config.search.top_k, &options);

    output::print_results(&results, format)
}
