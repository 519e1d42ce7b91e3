//! PokeAPI CLI - query the PokeAPI from the command line

use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use pokeapi::{
    ApiResponse, ClientConfig, DEFAULT_BASE_URL, DEFAULT_LIMIT, Gateway, Lookup, Pagination,
    PokeApi, Resource, RestMethod,
};
use strum::IntoEnumIterator;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable consulted when `--base-url` is not given.
const BASE_URL_ENV: &str = "POKEAPI_BASE_URL";

#[derive(Parser)]
#[command(name = "pokeapi")]
#[command(about = "Query the PokeAPI reference data service", long_about = None)]
struct Cli {
    /// Base URL of the API [env: POKEAPI_BASE_URL] [default: https://pokeapi.co/api/v2]
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Accept any TLS certificate the server presents
    #[arg(long, global = true)]
    danger_accept_invalid_certs: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every resource kind and how it can be looked up
    Resources,

    /// List one page of a resource kind
    List {
        /// Resource kind (e.g. "pokemon", "egg-group")
        #[arg(value_name = "RESOURCE")]
        resource: Resource,

        /// Page size
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Number of entries to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// Fetch one resource by id or name
    Get {
        /// Resource kind (e.g. "ability", "pokemon-species")
        #[arg(value_name = "RESOURCE")]
        resource: Resource,

        /// Numeric id or name
        #[arg(value_name = "ID_OR_NAME")]
        lookup: Lookup,
    },

    /// Fetch the location areas where a Pokémon can be encountered
    Encounters {
        /// Pokémon id or name
        #[arg(value_name = "POKEMON")]
        pokemon: Lookup,
    },

    /// Send a request to an arbitrary path under the base URL
    Raw {
        /// Path starting with "/", query string included
        #[arg(value_name = "PATH")]
        path: String,

        /// HTTP method
        #[arg(short = 'X', long, default_value_t = RestMethod::Get)]
        method: RestMethod,

        /// Request body (sent for POST and PUT only)
        #[arg(short, long)]
        body: Option<String>,
    },
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,pokeapi=info".to_string(),
            2 => "info,pokeapi=debug".to_string(),
            _ => "debug,pokeapi=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Resolve the base URL: `--base-url`, then `POKEAPI_BASE_URL`, then the public API.
fn resolve_base_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(BASE_URL_ENV).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn build_api(cli: &Cli) -> Result<PokeApi> {
    let base_url = resolve_base_url(cli.base_url.clone());
    let mut config = ClientConfig::parse(&base_url)
        .wrap_err_with(|| format!("Invalid base URL: {base_url}"))?
        .danger_accept_invalid_certs(cli.danger_accept_invalid_certs);
    if let Some(secs) = cli.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }

    tracing::debug!(base_url = %config.base_url(), "using base URL");

    let gateway = Gateway::with_config(config).wrap_err("Failed to build HTTP client")?;
    Ok(PokeApi::with_gateway(gateway))
}

fn print_resources() {
    println!("{:<28} LOOKUP", "RESOURCE");
    for resource in Resource::iter() {
        let lookup = if resource.has_name_lookup() {
            "id, name"
        } else {
            "id"
        };
        println!("{:<28} {lookup}", resource.segment());
    }
}

fn render(response: &ApiResponse, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(response)?
    } else {
        serde_json::to_string_pretty(response)?
    };
    Ok(rendered)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    let response = match &cli.command {
        Commands::Resources => {
            print_resources();
            return Ok(());
        }
        Commands::List {
            resource,
            limit,
            offset,
        } => {
            let api = build_api(&cli)?;
            api.list(*resource, Pagination::new(*limit, *offset)).await
        }
        Commands::Get { resource, lookup } => {
            let api = build_api(&cli)?;
            api.get(*resource, lookup.clone()).await
        }
        Commands::Encounters { pokemon } => {
            let api = build_api(&cli)?;
            api.encounters(pokemon.clone()).await
        }
        Commands::Raw { path, method, body } => {
            let api = build_api(&cli)?;
            let path = if path.starts_with('/') {
                path.clone()
            } else {
                format!("/{path}")
            };
            match method {
                RestMethod::Get => api.raw(&path).await,
                _ => api.gateway().execute(&path, *method, body.as_deref()).await,
            }
        }
    };

    println!("{}", render(&response, cli.compact)?);

    if let Some(failure) = response.failure() {
        tracing::warn!(kind = ?failure.kind(), "request failed");
        std::process::exit(1);
    }

    Ok(())
}
