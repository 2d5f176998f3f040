use anyhow::Context;
use axum::Router;
use clap::{Parser, Subcommand};
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;
use sitepack::config::Config;
use sitepack::mode::BuildMode;
use sitepack::site::Site;
use std::path::Path;
use std::{collections::HashSet, fs, net::SocketAddr, time::Duration};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about, version)]
struct Args {
    /// command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// bundle the pages and assets into the output directory
    Build {
        /// production mode: "./" public path, minification on
        #[arg(long)]
        production: bool,
    },
    /// serve the output directory
    Serve {
        /// override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// watch for updates and re-bundle on changes
    Watch {
        /// production mode: "./" public path, minification on
        #[arg(long)]
        production: bool,
    },
    /// clean up the generated files
    Clean,
}

#[tokio::main]
async fn main() {
    let figment =
        Figment::from(Serialized::defaults(Config::default())).merge(Toml::file("sitepack.toml"));
    let args = Args::parse();
    match args.command {
        Commands::Serve { port } => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "sitepack=debug,tower_http=debug".into()),
                )
                .with(tracing_subscriber::fmt::layer())
                .init();
            match figment.extract::<Config>() {
                Ok(config) => {
                    let port = port.unwrap_or(config.server.port);
                    tokio::join!(serve(using_serve_dir(&config), port));
                }
                Err(err) => tracing::error!("Failed to read config: {err}"),
            }
        }
        Commands::Build { production } => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
            if let Err(err) = bundle(&figment, BuildMode::from_flag(production)) {
                log::error!("Encountered error `{err}`");
            }
        }
        Commands::Watch { production } => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
            if let Err(err) = watch(&figment, BuildMode::from_flag(production)) {
                log::error!("Encountered error `{err:?}`");
            }
        }
        Commands::Clean => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
            match figment.extract::<Config>() {
                Ok(config) => {
                    if let Err(err) = fs::remove_dir_all(&config.structure.output) {
                        log::error!("Encountered error `{err}`");
                    }
                }
                Err(err) => log::error!("Failed to read config: {err}"),
            }
        }
    }
}

fn bundle(figment: &Figment, mode: BuildMode) -> anyhow::Result<()> {
    let config: Config = figment.extract().context("reading sitepack.toml")?;
    Site::new(config, mode)?.build()?;
    Ok(())
}

fn watch(figment: &Figment, mode: BuildMode) -> anyhow::Result<()> {
    let config: Config = figment.extract().context("reading sitepack.toml")?;
    let (tx, rx) = std::sync::mpsc::channel();

    let mut debouncer = new_debouncer(Duration::from_secs(2), None, tx)?;

    for dir in [
        &config.structure.pages,
        &config.structure.scripts,
        &config.structure.styles,
        &config.structure.images,
    ] {
        if Path::new(dir).is_dir() {
            debouncer
                .watcher()
                .watch(dir.as_ref(), RecursiveMode::Recursive)?;
        } else {
            log::info!("No `{dir}` directory, not watching it");
        }
    }

    for res in rx {
        match res {
            Ok(event) => {
                let updated: HashSet<_> = event.into_iter().flat_map(|e| e.paths.clone()).collect();
                log::info!("Changes in: {updated:?}");
                log::info!("Rebuilding");
                if let Err(err) = bundle(figment, mode) {
                    log::error!("Rebuild failed `{err}`");
                }
            }
            Err(error) => {
                log::error!("Error received `{error:?}`");
            }
        }
    }
    Ok(())
}

fn using_serve_dir(config: &Config) -> Router {
    let router = Router::new().nest_service("/", ServeDir::new(&config.structure.output));
    if config.server.compress {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}

async fn serve(app: Router, port: u16) {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app.layer(TraceLayer::new_for_http()))
        .await
        .unwrap();
}
