//! SUNDUS terminal dashboard: inject simulated anomalies, replay catalog scenarios,
//! run the virtual sandbox, or keep injecting on an interval until Ctrl+C.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use sundus::{
    config::SundusConfig,
    logging::StructuredLogger,
    render::{render_catalog, render_log, render_status},
    sandbox,
    session::Session,
    tiers::Tier,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sundus", about = "Tiered anomaly alert simulator", version, long_about = None)]
struct Cli {
    /// Config file (falls back to SUNDUS_CONFIG_PATH, then config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// External JSON scenario file, overrides the config
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Emit ndjson instead of the text dashboard
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject random anomalies and show the dashboard
    Inject {
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Replay one catalog scenario by id (e.g. H-03)
    Play { id: String },

    /// Record a synthetic test event in the given tier (1, 2 or 3)
    Force {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        level: u8,
    },

    /// List catalog scenarios
    Scenarios,

    /// Run the virtual sandbox self-check
    Sandbox,

    /// Inject a random anomaly every interval until Ctrl+C
    Watch {
        #[arg(long, default_value = "5")]
        interval_secs: u64,
    },
}

fn render(session: &Session, config: &SundusConfig, json: bool) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        for entry in session.history().iter().rev() {
            StructuredLogger::emit_json(entry, &mut out)?;
        }
        return Ok(());
    }
    render_status(&mut out, session, &config.render)?;
    writeln!(out)?;
    render_log(&mut out, &session.log_rows())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("SUNDUS_CONFIG_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("config.json"));
    // Logging is configured from the file, so a load failure is reported once the subscriber exists.
    let (mut config, config_err) = match SundusConfig::try_load(&config_path) {
        Ok(c) => (c, None),
        Err(e) => (SundusConfig::default(), Some(e)),
    };
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog.clone();
    }

    StructuredLogger::init(config.log.json, &config.log.level);
    if let Some(e) = config_err {
        warn!(error = %e, "config ignored, using defaults");
    }
    info!(config = %config_path.display(), catalog = ?config.catalog_path, "SUNDUS starting");

    let mut session = Session::from_config(&config);

    match cli.command {
        Commands::Inject { count } => {
            for _ in 0..count {
                if session.inject_random().is_none() {
                    break;
                }
            }
            render(&session, &config, cli.json)?;
        }
        Commands::Play { id } => {
            session.play_scenario(&id);
            render(&session, &config, cli.json)?;
        }
        Commands::Force { level } => {
            let tier = Tier::from_level(level).ok_or("tier must be 1, 2 or 3")?;
            session.force_tier(tier);
            render(&session, &config, cli.json)?;
        }
        Commands::Scenarios => {
            let mut out = std::io::stdout().lock();
            match session.generator() {
                Some(g) if cli.json => {
                    for s in g.catalog().iter() {
                        StructuredLogger::emit_json(s, &mut out)?;
                    }
                }
                Some(g) => render_catalog(&mut out, g.catalog())?,
                None => render_status(&mut out, &session, &config.render)?,
            }
        }
        Commands::Sandbox => {
            let Some(generator) = session.generator() else {
                render_status(&mut std::io::stdout().lock(), &session, &config.render)?;
                return Ok(());
            };
            let report = sandbox::run(session.engine(), generator, &config.sandbox);
            if cli.json {
                StructuredLogger::emit_json(&report, &mut std::io::stdout().lock())?;
            } else {
                print!("{}", report);
            }
        }
        Commands::Watch { interval_secs } => {
            if !session.catalog_available() {
                render(&session, &config, cli.json)?;
                return Ok(());
            }
            info!(interval_secs, "watch mode (Ctrl+C to stop)");
            static STOP: AtomicBool = AtomicBool::new(false);
            let _ = ctrlc::set_handler(|| {
                STOP.store(true, Ordering::Relaxed);
            });
            while !STOP.load(Ordering::Relaxed) {
                let Some(entry) = session.inject_random() else {
                    break;
                };
                let mut out = std::io::stdout().lock();
                if cli.json {
                    StructuredLogger::emit_json(entry, &mut out)?;
                } else {
                    render_status(&mut out, &session, &config.render)?;
                    writeln!(out)?;
                }
                drop(out);
                for _ in 0..interval_secs.max(1) {
                    if STOP.load(Ordering::Relaxed) {
                        break;
                    }
                    std::thread::sleep(Duration::from_secs(1));
                }
            }
            if !cli.json {
                render_log(&mut std::io::stdout().lock(), &session.log_rows())?;
            }
            info!(events = session.history().len(), "SUNDUS stopping");
        }
    }

    Ok(())
}
