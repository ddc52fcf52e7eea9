use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use formulary::config::ServerConfig;
use formulary::{AppState, create_app};
use formulary_core::{CompoundTable, read_compound_table};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formulary")]
#[command(about = "Look up chemical formulas by compound name from a spreadsheet", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Spreadsheet holding the compound table
    #[arg(short, long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long)]
    host: Option<String>,

    /// Port to bind the HTTP server to
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging and per-request traces
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server (default)
    Serve,
    /// Print the normalized compound table and exit
    Show,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(source) = &self.source {
            config.source_path = source.clone();
        }
        if let Some(sheet) = &self.sheet {
            config.sheet = Some(sheet.clone());
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.debug {
            config.debug = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    init_tracing(config.debug);

    let table = read_compound_table(&config.source_path, &config.read_options())
        .with_context(|| {
            format!(
                "Failed to load compound table from {}",
                config.source_path.display()
            )
        })?;

    info!(
        path = %config.source_path.display(),
        records = table.len(),
        "Loaded compound table"
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, table).await,
        Command::Show => {
            print_table(&table);
            Ok(())
        }
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "formulary=debug,formulary_core=debug,tower_http=debug"
    } else {
        "formulary=info,formulary_core=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .init();
}

async fn serve(config: &ServerConfig, table: CompoundTable) -> Result<()> {
    let app = create_app(AppState::new(table));
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "Formula lookup server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Print the table as aligned name/formula columns
fn print_table(table: &CompoundTable) {
    let name_width = table
        .records()
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    println!(
        "{}",
        format!("{:>5}  {:<name_width$}  Formula", "#", "Name").bold()
    );
    for (index, record) in table.records().iter().enumerate() {
        println!(
            "{:>5}  {:<name_width$}  {}",
            index,
            record.name,
            record.formula.cyan()
        );
    }

    if table.is_empty() {
        println!("{}", "No compounds loaded".yellow());
    }
}
