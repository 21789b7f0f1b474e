use analytics::{
    AnalyticsEngine, DepartmentCostParams, ExpensiveToolsParams, LowUsageParams, OverviewParams,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use configuration::Config;
use database::{InMemoryStore, InventoryStore, ToolRepository};
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use web_server::AppState;

mod render;

/// The main entry point for the Toolspend application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = configuration::load_config_from(&cli.config)?;
    let _log_guard = web_server::telemetry::init_tracing(&config.logging);

    match cli.command {
        Commands::Serve(args) => handle_serve(args, &config).await,
        Commands::Report(args) => handle_report(args, &config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Software-tool inventory spend and usage analytics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Compute a report once and print it.
    Report(ReportArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Listen address; defaults to the configured server host and port.
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Serve from a JSON inventory snapshot instead of PostgreSQL.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    Departments,
    Expensive,
    Categories,
    LowUsage,
    Vendors,
    All,
}

#[derive(Args)]
struct ReportArgs {
    /// Which report to compute.
    #[arg(value_enum)]
    kind: ReportKind,

    /// Read the inventory from a JSON snapshot instead of PostgreSQL.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Department report sort column.
    #[arg(long)]
    sort_by: Option<String>,

    /// Department report sort direction (asc or desc).
    #[arg(long)]
    order: Option<String>,

    /// Number of expensive tools to show (1-100).
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Only rank tools costing at least this much per month.
    #[arg(long, allow_negative_numbers = true)]
    min_cost: Option<Decimal>,

    /// Low-usage threshold: tools with at most this many users.
    #[arg(long, allow_negative_numbers = true)]
    max_users: Option<i64>,
}

impl ReportArgs {
    /// Builds validated report parameters, falling back to configured defaults.
    fn overview_params(&self, config: &Config) -> anyhow::Result<OverviewParams> {
        Ok(OverviewParams {
            departments: DepartmentCostParams::parse(self.sort_by.as_deref(), self.order.as_deref())?,
            expensive_tools: ExpensiveToolsParams::new(
                self.limit.or(Some(i64::from(config.analytics.expensive_tools_limit))),
                self.min_cost,
            )?,
            low_usage: LowUsageParams::new(
                self.max_users.or(Some(i64::from(config.analytics.low_usage_max_users))),
            )?,
        })
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn open_store(snapshot: Option<&Path>, config: &Config) -> anyhow::Result<Arc<dyn InventoryStore>> {
    match snapshot {
        Some(path) => Ok(Arc::new(InMemoryStore::from_json_file(path)?)),
        None => {
            let pool = database::connect(&config.database).await?;
            database::run_migrations(&pool).await?;
            Ok(Arc::new(ToolRepository::new(pool)))
        }
    }
}

async fn handle_serve(args: ServeArgs, config: &Config) -> anyhow::Result<()> {
    let store = open_store(args.snapshot.as_deref(), config).await?;
    let state = Arc::new(AppState::new(store, config.analytics.clone()));
    let addr = args.addr.unwrap_or_else(|| config.server.addr());
    web_server::serve(addr, state).await
}

async fn handle_report(args: ReportArgs, config: &Config) -> anyhow::Result<()> {
    // Validate before touching storage.
    let params = args.overview_params(config)?;
    let store = open_store(args.snapshot.as_deref(), config).await?;
    let tools = store.fetch_active_tools().await?;
    tracing::info!(tools = tools.len(), report = ?args.kind, "Computing report.");

    let engine = AnalyticsEngine::new();
    let output = match args.kind {
        ReportKind::Departments => {
            let report = engine.department_costs(&tools, &params.departments);
            render::output(&report, args.json, render::department_costs)?
        }
        ReportKind::Expensive => {
            let report = engine.expensive_tools(&tools, &params.expensive_tools);
            render::output(&report, args.json, render::expensive_tools)?
        }
        ReportKind::Categories => {
            let report = engine.tools_by_category(&tools);
            render::output(&report, args.json, render::tools_by_category)?
        }
        ReportKind::LowUsage => {
            let report = engine.low_usage_tools(&tools, &params.low_usage);
            render::output(&report, args.json, render::low_usage_tools)?
        }
        ReportKind::Vendors => {
            let report = engine.vendor_summary(&tools);
            render::output(&report, args.json, render::vendor_summary)?
        }
        ReportKind::All => {
            let overview = engine.overview(&tools, &params);
            render::output(&overview, args.json, render::overview)?
        }
    };

    println!("{output}");
    Ok(())
}
