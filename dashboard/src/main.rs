//! Dashboard entry point
//!
//! Serves the dashboard by default; `land` and `education` print a single
//! estimate and exit.

use clap::{Parser, Subcommand};
use shared::{ComponentId, component_info, logging};

use dashboard::{
    Dashboard, DashboardConfig, DashboardResult, RealAssetStore, cli,
    config::{DEFAULT_ASSETS_DIR, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT},
};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Regeneration Generation impact dashboard")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "DASHBOARD_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory holding the map image and PDFs
    #[arg(long, env = "DASHBOARD_ASSETS_DIR", default_value = DEFAULT_ASSETS_DIR)]
    assets_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DASHBOARD_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP dashboard (default)
    Serve,
    /// Print the land impact of regenerating some acres
    Land {
        #[arg(long)]
        acres: u32,
    },
    /// Print the toolkit budget for reaching some children
    Education {
        #[arg(long)]
        children: u64,
    },
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    // A missing .env is fine
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = DashboardConfig::new(&args.host, args.port, &args.assets_dir, &args.log_level)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            ComponentId::init_server();
            logging::init_tracing_with_level(Some(&config.log_level));
            logging::log_startup(ComponentId::current(), "Regeneration Generation dashboard");

            let asset_store = RealAssetStore::new(&config.assets_dir);
            let dashboard = Dashboard::new(config, asset_store);

            if let Err(e) = dashboard.run().await {
                logging::log_error(ComponentId::current(), "Dashboard", &e);
                return Err(e);
            }

            logging::log_success(ComponentId::current(), "Dashboard stopped gracefully");
        }
        Command::Land { acres } => {
            ComponentId::init_cli();
            logging::init_tracing_with_level(Some(&config.log_level));
            component_info!(ComponentId::current(), "Estimating land impact for {} acres", acres);
            println!("{}", cli::land_report(acres)?);
        }
        Command::Education { children } => {
            ComponentId::init_cli();
            logging::init_tracing_with_level(Some(&config.log_level));
            component_info!(ComponentId::current(), "Estimating toolkit budget for {} children", children);
            println!("{}", cli::education_report(children)?);
        }
    }

    Ok(())
}
