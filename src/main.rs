use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use curio_core::ItemForm;
use curio_lib::bootstrap::{self, tracing::init_tracing_subscriber, AppRuntime};
use curio_lib::commands::{availability, catalog, watch};
use curio_lib::view::{render_catalog, render_item, render_status, TerminalView};

#[derive(Debug, Parser)]
#[command(name = "curio", version, about = "Curio storefront: catalog and sales hours")]
struct Cli {
    /// Config file (default: <config dir>/curio/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every item with its status
    List,
    /// List items that can be bought right now
    Available,
    /// Buy an enabled item
    Buy { id: String },
    /// Switch an item between inactive and enabled
    Toggle { id: String },
    /// Add a new (inactive) item
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        image_url: String,
        /// Comma-separated gallery image URLs
        #[arg(long, default_value = "")]
        gallery: String,
    },
    /// Show whether the shop is open and when it opens next
    Status {
        /// Evaluate at this local time instead of now ("2024-06-03 09:30")
        #[arg(long, value_parser = parse_local_datetime)]
        at: Option<NaiveDateTime>,
    },
    /// Follow the sales clock and catalog changes
    Watch {
        /// Stop after this many seconds (default: until Ctrl+C)
        #[arg(long)]
        seconds: Option<u64>,
    },
}

fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
        .ok_or_else(|| format!("expected a local time like \"2024-06-03 09:30\", got \"{value}\""))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match bootstrap::resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let now_override = match &cli.command {
        Command::Status { at } => *at,
        _ => None,
    };

    let deps = match bootstrap::wire_dependencies(&config, now_override) {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to wire dependencies");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let runtime = AppRuntime::new(deps);

    match run(&runtime, cli.command, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(runtime: &AppRuntime, command: Command, json: bool) -> Result<(), String> {
    let sales_open = || runtime.usecases().get_sales_status().is_open();

    match command {
        Command::List => {
            let items = catalog::list_items(runtime).await?;
            print_output(&items, json, || render_catalog(&items, sales_open()))
        }
        Command::Available => {
            let items = catalog::list_available_items(runtime).await?;
            print_output(&items, json, || render_catalog(&items, true))
        }
        Command::Buy { id } => {
            let item = catalog::purchase_item(runtime, &id).await?;
            print_output(&item, json, || format!("Purchased:\n{}\n", render_item(&item, false)))
        }
        Command::Toggle { id } => {
            let item = catalog::toggle_item_status(runtime, &id).await?;
            print_output(&item, json, || {
                format!("Now {}:\n{}\n", item.status, render_item(&item, sales_open()))
            })
        }
        Command::Create {
            name,
            description,
            price,
            image_url,
            gallery,
        } => {
            let form = ItemForm {
                name,
                description,
                price,
                image_url,
                gallery_urls: gallery,
            };
            let item = catalog::create_item(runtime, form).await?;
            print_output(&item, json, || format!("Created:\n{}\n", render_item(&item, false)))
        }
        Command::Status { .. } => {
            let report = availability::get_sales_status(runtime);
            print_output(&report, json, || {
                format!("{}\n", render_status(&report.status, &report.window))
            })
        }
        Command::Watch { seconds } => {
            let window = runtime.usecases().get_sales_status().describe_window();
            let view = Arc::new(TerminalView::new(io::stdout(), window));
            watch::watch_storefront(runtime, view, seconds.map(Duration::from_secs)).await
        }
    }
}

fn print_output<T: Serialize>(
    value: &T,
    json: bool,
    text: impl FnOnce() -> String,
) -> Result<(), String> {
    if json {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| format!("failed to encode output: {e}"))?;
        println!("{rendered}");
    } else {
        print!("{}", text());
    }
    Ok(())
}
