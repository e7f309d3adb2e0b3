use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, list};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelog")]
#[command(about = "Reelog - Browse your media review log from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, filter, sort and print the review list (one-shot)
    #[command(long_about = "Fetch the review document once, apply the query and sort mode, and print the result. Output is a table for humans, the record set for --output json, or a standalone page with --html.")]
    List {
        /// Endpoint serving the reviews JSON document (overrides config)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Free-text query; keeps reviews whose title, year, summary or tags contain it
        #[arg(long, short = 'Q', value_name = "TEXT")]
        query: Option<String>,

        /// Sort order
        #[arg(long, value_name = "MODE", value_parser = ["rating", "title", "newest"])]
        sort: Option<String>,

        /// Emit a standalone HTML page instead of terminal output
        #[arg(long, action = ArgAction::SetTrue)]
        html: bool,
    },
    /// Load the reviews once, then filter and sort them interactively
    #[command(long_about = "Fetch the review document once and enter an interactive loop: change the query or sort mode and the list is re-filtered, re-sorted and re-rendered from the in-memory record set. No re-fetch happens until the next run.")]
    Browse {
        /// Endpoint serving the reviews JSON document (overrides config)
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },
    /// View or create configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration and where it was loaded from
    Show,

    /// Write a default config file to the standard location
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::List {
            url,
            query,
            sort,
            html,
        } => list::run_list(url, query, sort, html, &output).await,
        Commands::Browse { url } => browse::run_browse(url, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output)
        }
    }
}
