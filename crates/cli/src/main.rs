mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sitekit")]
#[command(version, about = "Create and deploy sites on a zip-upload hosting provider", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Configure provider credentials
    ///
    /// Stores the access token (and optional host override) in
    /// ~/.sitekit/config.toml.
    Configure,

    /// Inspect and manage sites on the account
    Sites {
        #[command(subcommand)]
        command: SitesCommand,
    },

    /// Deploy a site by uploading a zip bundle
    Deploy {
        /// Site name to deploy
        name: String,

        /// Directory to bundle into {site_id}.zip before uploading.
        /// Without it, an existing {site_id}.zip in the current directory
        /// is uploaded as-is.
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Skip confirmation prompts
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
enum SitesCommand {
    /// List all sites on the account
    List,

    /// Create a new site
    Create {
        /// Name of the site
        name: String,
    },

    /// Print a site's id, looked up by name
    Resolve {
        /// Name of the site
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Configure => commands::configure::run(),
        Command::Sites { command } => match command {
            SitesCommand::List => commands::sites::list(),
            SitesCommand::Create { name } => commands::sites::create(&name),
            SitesCommand::Resolve { name } => commands::sites::resolve(&name),
        },
        Command::Deploy { name, dir, force } => commands::deploy::run(&name, dir, force),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "sitekit", &mut io::stdout());
            Ok(())
        }
    }
}
