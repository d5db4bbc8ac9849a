use crate::config::Config;
use clap::Parser;
use iplookup::Client;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about, author, version)]
pub struct Command {
    /// Path to load the configuration file. Default to ~/.config/iplookup.json.
    /// If not found, loading from environment.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Base url of the lookup service, overrides the configuration file and IPLOOKUP_BASE_URL.
    #[clap(long)]
    base_url: Option<String>,
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: SubCommand,
}

impl Command {
    pub fn config(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("iplookup.json")
        } else {
            PathBuf::from(".iplookup.json")
        }
    }

    pub fn build_client(&self) -> Result<Client, String> {
        let config = Config::load(&self.config(), self.config.is_some())?;
        config
            .build(self.base_url.clone())
            .map_err(|err| err.to_string())
    }
}

#[derive(clap::Subcommand)]
pub enum SubCommand {
    /// Looks up a single address and prints the result
    #[clap()]
    Lookup(crate::lookup::Command),
    /// Looks up the caller, then every line read from stdin
    #[clap()]
    Interactive(crate::interactive::Command),
    /// Checks the lookup service is up
    #[clap()]
    Health,
}

impl Command {
    pub async fn execute(self, client: Client) -> i32 {
        match self.subcmd {
            SubCommand::Lookup(sub) => sub.execute(client).await,
            SubCommand::Interactive(sub) => sub.execute(client).await,
            SubCommand::Health => crate::health::execute(client).await,
        }
    }

    pub fn set_log_level(&self) {
        let filter = if self.verbose {
            EnvFilter::new("iplookup=debug,iplookup_cli=debug")
        } else {
            EnvFilter::from_default_env()
        };
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err:?}");
        }
    }
}
