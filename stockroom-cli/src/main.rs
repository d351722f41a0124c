use clap::{Parser, Subcommand};
use colored::Colorize;
use stockroom_lib::{
    Error, HttpInventoryApi, Result, SessionStore, config::ClientConfig, sub_branch,
};
use sysexits::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod asset;
mod branch;
mod group;
mod session;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the inventory service URL
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on assets
    #[command(subcommand)]
    Asset(asset::Command),
    /// Operate on branches
    #[command(subcommand)]
    Branch(branch::Command),
    /// Operate on groups
    #[command(subcommand)]
    Group(group::Command),
    /// List the sub-branches allowed for a branch
    SubBranches { branch_name: String },
    /// Operate on the stored session
    #[command(subcommand)]
    Session(session::Command),
    /// Show the client configuration
    Config,
}

/// Everything a command handler may need.
pub struct Context {
    pub cfg: ClientConfig,
    pub api: HttpInventoryApi,
    pub store: SessionStore,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logger: {e}");
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::Ok,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            exit_code(&e)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut cfg = ClientConfig::load()?;
    if let Some(url) = cli.api_url {
        cfg.set_api_url(url);
    }

    let ctx = Context {
        api: HttpInventoryApi::new(cfg.api_url()),
        store: SessionStore::open()?,
        cfg,
    };

    match &cli.command {
        Command::Asset(cmd) => asset::handle(&ctx, cmd).await,
        Command::Branch(cmd) => branch::handle(&ctx, cmd).await,
        Command::Group(cmd) => group::handle(&ctx, cmd).await,
        Command::SubBranches { branch_name } => {
            let default = sub_branch::default_for(branch_name);
            for option in sub_branch::options_for(branch_name) {
                if *option == default {
                    println!("* {} {}", option, "(default)".dimmed());
                } else {
                    println!("  {option}");
                }
            }
            Ok(())
        }
        Command::Session(cmd) => session::handle(&ctx, cmd),
        Command::Config => {
            println!("{} {}", "api_url:".bold(), ctx.cfg.api_url());
            println!("{} {}", "version:".bold(), ctx.cfg.version());
            Ok(())
        }
    }
}

fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::Network(_) | Error::Server { .. } => ExitCode::Unavailable,
        Error::Decode(_) => ExitCode::Protocol,
        Error::Validation(_) => ExitCode::DataErr,
        Error::AssetNotFound(_) | Error::UnknownBranch(_) | Error::UnknownGroup(_) => {
            ExitCode::NoInput
        }
        Error::Io(_) => ExitCode::IoErr,
        Error::TomlDe(_) | Error::TomlSer(_) | Error::NoHomeDir => ExitCode::Config,
    }
}
