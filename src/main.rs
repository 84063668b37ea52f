use clap::Parser;
use color_eyre::Result;
use snowgen::{cli::Cli, run};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();
    run::run(Cli::parse()).await
}
