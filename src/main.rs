mod cli;

use std::io::Write;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use elbform::generate::{read_tfstate_base, write_tfstate};
use elbform::{AwsElbSource, AwsSettings, load_load_balancers, output, tf, tfstate};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = AwsSettings {
        region: cli.aws.region,
        profile: cli.aws.profile,
    };
    let source = AwsElbSource::from_settings(&settings).await;

    let rendered = match cli.command {
        Command::Tf => tf(&source).await?,
        Command::Tfstate(args) => {
            let base = args.merge.as_deref().map(read_tfstate_base).transpose()?;
            let tfstate = tfstate(&source, base.as_deref()).await?;

            if let (true, Some(path)) = (args.overwrite, args.merge.as_deref()) {
                write_tfstate(path, &tfstate)?;
                tracing::info!(path = %path.display(), "tfstate written");
                return Ok(());
            }
            tfstate + "\n"
        }
        Command::List => {
            let load_balancers = load_load_balancers(&source).await?;
            output::summary_table(&load_balancers) + "\n"
        }
    };

    std::io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}
