use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub aws: AwsArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub struct AwsArgs {
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print Terraform configuration for every classic load balancer
    Tf,
    /// Print a tfstate snapshot, optionally merged into an existing one
    Tfstate(TfstateArgs),
    /// Print a summary table of the discovered load balancers
    List,
}

#[derive(clap::Args, Debug)]
pub struct TfstateArgs {
    /// Existing tfstate to merge the generated resources into
    #[arg(long, value_name = "FILE")]
    pub merge: Option<PathBuf>,

    /// Write the merged tfstate back to the --merge file instead of stdout
    #[arg(long, requires = "merge")]
    pub overwrite: bool,
}
