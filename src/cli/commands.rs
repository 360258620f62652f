// CLI command definitions

use super::preview::{GenerateCommand, PlanCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "preview-gen",
    version,
    about = "Render ArgoCD manifests for a preview environment",
    long_about = "Renders the AppProject, Namespace and Applications of an ephemeral preview \
                  environment from apps.yaml. Without a subcommand it behaves like `generate`, \
                  which makes it usable as an ArgoCD config management plugin.",
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateCommand,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write the preview manifests to stdout (default)
    Generate(GenerateCommand),

    /// Show which revision each service Application will deploy
    Plan(PlanCommand),
}

impl CliArgs {
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or(Commands::Generate(self.generate))
    }
}
