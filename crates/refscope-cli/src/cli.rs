use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "refscope",
    about = "Classify version-control reference names",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Fail when any name is invalid
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify reference names given as arguments or on stdin
    Classify(ClassifyArgs),
    /// Build a canonical reference name from a short name
    Build(BuildArgs),
    /// Show the effective configuration
    Config,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Names to classify; reads one per line from stdin when omitted
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct BuildArgs {
    #[arg(value_enum)]
    pub kind: BuildKind,
    /// Short name, e.g. `feature/cool`
    pub short: String,
    /// Enclosing namespace, outermost first; may be repeated
    #[arg(short, long = "namespace")]
    pub namespaces: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BuildKind {
    Branch,
    Tag,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_with_namespaces() {
        let cli = Cli::try_parse_from([
            "refscope", "build", "branch", "feature/cool", "-n", "bar", "--namespace", "foo",
        ])
        .unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.kind, BuildKind::Branch);
                assert_eq!(args.short, "feature/cool");
                assert_eq!(args.namespaces, ["bar", "foo"]);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["refscope", "classify", "HEAD", "--format", "json", "--strict"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.strict);
        assert!(!cli.no_color);
    }
}
