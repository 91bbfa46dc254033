//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Build DelvForge utility stylesheets from design tokens.
#[derive(Debug, Parser)]
#[command(name = "delvforge", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one stylesheet
    Build(BuildArgs),
    /// Build the default, prefixed and modern stylesheets plus build-info.json
    Presets(PresetsArgs),
    /// List the theme variant names, one per line
    Variants(ConfigArgs),
    /// Print the component class manifest as JSON
    Components(ConfigArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Configuration file (.yaml/.yml or .json); built-in defaults when omitted
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write the stylesheet here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit minified CSS
    #[arg(long)]
    pub minify: bool,
}

#[derive(Debug, Args)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory the stylesheets and build-info.json are written to
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from(["delvforge", "-vv", "build", "--minify", "-o", "out.css"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Build(args) => {
                assert!(args.minify);
                assert_eq!(args.output, Some(PathBuf::from("out.css")));
                assert!(args.config.config.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_presets_default_directory() {
        let cli = Cli::try_parse_from(["delvforge", "presets"]).unwrap();
        match cli.command {
            Command::Presets(args) => assert_eq!(args.out_dir, PathBuf::from("dist")),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
