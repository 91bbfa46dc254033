//! Subcommand implementations.
//!
//! Each command writes its primary output to the given writer so it can be
//! captured in tests; files are written directly.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use delvforge_core::utilities::components::manifest;
use delvforge_core::{generate, Config, Options};
use tracing::{debug, info};

use crate::cli::{BuildArgs, ConfigArgs, PresetsArgs};
use crate::presets::{BuildInfo, BuildResult, PRESETS};

/// Loads the configuration named by `args`, or the built-in defaults.
pub fn load_config(args: &ConfigArgs) -> Result<Config> {
    match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn render(config: Config, minify: bool) -> Result<String> {
    let sheet = generate(config).context("invalid configuration")?;
    Ok(if minify {
        sheet.to_minified_css()
    } else {
        sheet.to_css()
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

pub fn build(args: &BuildArgs, out: &mut impl Write) -> Result<()> {
    let css = render(load_config(&args.config)?, args.minify)?;

    match &args.output {
        Some(path) => {
            write_file(path, &css)?;
            info!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
        }
        None => out
            .write_all(css.as_bytes())
            .context("failed to write stylesheet to stdout")?,
    }
    Ok(())
}

pub fn presets(args: &PresetsArgs, out: &mut impl Write) -> Result<BuildInfo> {
    let base = load_config(&args.config)?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let mut builds = Vec::with_capacity(PRESETS.len());
    for preset in PRESETS {
        let css = render(preset.configure(&base), false)
            .with_context(|| format!("failed to build the {} preset", preset.name))?;
        write_file(&args.out_dir.join(preset.output), &css)?;
        info!(preset = preset.name, bytes = css.len(), "built preset");
        writeln!(out, "{}: {} ({}KB)", preset.name, preset.output, (css.len() + 512) / 1024)?;

        builds.push(BuildResult {
            config: preset.name.to_string(),
            output: preset.output.to_string(),
            size: css.len(),
        });
    }

    let info = BuildInfo::new(builds);
    let json = serde_json::to_string_pretty(&info).context("failed to serialize build info")?;
    write_file(&args.out_dir.join("build-info.json"), &json)?;
    Ok(info)
}

pub fn variants(args: &ConfigArgs, out: &mut impl Write) -> Result<()> {
    let options = Options::resolve(load_config(args)?).context("invalid configuration")?;
    for variant in options.theme_resolver().resolve_variants() {
        let name = if variant.is_empty() { "(default)" } else { variant };
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub fn components(args: &ConfigArgs, out: &mut impl Write) -> Result<()> {
    let options = Options::resolve(load_config(args)?).context("invalid configuration")?;
    let json = serde_json::to_string_pretty(&manifest(&options))
        .context("failed to serialize component manifest")?;
    writeln!(out, "{json}")?;
    Ok(())
}
