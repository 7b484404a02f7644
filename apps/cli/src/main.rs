//! rur-gen - C++ port class generator
//!
//! Reads an IDL tree dumped by the front end and writes `<Interface>.h` and
//! `<Interface>.cpp` for every interface it declares.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rur_codegen::generators::cpp::{CppGenerator, CppOutput, HeaderGenerator};
use rur_codegen::{utils, CodeGenerator};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "rur-gen", version, about = "Generate C++ port classes from an IDL tree")]
struct Cli {
    /// Dumped IDL tree (.json, .yaml or .yml)
    input: PathBuf,

    /// Directory the generated files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only generate the interface with this identifier
    #[arg(long)]
    interface: Option<String>,

    /// Skip the .cpp files
    #[arg(long)]
    header_only: bool,

    /// Fail on ports without a proper direction instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Do not carry port comments and pragmas into the headers
    #[arg(long)]
    no_docs: bool,

    /// Configuration file (defaults to ./rur-gen.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long)]
    json: bool,

    /// Log level for the generator (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.log_json |= cli.json;
    config.generator.strict |= cli.strict;
    if cli.no_docs {
        config.generator.generate_docs = false;
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    logging::init_logging(&config.log_level, config.log_json)
        .context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %cli.input.display(),
        strict = config.generator.strict,
        "Starting rur-gen"
    );

    let mut codegen = CodeGenerator::from_path(&cli.input)
        .with_context(|| format!("Failed to load IDL tree {}", cli.input.display()))?;
    if let Some(name) = &cli.interface {
        codegen = codegen.only_interface(name)?;
    }
    tracing::info!(
        interfaces = codegen.module().interfaces.len(),
        pragmas = codegen.module().pragmas.len(),
        "Loaded IDL tree"
    );

    let generated = if cli.header_only {
        codegen.generate(HeaderGenerator::new(config.generator.clone()))
    } else {
        codegen.generate(CppGenerator::new(config.generator.clone()))
    };
    let output: CppOutput = generated.context("Code generation failed")?;

    utils::write_modules(&cli.output_dir, &output.modules)?;

    tracing::info!(
        files = output.modules.len(),
        output_dir = %cli.output_dir.display(),
        "Generation complete"
    );
    println!(
        "Generated {} files into {}",
        output.modules.len(),
        cli.output_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "rur-gen",
            "motor.json",
            "-o",
            "gen",
            "--interface",
            "Motor",
            "--header-only",
            "--strict",
        ]);
        assert_eq!(cli.input, PathBuf::from("motor.json"));
        assert_eq!(cli.output_dir, PathBuf::from("gen"));
        assert_eq!(cli.interface.as_deref(), Some("Motor"));
        assert!(cli.header_only);
        assert!(cli.strict);
        assert!(!cli.no_docs);
    }
}
