//! FILENAME: core/locales/src/main.rs
//! PURPOSE: `locale-tools` command-line entry point.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use locale_tools::{dedupe_file, translate_file, translate_missing_file, PassthroughTranslator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locale-tools", version, about = "Maintain JSON locale files")]
struct Cli {
    /// Log every step (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove duplicated keys, keeping the first occurrence
    Dedupe {
        input: PathBuf,
        /// Defaults to <name>_cleaned.<ext> next to the input
        output: Option<PathBuf>,
    },
    /// Write the keys of SOURCE that TARGET lacks to a new file
    Missing {
        source: PathBuf,
        target: PathBuf,
        /// Defaults to <source>_missing_in_<target>_translated.json
        output: Option<PathBuf>,
        #[arg(long, env = "LOCALE_SOURCE_LANG", requires = "target_lang")]
        source_lang: Option<String>,
        #[arg(long, env = "LOCALE_TARGET_LANG", requires = "source_lang")]
        target_lang: Option<String>,
    },
    /// Translate every Arabic string of INPUT into a new file
    Translate {
        input: PathBuf,
        /// Defaults to the input name with `ar` replaced by `En`, or <name>_<to>.<ext>
        output: Option<PathBuf>,
        #[arg(default_value = "ar")]
        from: String,
        #[arg(default_value = "en")]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Command::Dedupe { input, output } => {
            if !input.exists() {
                bail!("file {} does not exist", input.display());
            }
            let report = dedupe_file(&input, output.as_deref())
                .with_context(|| format!("processing {}", input.display()))?;
            log::info!(
                "{} -> {} ({} duplicate key(s) removed)",
                input.display(),
                report.output.display(),
                report.duplicates.len()
            );
        }
        Command::Missing {
            source,
            target,
            output,
            source_lang,
            target_lang,
        } => {
            for path in [&source, &target] {
                if !path.exists() {
                    bail!("file {} does not exist", path.display());
                }
            }
            let languages = source_lang.as_deref().zip(target_lang.as_deref());
            let report = translate_missing_file(
                &source,
                &target,
                output.as_deref(),
                languages,
                &mut PassthroughTranslator,
            )
            .with_context(|| format!("comparing {} with {}", source.display(), target.display()))?;

            match report.output {
                Some(path) => log::info!(
                    "{} missing key(s) ({} -> {}) written to {}",
                    report.missing_keys,
                    report.from,
                    report.to,
                    path.display()
                ),
                None => log::info!("no missing keys found"),
            }
        }
        Command::Translate {
            input,
            output,
            from,
            to,
        } => {
            if !input.exists() {
                bail!("file {} does not exist", input.display());
            }
            let report = translate_file(&input, output.as_deref(), &from, &to, &mut PassthroughTranslator)
                .with_context(|| format!("translating {}", input.display()))?;
            log::info!(
                "{} -> {} ({} string(s), {} -> {})",
                input.display(),
                report.output.display(),
                report.translated_strings,
                from,
                to
            );
        }
    }
    Ok(())
}
