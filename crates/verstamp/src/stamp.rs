//! Stamp command — thin CLI layer over `verstamp_core::encode`.

use anyhow::Context;
use camino::Utf8PathBuf;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use verstamp_core::config::Config;
use verstamp_core::encode;
use verstamp_core::record::{DEFAULT_VERSION_FILE, VersionRecord};

use crate::Cli;

/// What `--json` output carries: the target path plus the written record.
#[derive(Serialize)]
struct StampOutput<'a> {
    path: &'a str,
    record: &'a VersionRecord,
}

/// Execute the stamp: resolve the target path, write the record, report.
///
/// Target resolution: `--version-file` flag > config `version_file` >
/// `VERSION` in the working directory.
#[instrument(name = "cmd_stamp", skip_all, fields(version = %cli.semver_version))]
pub fn cmd_stamp(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let target = cli
        .version_file
        .clone()
        .or_else(|| config.version_file.clone())
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_VERSION_FILE));

    debug!(%target, "resolved version file target");

    let record = encode::write_version_file(&cli.semver_version, &target)
        .with_context(|| format!("failed to stamp version file {target}"))?;

    if cli.json {
        let output = StampOutput {
            path: target.as_str(),
            record: &record,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !cli.quiet {
        println!(
            "{}: {}",
            "Version".bold(),
            record.version_string.green().bold()
        );
        if !record.version_tweak.is_empty() {
            println!("{}: {}", "Prerelease".dimmed(), record.version_tweak);
        }
        println!("  {} wrote {}", "✓".green(), target.as_str().cyan());
    }

    Ok(())
}
