//! Info command: package metadata and the effective configuration.

use clap::Args;
use owo_colors::OwoColorize;
use readscope_core::analysis::AnalysisOptions;
use readscope_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    config: EffectiveConfig,
}

/// Settings after merging every config source with the defaults.
#[derive(Serialize)]
struct EffectiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(flatten)]
    thresholds: AnalysisOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    strip_markdown: bool,
    /// Absent when the limit is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl EffectiveConfig {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            thresholds: config.analysis_options(),
            max_grade: config.max_grade,
            strip_markdown: config.strip_markdown.unwrap_or(false),
            max_input_bytes: config.input_limit(),
        }
    }
}

impl InfoReport {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
            config: EffectiveConfig::new(config, sources),
        }
    }

    fn print(&self) {
        println!("{} {}", self.name.bold(), self.version.green());
        if !self.description.is_empty() {
            println!("{}", self.description);
        }
        for (label, value) in [("License", self.license), ("Repository", self.repository)] {
            if !value.is_empty() {
                field(label, value);
            }
        }

        let cfg = &self.config;
        section("Configuration");
        field(
            "Config file",
            cfg.config_file.as_deref().unwrap_or("none loaded"),
        );
        field("Log level", cfg.log_level);
        if let Some(ref dir) = cfg.log_dir {
            field("Log directory", dir);
        }

        section("Thresholds");
        field("Max sentence words", cfg.thresholds.max_sentence_words);
        field("Max paragraph words", cfg.thresholds.max_paragraph_words);
        field("Max complex sentences", cfg.thresholds.max_complex_sentences);
        match cfg.max_grade {
            Some(grade) => field("Max grade", format!("{grade:.1}")),
            None => field("Max grade", "not set"),
        }
        field("Strip markdown", cfg.strip_markdown);
        match cfg.max_input_bytes {
            Some(limit) => field("Max input bytes", limit),
            None => field("Max input bytes", "unlimited"),
        }
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {value}", label.dimmed());
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let report = InfoReport::new(config, sources);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
