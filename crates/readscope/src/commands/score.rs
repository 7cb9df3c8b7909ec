//! Score command — readability indices plus rewrite suggestions.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscope_core::analysis::{AnalysisOptions, ReadabilityReport, score_text};
use readscope_core::config::Config;

use super::read_prose;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Flag sentences with more words than this.
    #[arg(long)]
    pub max_sentence_words: Option<usize>,

    /// Flag paragraphs with more words than this.
    #[arg(long)]
    pub max_paragraph_words: Option<usize>,

    /// Report at most this many complex sentences.
    #[arg(long)]
    pub max_complex_sentences: Option<usize>,

    /// Fail when the Flesch-Kincaid grade exceeds this.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Strip markdown before scoring (automatic for .md files).
    #[arg(long)]
    pub strip_markdown: bool,
}

impl ScoreArgs {
    /// Thresholds from flags, falling back to config, then defaults.
    fn options(&self, config: &Config) -> AnalysisOptions {
        let base = config.analysis_options();
        AnalysisOptions {
            max_sentence_words: self.max_sentence_words.unwrap_or(base.max_sentence_words),
            max_paragraph_words: self.max_paragraph_words.unwrap_or(base.max_paragraph_words),
            max_complex_sentences: self
                .max_complex_sentences
                .unwrap_or(base.max_complex_sentences),
        }
    }
}

/// Score readability of a file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let options = args.options(config);
    let max_grade = args.max_grade.or(config.max_grade);
    let strip_md = args.strip_markdown || config.strip_markdown.unwrap_or(false);
    debug!(?options, ?max_grade, strip_md, "executing score command");

    let prose = read_prose(&args.file, strip_md, config.input_limit())?;
    let report = score_text(&prose, &options);
    let over_max = max_grade.is_some_and(|max| report.flesch_kincaid_grade > max);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&args.file, &report);
    }

    tracing::info!(
        grade = report.flesch_kincaid_grade,
        complex = report.complex_sentences.len(),
        "score completed"
    );

    if over_max {
        bail!(
            "{} scores grade {:.1} (max: {:.1}). Shorten sentences or use plainer words.",
            args.file,
            report.flesch_kincaid_grade,
            max_grade.unwrap_or_default(),
        );
    }
    Ok(())
}

fn print_summary(file: &Utf8Path, report: &ReadabilityReport) {
    println!("{}", file.bold());
    println!(
        "\n  {} ease {:.2}, grade {:.2}",
        "Readability:".cyan(),
        report.flesch_reading_ease,
        report.flesch_kincaid_grade,
    );
    println!(
        "  {} {} words, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        report.word_count,
        report.sentence_count,
        report.paragraph_count,
    );
    println!(
        "  {} {:.2} words/sentence, {:.2} words/paragraph, {:.2} sentences/paragraph",
        "Averages:".cyan(),
        report.avg_words_per_sentence,
        report.avg_words_per_paragraph,
        report.avg_sentences_per_paragraph,
    );

    let flagged: Vec<_> = report
        .paragraphs
        .iter()
        .filter(|p| !p.flags.is_empty())
        .collect();
    if !flagged.is_empty() {
        println!("\n  {}", "Paragraphs:".cyan());
        for p in flagged {
            println!("    #{}: {}", p.index, p.flags.join("; "));
            if let Some(ref suggestion) = p.suggestion {
                println!("        {}", suggestion.dimmed());
            }
        }
    }

    if !report.complex_sentences.is_empty() {
        println!("\n  {}", "Complex sentences:".cyan());
        for s in &report.complex_sentences {
            println!("    #{} ({} words): {}", s.index, s.word_count, s.sentence);
            for suggestion in &s.suggestions {
                println!("        - {suggestion}");
            }
            if let Some(proposal) = s.split.proposal() {
                println!("        {} {}", "Try:".green(), proposal);
            }
        }
    }

    if !report.replacement_suggestions.is_empty() {
        println!("\n  {}", "Plainer words:".cyan());
        for r in &report.replacement_suggestions {
            println!("    {} -> {} ({}x)", r.from.yellow(), r.to.green(), r.count);
        }
    }
}
