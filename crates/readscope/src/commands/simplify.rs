//! Simplify command — apply the plain-word replacement table.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use readscope_core::simplify::simplify_text;

use super::read_input_file;

/// Arguments for the `simplify` subcommand.
#[derive(Args, Debug)]
pub struct SimplifyArgs {
    /// File to simplify.
    pub file: Utf8PathBuf,

    /// Write the simplified text here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

/// Print or save the simplified text of a file.
///
/// Markdown is left intact: substitutions are whole-word and never touch
/// formatting characters.
#[instrument(name = "cmd_simplify", skip_all, fields(file = %args.file))]
pub fn cmd_simplify(
    args: SimplifyArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, "executing simplify command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let result = simplify_text(&content);

    if let Some(ref output) = args.output {
        std::fs::write(output.as_std_path(), &result.text)
            .with_context(|| format!("failed to write {output}"))?;
        tracing::info!(output = %output, "wrote simplified text");
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(ref output) = args.output {
        let total: usize = result.replacements.iter().map(|r| r.count).sum();
        println!("{} {total} replacement(s) written to {output}", "OK:".green());
        for r in &result.replacements {
            println!("  {} -> {} ({}x)", r.from.yellow(), r.to.green(), r.count);
        }
    } else {
        print!("{}", result.text);
        if !result.text.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
