//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the readability scorer and the plain-word simplifier as MCP
//! tools over stdio, so assistants can score a draft before showing it to
//! a reader.
//!
//! The server is a presentation layer: each `#[tool]` method delegates to
//! `readscope_core` and serializes the result as pretty JSON text content.
//! Thresholds omitted from a call fall back to the server's configured
//! defaults.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use readscope_core::analysis::{self, AnalysisOptions};
use readscope_core::{check_input_size, markdown, simplify};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `readability_scorer` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ReadabilityScorerParams {
    /// The text to score. Missing text is scored as empty.
    #[serde(default)]
    pub text: String,
    /// Flag sentences with more words than this (default 25).
    pub max_sentence_words: Option<usize>,
    /// Flag paragraphs with more words than this (default 120).
    pub max_paragraph_words: Option<usize>,
    /// Report at most this many complex sentences (default 10).
    pub max_complex_sentences: Option<usize>,
    /// Whether to strip markdown formatting before scoring.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `simplify_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SimplifyTextParams {
    /// The text to simplify.
    pub text: String,
}

/// MCP server exposing the readability scorer to AI assistants.
#[derive(Clone)]
pub struct ScorerServer {
    defaults: AnalysisOptions,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ScorerServer {
    fn default() -> Self {
        Self::new(
            AnalysisOptions::default(),
            Some(readscope_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

impl ScorerServer {
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    fn options_for(&self, params: &ReadabilityScorerParams) -> AnalysisOptions {
        AnalysisOptions {
            max_sentence_words: params
                .max_sentence_words
                .unwrap_or(self.defaults.max_sentence_words),
            max_paragraph_words: params
                .max_paragraph_words
                .unwrap_or(self.defaults.max_paragraph_words),
            max_complex_sentences: params
                .max_complex_sentences
                .unwrap_or(self.defaults.max_complex_sentences),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ScorerServer {
    /// Create a server with default thresholds and an input size limit.
    pub fn new(defaults: AnalysisOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            defaults,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
                "defaults": self.defaults,
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score readability and suggest simplifications.
    #[tool(
        description = "Score text readability (Flesch Reading Ease and Flesch-Kincaid Grade) and \
                       suggest simplifications: complex sentences with split proposals, paragraph \
                       structure flags, and plain-word replacements."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn readability_scorer(
        &self,
        Parameters(params): Parameters<ReadabilityScorerParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "readability_scorer",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let options = self.options_for(&params);
        let report = if params.strip_markdown {
            analysis::score_text(&markdown::strip_to_prose(&params.text), &options)
        } else {
            analysis::score_text(&params.text, &options)
        };
        let json = to_json(&report)?;

        tracing::info!(
            tool = "readability_scorer",
            grade = report.flesch_kincaid_grade,
            complex = report.complex_sentences.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Rewrite verbose words and phrases with plainer ones.
    #[tool(
        description = "Replace verbose words and phrases with plainer ones. Returns the rewritten \
                       text and a count per replaced phrase."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn simplify_text(
        &self,
        Parameters(params): Parameters<SimplifyTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "simplify_text", "executing MCP tool");
        self.check_size(&params.text)?;

        let result = simplify::simplify_text(&params.text);
        let json = to_json(&result)?;

        tracing::info!(
            tool = "simplify_text",
            replaced = result.replacements.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ScorerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call readability_scorer on a draft to get readability scores \
                 and concrete simplification suggestions.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
