//! Console output for router results

use crate::http::dto::{FactCheckResponseDto, GenerateResponseDto};
use colored::Colorize;
use verdict_application::{FactCheckedResponse, GenerationResponse};
use verdict_domain::{EVIDENCE_HEADER, FinalVerdict, ModelAttempt};

/// Formats router results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Generated content plus the attempt trail
    pub fn format_generation(response: &GenerationResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Response"));
        output.push('\n');
        output.push_str(&Self::attempts(&response.attempts));
        output.push('\n');
        output.push_str(&response.content);
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Generated content, then one colored entry per claim
    pub fn format_fact_checked(response: &FactCheckedResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Fact-Checked Response"));
        output.push('\n');
        output.push_str(&Self::attempts(&response.attempts));
        output.push('\n');

        let body = response
            .content
            .split_once(EVIDENCE_HEADER)
            .map_or(response.content.as_str(), |(body, _)| body);
        output.push_str(body);
        output.push('\n');

        output.push_str(&Self::section_header(&format!(
            "Fact-Check Evidence ({} claims)",
            response.fact_check_count()
        )));

        if response.fact_checks.is_empty() {
            output.push_str(&format!("\n{}\n", "No checkable claims.".dimmed()));
        }

        for result in &response.fact_checks {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                Self::verdict_label(result.final_verdict),
                result.summary.dimmed(),
                Self::indent(&result.evidence_block, "  ")
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_generation_json(response: &GenerationResponse) -> String {
        serde_json::to_string_pretty(&GenerateResponseDto::from(response))
            .unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_fact_checked_json(response: &FactCheckedResponse) -> String {
        serde_json::to_string_pretty(&FactCheckResponseDto::from(response))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn attempts(attempts: &[ModelAttempt]) -> String {
        let mut output = String::new();
        for attempt in attempts {
            let line = match attempt.failure_kind() {
                None => format!(
                    "{} {} ({}ms)",
                    "v".green(),
                    attempt.model.to_string().bold(),
                    attempt.latency().as_millis()
                ),
                Some(kind) => format!("{} {}: {}", "x".red(), attempt.model, kind),
            };
            output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), line));
        }
        output
    }

    fn verdict_label(verdict: FinalVerdict) -> String {
        let label = format!("[{}]", verdict);
        match verdict {
            FinalVerdict::FactCheckedTrue => label.green().bold().to_string(),
            FinalVerdict::FactCheckedFalse => label.red().bold().to_string(),
            FinalVerdict::Disputed => label.yellow().bold().to_string(),
            FinalVerdict::InsufficientEvidence => label.dimmed().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
