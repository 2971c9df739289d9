//! Diagnostic records parsed from checker output

use regex::Regex;
use std::sync::OnceLock;

/// One type error or warning reported by the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path as printed by the checker, usually relative to the workspace
    pub file: String,
    /// 1-based line number
    pub line: u32,
    /// 1-based column number
    pub character: u32,
    /// Checker code, e.g. "TS2322"
    pub code: String,
    pub message: String,
}

/// Line grammar: `src/app.ts(10,5): error TS2322: Type 'string' is not assignable to type 'number'.`
fn diagnostic_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+)\((\d+),(\d+)\): (?:error|warning) (TS\d+): (.+)$")
            .expect("diagnostic line pattern is valid")
    })
}

/// Extract diagnostics from raw checker output.
///
/// Lines that don't match the grammar (progress output, summaries, blank
/// lines) are skipped. Output order follows input line order.
pub fn parse_output(output: &str) -> Vec<Diagnostic> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Diagnostic> {
    let caps = diagnostic_line().captures(line)?;
    Some(Diagnostic {
        file: caps[1].to_string(),
        line: caps[2].parse().ok()?,
        character: caps[3].parse().ok()?,
        code: caps[4].to_string(),
        message: caps[5].to_string(),
    })
}

/// Format diagnostics as the tool's text response
pub fn format_report(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "No type errors found.".to_string();
    }

    let lines: Vec<String> = diagnostics
        .iter()
        .map(|d| {
            format!(
                "{}:{}:{} - {}: {}",
                d.file, d.line, d.character, d.code, d.message
            )
        })
        .collect();

    format!(
        "Found {} type error(s):\n\n{}",
        diagnostics.len(),
        lines.join("\n")
    )
}
