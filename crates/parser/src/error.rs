// Error reporting with Ariadne
//
// This module provides parse error messages using Ariadne.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Converts Chumsky errors to Ariadne reports
pub fn report_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        let span = error.span();
        let msg = match error.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            _ => match error.found() {
                Some(token) => format!("Unexpected token '{}'", token),
                None => "Unexpected end of input".to_string(),
            },
        };

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_code("E001")
            .with_message("Parse Error")
            .with_label(
                Label::new((filename, span))
                    .with_message(msg)
                    .with_color(Color::Red),
            );

        // Add expected tokens if available (limit to 5 to avoid overwhelming output)
        let expected: Vec<String> = error.expected().map(format_expected).collect();
        let report = if expected.is_empty() {
            report
        } else if expected.len() > 5 {
            report.with_help(format!("Expected one of: {}, ...", expected[..5].join(", ")))
        } else {
            report.with_help(format!("Expected: {}", expected.join(", ")))
        };

        // Printing to stderr only fails when stderr is gone
        let _ = report.finish().eprint((filename, Source::from(source)));
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Int(_)) => "integer".to_string(),
        Some(Token::Float(_)) => "float".to_string(),
        Some(Token::String(_)) => "string".to_string(),
        Some(token) => format!("'{}'", token),
        None => "end of input".to_string(),
    }
}
