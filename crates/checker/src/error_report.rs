// Error reporting with Ariadne for the checker

use crate::error::CheckError;
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Format a CheckError as an Ariadne report on stderr
pub fn report_check_error(filename: &str, source: &str, error: &CheckError) {
    let span = error.span().clone();
    let label = match error {
        CheckError::UnknownName { name, .. } => format!("'{}' is not defined", name),
        CheckError::UnknownFunction { name, .. } => format!("no function named '{}'", name),
        CheckError::BinaryMismatch { left, right, .. } => {
            format!("operands have types '{}' and '{}'", left, right)
        }
        CheckError::UnaryMismatch { operand, .. } => format!("operand has type '{}'", operand),
        CheckError::NotIndexable { ty, .. } => format!("this has type '{}'", ty),
        CheckError::UnknownField { property, .. } => format!("'{}' is not a field", property),
        CheckError::ArgumentMismatch { .. } => "arguments do not match the signature".to_string(),
        CheckError::RangeBound { found, .. } => format!("this bound has type '{}'", found),
        CheckError::NonBoolCondition { found, .. } => format!("this has type '{}'", found),
    };

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code(error.code())
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish();

    // Printing to stderr only fails when stderr is gone
    let _ = report.eprint((filename, Source::from(source)));
}
