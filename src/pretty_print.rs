use ariadne::{Label, Report, ReportKind, Source};

use crate::ParseError;

impl ParseError {
    pub fn pretty_print(&self, input: &str) {
        let report = match self {
            ParseError::UnexpectedEof(expected) => {
                let idx = input.len();
                Report::build(ReportKind::Error, ("input", idx..idx))
                    .with_message("Unexpected end of input")
                    .with_label(
                        Label::new(("input", idx..idx))
                            .with_message(format!("expected {expected}")),
                    )
            }
            ParseError::UnmatchedClose(span) => {
                Report::build(ReportKind::Error, ("input", span.to_range()))
                    .with_message("Unmatched `)`")
                    .with_label(
                        Label::new(("input", span.to_range()))
                            .with_message("no `(` opens this list"),
                    )
            }
        };
        report
            .finish()
            .print(("input", Source::from(input)))
            .unwrap();
    }
}
