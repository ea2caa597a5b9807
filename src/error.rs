//! Error types for parsing CSV symbol maps

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Format { span: Span, message: String },
}

impl ParseError {
    /// A malformed-input error covering `span`
    pub fn malformed(span: Span, message: impl Into<String>) -> Self {
        ParseError::Format {
            span,
            message: message.into(),
        }
    }

    /// Byte range the error covers
    pub fn span(&self) -> Span {
        match self {
            ParseError::Format { span, .. } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Format { span, message } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}
