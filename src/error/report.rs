use std::fmt::Display;
use std::io::Write;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::interpreter::lexer::token::Span;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A failure the run cannot proceed past.
    Error,
    /// A suspicious construct worth flagging.
    Warning,
    /// Neutral progress information.
    Info,
    /// A successful outcome.
    Success,
}

impl Level {
    const fn color(self) -> Color {
        match self {
            Self::Error => Color::BrightRed,
            Self::Success => Color::BrightGreen,
            Self::Warning => Color::BrightYellow,
            Self::Info => Color::BrightBlue,
        }
    }

    const fn ansi(self) -> &'static str {
        match self {
            Self::Error => "\x1b[91m",
            Self::Success => "\x1b[92m",
            Self::Warning => "\x1b[93m",
            Self::Info => "\x1b[94m",
        }
    }

    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    fn report_kind(self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
            Self::Info => ReportKind::Custom("Info", self.color()),
            Self::Success => ReportKind::Custom("Success", self.color()),
        }
    }
}

/// A diagnostic that can be rendered against the source it came from.
pub trait Reportable: Display {
    /// The source span the diagnostic is anchored to, when it has one.
    fn span(&self) -> Option<Span>;

    /// The diagnostic's severity.
    fn level(&self) -> Level {
        Level::Error
    }
}

/// Renders a diagnostic on `output`.
///
/// Span-anchored diagnostics reproduce the offending source line with a
/// caret run under the anchor; spanless ones fall back to the plain
/// `[LEVEL] message` form. Rendering failures are ignored: diagnostics are
/// already the last thing a failing pipeline does.
pub fn emit(
    output: &mut dyn Write,
    source: &[u8],
    filename: &str,
    diagnostic: &dyn Reportable,
    color: bool,
) {
    let level = diagnostic.level();
    let Some(span) = diagnostic.span() else {
        emit_plain(output, level, &diagnostic.to_string(), color);
        return;
    };

    let text = String::from_utf8_lossy(source);
    let _ = Report::build(level.report_kind(), (filename, span.range()))
        .with_config(Config::default().with_color(color))
        .with_message(diagnostic.to_string())
        .with_label(Label::new((filename, span.range())).with_color(level.color()))
        .finish()
        .write((filename, Source::from(text.as_ref())), output);
}

/// Writes a bare `[LEVEL] message` line, colorized when enabled.
pub fn emit_plain(output: &mut dyn Write, level: Level, message: &str, color: bool) {
    let result = if color {
        writeln!(output, "{}[{}] {message}\x1b[0m", level.ansi(), level.tag())
    } else {
        writeln!(output, "[{}] {message}", level.tag())
    };
    let _ = result;
}
