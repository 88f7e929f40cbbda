use std::{
    fmt::{Arguments, Display},
    io::{self, Stdout, Write},
    str::FromStr,
};

use crossterm::tty::IsTty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    Logger,
    severity::{RESET, Severity},
};

/// Whether a [`ConsoleLogger`] wraps messages in SGR escapes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Always,
    /// Color only when the underlying stream is a terminal.
    Auto,
    Never,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown color mode '{0}', expected always, auto or never")]
pub struct ParseColorModeError(pub String);

impl Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self {
            ColorMode::Always => "always",
            ColorMode::Auto => "auto",
            ColorMode::Never => "never",
        };
        f.write_str(mode)
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(ColorMode::Always),
            "auto" => Ok(ColorMode::Auto),
            "never" => Ok(ColorMode::Never),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

/// Writes `<color><message><reset>\n` for every record.
///
/// The three pieces are separate writes, so records from threads sharing the
/// same stream may interleave.
pub struct ConsoleLogger<W: Write = Stdout> {
    writer: W,
    mode: ColorMode,
    is_terminal: bool,
}

impl ConsoleLogger<Stdout> {
    pub fn stdout() -> Self {
        Self::detect(io::stdout())
    }
}

impl<W: Write> ConsoleLogger<W> {
    /// Wraps an arbitrary writer. [`ColorMode::Auto`] treats it as not being a terminal.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            mode: ColorMode::default(),
            is_terminal: false,
        }
    }

    /// Wraps a writer backed by a file descriptor or handle, asking the OS whether it is a terminal.
    pub fn detect(writer: W) -> Self
    where
        W: IsTty,
    {
        let is_terminal = writer.is_tty();
        Self {
            writer,
            mode: ColorMode::default(),
            is_terminal,
        }
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn colored(&self) -> bool {
        match self.mode {
            ColorMode::Always => true,
            ColorMode::Auto => self.is_terminal,
            ColorMode::Never => false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record(&mut self, severity: Severity, args: Arguments<'_>) -> io::Result<()> {
        if self.colored() {
            self.writer.write_all(severity.color().as_bytes())?;
            self.writer.write_fmt(args)?;
            self.writer.write_all(RESET.as_bytes())?;
            self.writer.write_all(b"\n")
        } else {
            self.writer.write_fmt(args)?;
            self.writer.write_all(b"\n")
        }
    }
}

impl<W: Write> Logger for ConsoleLogger<W> {
    fn log(&mut self, severity: Severity, args: Arguments<'_>) -> bool {
        self.write_record(severity, args).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(logger: ConsoleLogger<Vec<u8>>, severity: Severity, args: Arguments<'_>) -> String {
        let mut logger = logger;
        assert!(logger.log(severity, args));
        String::from_utf8(logger.into_inner()).unwrap()
    }

    #[test]
    fn wraps_message_in_severity_color() {
        for sev in Severity::ALL {
            let out = render(ConsoleLogger::new(Vec::new()), sev, format_args!("{}", "x"));
            assert_eq!(out, format!("{}x\x1b[0m\n", sev.color()));
        }
    }

    #[test]
    fn literal_message_is_verbatim() {
        let out = render(
            ConsoleLogger::new(Vec::new()),
            Severity::Debug,
            format_args!("100% literal {{braces}}"),
        );
        assert_eq!(out, "\x1b[0;32m100% literal {braces}\x1b[0m\n");
    }

    #[test]
    fn never_mode_skips_escapes() {
        let logger = ConsoleLogger::new(Vec::new()).with_color_mode(ColorMode::Never);
        let out = render(logger, Severity::Error, format_args!("plain {}", 1));
        assert_eq!(out, "plain 1\n");
    }

    #[test]
    fn auto_mode_on_plain_writer_is_uncolored() {
        let logger = ConsoleLogger::new(Vec::new()).with_color_mode(ColorMode::Auto);
        assert!(!logger.colored());
        let out = render(logger, Severity::Info, format_args!("piped"));
        assert_eq!(out, "piped\n");
    }

    #[test]
    fn records_append_in_call_order() {
        let mut logger = ConsoleLogger::new(Vec::new());
        logger.log(Severity::Info, format_args!("first"));
        logger.log(Severity::Warning, format_args!("second"));
        assert_eq!(
            logger.get_ref().as_slice(),
            b"\x1b[0;33mfirst\x1b[0m\n\x1b[1;33msecond\x1b[0m\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let mut logger = ConsoleLogger::new(BrokenPipe);
        assert!(!logger.log(Severity::Fatal, format_args!("lost")));
    }

    #[test]
    fn color_mode_parses() {
        for mode in [ColorMode::Always, ColorMode::Auto, ColorMode::Never] {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
        assert_eq!("NEVER".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert_eq!(
            "sometimes".parse::<ColorMode>(),
            Err(ParseColorModeError("sometimes".to_string()))
        );
        assert_eq!(ColorMode::default(), ColorMode::Always);
    }
}
