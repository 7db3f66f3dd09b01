use std::io::{self, BufRead, Write};

use crate::{
    error::{Error, ParseError},
    interpreter::evaluator::core::ExpressionTree,
    util::num::{DEFAULT_PRECISION, format_fixed},
};

/// Settings for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Decimals printed for floating-point results.
    pub precision: usize,
    /// Writes diagnostics to stderr when set.
    pub verbose:   bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION,
               verbose:   false, }
    }
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `= ...`: replace the tree. Holds the whole line, marker included.
    Rebuild(&'a str),
    /// `i`: evaluate in integer mode.
    EvalInt,
    /// `d`: evaluate in floating-point mode.
    EvalDouble,
    /// `end`: stop the session.
    End,
    /// An empty line, ignored.
    Blank,
    /// Anything else.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line. Commands match exactly; surrounding whitespace makes
    /// a line unknown.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::interpreter::session::Command;
    ///
    /// assert_eq!(Command::parse("= + 1 2"), Command::Rebuild("= + 1 2"));
    /// assert_eq!(Command::parse("i"), Command::EvalInt);
    /// assert_eq!(Command::parse(" i"), Command::Unknown(" i"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        if line.starts_with('=') {
            return Self::Rebuild(line);
        }
        match line {
            "i" => Self::EvalInt,
            "d" => Self::EvalDouble,
            "end" => Self::End,
            "" => Self::Blank,
            _ => Self::Unknown(line),
        }
    }
}

/// Runs commands against one expression tree.
///
/// The session owns the only tree. Every command either completes or fails on
/// its own; a failure never ends the session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tree:   ExpressionTree,
    config: SessionConfig,
    line:   usize,
}

impl Session {
    /// Creates a session with an empty tree.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { tree: ExpressionTree::new(),
               config,
               line: 0 }
    }

    /// Returns the tree currently held.
    #[must_use]
    pub const fn tree(&self) -> &ExpressionTree {
        &self.tree
    }

    /// Executes a single command.
    ///
    /// # Returns
    /// - `Ok(Some(line))`: The output line of an evaluation command.
    /// - `Ok(None)`: The command produces no output.
    ///
    /// # Errors
    /// - `Error::Parse` for a failed rebuild or an unknown command.
    /// - `Error::Runtime` for a failed evaluation.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::interpreter::session::{Command, Session, SessionConfig};
    ///
    /// let mut session = Session::new(SessionConfig::default());
    /// session.execute(Command::parse("= / 1 3")).unwrap();
    /// let out = session.execute(Command::parse("d")).unwrap();
    /// assert_eq!(out.as_deref(), Some("0.33333"));
    ///
    /// let err = session.execute(Command::parse("= /")).unwrap_err();
    /// assert_eq!(err.label(), "Format Error");
    /// let err = session.execute(Command::parse("i")).unwrap_err();
    /// assert_eq!(err.label(), "Expression Missing");
    /// ```
    pub fn execute(&mut self, command: Command<'_>) -> Result<Option<String>, Error> {
        match command {
            Command::Rebuild(line) => {
                self.tree.rebuild(line)?;
                Ok(None)
            },
            Command::EvalInt => Ok(Some(self.tree.evaluate_int()?.to_string())),
            Command::EvalDouble => {
                let value = self.tree.evaluate_double()?;
                Ok(Some(format_fixed(value, self.config.precision)))
            },
            Command::End | Command::Blank => Ok(None),
            Command::Unknown(line) => {
                Err(ParseError::UnknownCommand { command: line.to_string() }.into())
            },
        }
    }

    /// Reads commands line by line until `end` or end of input.
    ///
    /// Each output line and each error label is written to `output` as soon as
    /// its command completes. Verbose diagnostics go to stderr.
    ///
    /// # Errors
    /// Only I/O errors from `input` or `output`; command errors are written
    /// out as their labels.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        self.run_with_diagnostics(input, output, &mut io::stderr())
    }

    /// Like [`Session::run`], with verbose diagnostics written to
    /// `diagnostics` instead of stderr.
    ///
    /// With `verbose` set, a successful rebuild writes
    /// `line <n>: built '<tree>' (depth <d>)` and a failed command writes
    /// `line <n>: <detailed error>`. Nothing is written otherwise.
    ///
    /// # Errors
    /// Only I/O errors from `input`, `output` or `diagnostics`.
    ///
    /// # Example
    /// ```
    /// use prefix_calc::interpreter::session::{Session, SessionConfig};
    ///
    /// let config = SessionConfig { verbose: true, ..SessionConfig::default() };
    /// let mut output = Vec::new();
    /// let mut diagnostics = Vec::new();
    /// Session::new(config).run_with_diagnostics("= ~ 3\ni\n".as_bytes(),
    ///                                           &mut output,
    ///                                           &mut diagnostics)
    ///                     .unwrap();
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "-3\n");
    /// assert_eq!(String::from_utf8(diagnostics).unwrap(), "line 1: built '~ 3' (depth 2)\n");
    /// ```
    pub fn run_with_diagnostics<R: BufRead, W: Write, D: Write>(&mut self,
                                                                input: R,
                                                                output: &mut W,
                                                                diagnostics: &mut D)
                                                                -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            self.line += 1;

            let command = Command::parse(&line);
            if command == Command::End {
                break;
            }

            let rebuild = matches!(command, Command::Rebuild(_));
            match self.execute(command) {
                Ok(Some(result)) => writeln!(output, "{result}")?,
                Ok(None) => {
                    if self.config.verbose
                       && rebuild
                       && let Some(root) = self.tree.root()
                    {
                        writeln!(diagnostics,
                                 "line {}: built '{root}' (depth {})",
                                 self.line,
                                 root.depth())?;
                    }
                },
                Err(e) => {
                    if self.config.verbose {
                        writeln!(diagnostics, "line {}: {e}", self.line)?;
                    }
                    writeln!(output, "{}", e.label())?;
                },
            }
        }
        output.flush()
    }
}
