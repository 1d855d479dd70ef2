//! Line-oriented front-end for a [`Session`].
//!
//! The shell reads one command per line, turns it into a [`Command`] and
//! prints the resulting notifications. It is generic over its input and
//! output streams so it can be driven by a script in tests.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use crate::error::{MergerError, Result};
use crate::interactive::notify::{Notification, NotificationSink};
use crate::interactive::session::{Command, Session};
use crate::utils::expand_input_patterns;

const PROMPT: &str = "pdf-merger> ";

const HELP: &str = "\
Commands:
  add <file>...      add PDF files (glob patterns allowed)
  drop <uri>...      add dropped file:// URIs
  select <n>...      select entries by number (no numbers clears the selection)
  remove             remove the selected entries
  up, down           move the selected entries
  clear              remove every entry (asks first)
  list               show the list
  merge <output>     merge the list into <output>
  help               show this help
  quit               leave the shell";

/// Interactive text shell.
pub struct Shell<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around a fresh session.
    pub fn new(input: R, output: W) -> Self {
        Self::with_session(Session::new(), input, output)
    }

    /// Create a shell around an existing session.
    pub fn with_session(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// The session driven by this shell.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only failures of the shell's own streams are returned; failed actions
    /// are reported in the output and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "pdf-merger {} interactive mode", crate::VERSION)?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            if !self.execute(&line)? {
                return Ok(());
            }
        }
    }

    /// Execute one command line. Returns `false` when the shell should exit.
    fn execute(&mut self, line: &str) -> Result<bool> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(err) => {
                self.print(&Notification::from_error(&err))?;
                return Ok(true);
            }
        };

        let Some((verb, args)) = words.split_first() else {
            return Ok(true);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => return Ok(false),
            "help" | "?" => {
                writeln!(self.output, "{HELP}")?;
                return Ok(true);
            }
            "list" | "ls" => {
                self.print_list()?;
                return Ok(true);
            }
            "add" => Command::Add(expand_input_patterns(args.iter().map(PathBuf::from))),
            "drop" => Command::Drop(args.to_vec()),
            "select" | "sel" => match parse_positions(args) {
                Ok(indices) => Command::Select(indices),
                Err(err) => {
                    self.print(&Notification::from_error(&err))?;
                    return Ok(true);
                }
            },
            "remove" | "rm" => Command::RemoveSelected,
            "up" => Command::MoveUp,
            "down" => Command::MoveDown,
            "clear" => {
                if !self.confirm_clear()? {
                    writeln!(self.output, "Cancelled")?;
                    return Ok(true);
                }
                Command::Clear
            }
            "merge" => match args {
                [output] => Command::Merge(Some(PathBuf::from(output))),
                _ => {
                    writeln!(self.output, "Usage: merge <output.pdf>")?;
                    return Ok(true);
                }
            },
            other => {
                writeln!(
                    self.output,
                    "Unknown command '{other}'. Type 'help' for a list of commands."
                )?;
                return Ok(true);
            }
        };

        self.dispatch(command)?;
        Ok(true)
    }

    /// Run one command on the session, printing notifications as they
    /// arrive. A panic becomes an error notification so the shell keeps going.
    fn dispatch(&mut self, command: Command) -> Result<()> {
        let mut sink = StreamSink {
            output: &mut self.output,
            error: None,
        };
        let session = &mut self.session;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| session.dispatch(command, &mut sink)));
        if outcome.is_err() {
            sink.notify(Notification::error("Error", "The action failed unexpectedly"));
        }

        match sink.error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn confirm_clear(&mut self) -> Result<bool> {
        let count = self.session.files().len();
        if count == 0 {
            return Ok(true);
        }

        write!(self.output, "Remove all {count} file(s) from the list? [y/N]: ")?;
        self.output.flush()?;

        let response = self.read_line()?.unwrap_or_default().trim().to_lowercase();
        Ok(response == "y" || response == "yes")
    }

    fn print_list(&mut self) -> io::Result<()> {
        let files = self.session.files();
        if files.is_empty() {
            return writeln!(self.output, "  (no files)");
        }

        let selection = self.session.selection();
        for (idx, name) in files.display_names().iter().enumerate() {
            let marker = if selection.contains(&idx) { '*' } else { ' ' };
            writeln!(self.output, "  {marker} {}. {name}", idx + 1)?;
        }
        Ok(())
    }

    fn print(&mut self, note: &Notification) -> io::Result<()> {
        writeln!(self.output, "{note}")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Writes each notification to the shell output and flushes it right away,
/// so progress shows up before a blocking action finishes.
struct StreamSink<'a, W> {
    output: &'a mut W,
    /// First write failure; later notifications are dropped.
    error: Option<io::Error>,
}

impl<W: Write> NotificationSink for StreamSink<'_, W> {
    fn notify(&mut self, notification: Notification) {
        if self.error.is_some() {
            return;
        }

        let written = writeln!(self.output, "{notification}").and_then(|()| self.output.flush());
        if let Err(err) = written {
            self.error = Some(err);
        }
    }
}

/// Parse 1-based list positions into zero-based indices.
fn parse_positions(args: &[String]) -> Result<BTreeSet<usize>> {
    args.iter()
        .map(|arg| match arg.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n - 1),
            _ => Err(MergerError::other(format!(
                "Invalid entry number '{arg}', use the numbers shown by 'list'"
            ))),
        })
        .collect()
}

/// Split a command line into words, honoring single and double quotes.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(MergerError::other("Unterminated quote"));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
