//! Blocking single-selection prompt over numbered lines.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

/// Outcome of one prompt round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based position within the offered lines
    Picked(usize),
    Cancelled,
}

/// Offers a list of lines and blocks until the user picks exactly one or
/// backs out. A returned index is within `[1, lines.len()]` by construction;
/// implementations never return out-of-range picks.
pub trait SelectPrompt {
    fn select(&mut self, lines: &[String], header: &str) -> io::Result<Selection>;
}

impl<P: SelectPrompt + ?Sized> SelectPrompt for &mut P {
    fn select(&mut self, lines: &[String], header: &str) -> io::Result<Selection> {
        (**self).select(lines, header)
    }
}

/// Line-oriented prompt over injected streams
///
/// Reads one answer per line from `input`. A blank line, `q`, or end of
/// input cancels; anything unparsable or out of range is rejected and asked
/// again. Production wires this to locked stdin/stdout; tests drive it with
/// `io::Cursor` and a `Vec<u8>`.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    styled: bool,
    gap_after_pick: bool,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
            gap_after_pick: true,
        }
    }

    /// Color the header and rejection notices (pass tty detection here)
    pub fn styled(mut self, on: bool) -> Self {
        self.styled = on;
        self
    }

    /// Whether to print a blank line once a pick is made
    pub fn gap(mut self, on: bool) -> Self {
        self.gap_after_pick = on;
        self
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> SelectPrompt for LinePrompt<R, W> {
    fn select(&mut self, lines: &[String], header: &str) -> io::Result<Selection> {
        let gutter = lines.len().to_string().len();
        let columns = terminal_columns();

        let header_line = fit(&format!("{:gutter$}  {}", "", header), columns);
        if self.styled {
            writeln!(self.output, "{}", header_line.bold())?;
        } else {
            writeln!(self.output, "{}", header_line)?;
        }

        for (index, line) in lines.iter().enumerate() {
            let row = fit(&format!("{:>gutter$}. {}", index + 1, line), columns);
            writeln!(self.output, "{}", row)?;
        }

        loop {
            write!(
                self.output,
                "Select an entry (1-{}, blank to cancel): ",
                lines.len()
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(Selection::Cancelled);
            };

            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Ok(Selection::Cancelled);
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=lines.len()).contains(&n) => {
                    if self.gap_after_pick {
                        writeln!(self.output)?;
                    }
                    return Ok(Selection::Picked(n));
                }
                _ => {
                    let notice =
                        format!("Invalid selection \"{}\" (expected 1-{})", answer, lines.len());
                    if self.styled {
                        writeln!(self.output, "{}", notice.yellow())?;
                    } else {
                        writeln!(self.output, "{}", notice)?;
                    }
                }
            }
        }
    }
}

/// Columns of the attached terminal; `None` when output is piped
fn terminal_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(width, _)| width.0 as usize)
}

fn fit(text: &str, columns: Option<usize>) -> String {
    match columns {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text.to_string(),
    }
}
