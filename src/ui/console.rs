//! Terminal input/output used by the menu and the operation handlers. The
//! [`Console`] trait is the seam: handlers only talk to it, and the crossterm
//! backed [`TerminalConsole`] works over any reader/writer pair so scripted
//! sessions can drive it as well as a real terminal.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, Print, PrintStyledContent, StyledContent};

use super::input::{
    choices_hint, parse_choice, parse_confirm, parse_integer, resolve_text, InputClosed,
};
use super::tables::TableView;

/// Severity of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    fn style(self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = match self {
            StatusKind::Info => None,
            StatusKind::Success => Some(Color::Green),
            StatusKind::Warning => Some(Color::Yellow),
            StatusKind::Error => Some(Color::Red),
        };
        style
    }
}

/// Everything the menu and handlers need from the terminal.
pub trait Console {
    /// Framed welcome text shown once at startup.
    fn banner(&mut self, text: &str) -> Result<()>;
    /// Emphasized section title ("Main Menu", "Add a New Book").
    fn heading(&mut self, text: &str) -> Result<()>;
    fn line(&mut self, text: &str) -> Result<()>;
    fn status(&mut self, kind: StatusKind, text: &str) -> Result<()>;
    fn table(&mut self, table: &TableView) -> Result<()>;

    /// Free text. With a default, an empty answer returns it; without one,
    /// empty answers are asked again.
    fn text(&mut self, label: &str, default: Option<&str>) -> Result<String>;
    /// Any whole number.
    fn integer(&mut self, label: &str) -> Result<i64>;
    /// A whole number inside `choices`; anything else is asked again.
    fn choose(
        &mut self,
        label: &str,
        choices: RangeInclusive<i64>,
        default: Option<i64>,
    ) -> Result<i64>;
    /// Yes/no question.
    fn confirm(&mut self, label: &str) -> Result<bool>;
}

/// Line-oriented console over a reader and a writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print(&mut self, text: &str, style: ContentStyle) -> Result<()> {
        let written = if self.color && style != ContentStyle::new() {
            queue!(
                self.output,
                PrintStyledContent(StyledContent::new(style, text))
            )
        } else {
            queue!(self.output, Print(text))
        };
        written.context("failed to write to terminal")
    }

    fn println(&mut self, text: &str, style: ContentStyle) -> Result<()> {
        self.print(text, style)?;
        writeln!(self.output).context("failed to write to terminal")?;
        self.output.flush().context("failed to flush terminal")
    }

    /// Show `prompt`, read one line, and hand it to `parse` until it accepts
    /// the answer.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>, retry: &str) -> Result<T> {
        loop {
            self.print(&format!("{prompt}: "), ContentStyle::new())?;
            self.output.flush().context("failed to flush terminal")?;

            let mut bytes = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut bytes)
                .context("failed to read input")?;
            if read == 0 {
                writeln!(self.output).context("failed to write to terminal")?;
                return Err(InputClosed.into());
            }

            // An answer that is not UTF-8 is rejected like any other bad answer.
            let parsed = String::from_utf8(bytes).ok().and_then(|answer| parse(&answer));
            if let Some(value) = parsed {
                return Ok(value);
            }
            self.println(retry, StatusKind::Error.style())?;
        }
    }
}

fn bold(color: Option<Color>) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = color;
    style.attributes.set(Attribute::Bold);
    style
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn banner(&mut self, text: &str) -> Result<()> {
        let rule = "─".repeat(text.chars().count() + 2);
        let style = bold(Some(Color::Green));
        self.println(&format!("┌{rule}┐"), style)?;
        self.println(&format!("│ {text} │"), style)?;
        self.println(&format!("└{rule}┘"), style)
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.println(text, bold(Some(Color::Blue)))
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.println(text, ContentStyle::new())
    }

    fn status(&mut self, kind: StatusKind, text: &str) -> Result<()> {
        self.println(text, kind.style())
    }

    fn table(&mut self, table: &TableView) -> Result<()> {
        for line in table.render_lines() {
            self.println(&line, ContentStyle::new())?;
        }
        Ok(())
    }

    fn text(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(value) => format!("{label} ({value})"),
            None => label.to_string(),
        };
        self.ask(
            &prompt,
            |answer| resolve_text(answer, default),
            "Please enter a value.",
        )
    }

    fn integer(&mut self, label: &str) -> Result<i64> {
        self.ask(label, parse_integer, "Please enter a valid integer number.")
    }

    fn choose(
        &mut self,
        label: &str,
        choices: RangeInclusive<i64>,
        default: Option<i64>,
    ) -> Result<i64> {
        let mut prompt = format!("{label} {}", choices_hint(&choices));
        if let Some(value) = default {
            prompt.push_str(&format!(" ({value})"));
        }
        self.ask(
            &prompt,
            |answer| parse_choice(answer, &choices, default),
            "Please select one of the available options.",
        )
    }

    fn confirm(&mut self, label: &str) -> Result<bool> {
        self.ask(
            &format!("{label} [y/n]"),
            parse_confirm,
            "Please enter Y or N.",
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::ui::input::is_input_closed;

    fn console(script: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), false)
    }

    fn transcript(console: TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn choose_repeats_until_in_range() {
        let mut console = console("9\nabc\n3\n");
        let picked = console.choose("Select an option", 1..=4, None).unwrap();

        assert_eq!(picked, 3);
        let output = transcript(console);
        assert_eq!(output.matches("Select an option [1/2/3/4]: ").count(), 3);
        assert_eq!(
            output.matches("Please select one of the available options.").count(),
            2
        );
    }

    #[test]
    fn text_with_default_accepts_empty_answer() {
        let mut console = console("\n");
        let title = console.text("Enter new title", Some("Dune")).unwrap();

        assert_eq!(title, "Dune");
        assert!(transcript(console).contains("Enter new title (Dune): "));
    }

    #[test]
    fn text_without_default_requires_a_value() {
        let mut console = console("\nHerbert\n");
        let author = console.text("Enter author name", None).unwrap();

        assert_eq!(author, "Herbert");
        assert!(transcript(console).contains("Please enter a value."));
    }

    #[test]
    fn confirm_reads_yes_and_no() {
        let mut console = console("x\nn\ny\n");
        assert!(!console.confirm("Delete?").unwrap());
        assert!(console.confirm("Delete?").unwrap());
    }

    #[test]
    fn exhausted_input_reports_closed() {
        let mut console = console("");
        let err = console.integer("Enter the ID").unwrap_err();
        assert!(is_input_closed(&err));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut console = console("");
        console.status(StatusKind::Error, "Book not found!").unwrap();
        console.banner("Welcome").unwrap();
        let output = transcript(console);

        assert!(output.contains("Book not found!"));
        assert!(output.contains("│ Welcome │"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn colored_output_styles_statuses() {
        let mut console = TerminalConsole::new(Cursor::new(Vec::new()), Vec::new(), true);
        console.status(StatusKind::Success, "Saved").unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert!(output.contains('\u{1b}'));
        assert!(output.contains("Saved"));
    }

    #[test]
    fn info_status_stays_plain_with_color_on() {
        let mut console = TerminalConsole::new(Cursor::new(Vec::new()), Vec::new(), true);
        console.status(StatusKind::Info, "Deletion cancelled.").unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(output, "Deletion cancelled.\n");
    }

    #[test]
    fn undecodable_answer_is_asked_again() {
        let mut console =
            TerminalConsole::new(Cursor::new(b"\xff\xfe\n2\n".to_vec()), Vec::new(), false);
        let picked = console.choose("Select an option", 1..=4, None).unwrap();

        assert_eq!(picked, 2);
        let output = transcript(console);
        assert_eq!(output.matches("Select an option [1/2/3/4]: ").count(), 2);
        assert!(output.contains("Please select one of the available options."));
    }

    #[test]
    fn undecodable_text_is_not_stored() {
        let mut console =
            TerminalConsole::new(Cursor::new(b"Du\xffne\nDune\n".to_vec()), Vec::new(), false);
        let title = console.text("Enter book title", None).unwrap();

        assert_eq!(title, "Dune");
    }
}
