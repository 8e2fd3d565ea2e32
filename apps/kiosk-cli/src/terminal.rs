//! # Terminal
//!
//! The only boundary of the kiosk: a line-buffered input and an output.
//!
//! ## Token Reading
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line:  "2 1\n"                                                   │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  pending: ["2", "1"]  ──► next_token() = "2" (main menu: order)        │
//! │                       ──► next_token() = "1" (size: 7")                 │
//! │                                                                         │
//! │  stdin line:  "abc 3\n"                                                 │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  "abc" rejected ──► discard_line() drops "3" ──► error + re-prompt     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests drive it with `Cursor` and
//! `Vec<u8>` while the binary uses locked stdin/stdout.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use kiosk_core::validation::parse_menu_choice;
use tracing::debug;

use crate::error::{KioskError, KioskResult};

/// Prompt/response channel to the customer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    /// Tokens left over from the current input line.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Output handle for `write!`/`writeln!`.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the terminal and returns the output (used by tests).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Returns the next whitespace-separated token, reading lines as needed.
    ///
    /// Output is flushed first so prompts without a trailing newline are
    /// visible. Blank lines are skipped.
    ///
    /// ## Errors
    /// `InputClosed` at end of input, `Io` if reading fails.
    pub fn next_token(&mut self) -> KioskResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            self.output.flush()?;

            // Raw bytes: a non-UTF-8 line is bad input, not a terminal failure
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(KioskError::InputClosed);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    /// Drops whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "discarding rest of input line");
        }
        self.pending.clear();
    }

    /// Reads a menu choice in `1..=max`, re-prompting until one is given.
    ///
    /// ## Behavior
    /// ```text
    /// token ──► parse_menu_choice(token, max)
    ///             ├── Ok(n)  → return n
    ///             └── Err(_) → discard rest of line
    ///                          print "{error_message}\nPlease try again (1 - max): "
    ///                          read again
    /// ```
    ///
    /// Invalid input never escapes this function; only a closed or failing
    /// terminal does.
    pub fn prompt_choice(&mut self, max: usize, error_message: &str) -> KioskResult<usize> {
        loop {
            let token = self.next_token()?;
            match parse_menu_choice(&token, max) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    debug!(%token, %err, max, "rejected menu choice");
                    self.discard_line();
                    write!(self.output, "{}\nPlease try again (1 - {}): ", error_message, max)?;
                }
            }
        }
    }

    /// Two-option menu where option 1 means yes.
    pub fn prompt_yes_no(&mut self, error_message: &str) -> KioskResult<bool> {
        Ok(self.prompt_choice(2, error_message)? == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(term: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut term = terminal("1 2\n\n3\n");
        assert_eq!(term.next_token().unwrap(), "1");
        assert_eq!(term.next_token().unwrap(), "2");
        assert_eq!(term.next_token().unwrap(), "3");
        assert!(matches!(term.next_token(), Err(KioskError::InputClosed)));
    }

    #[test]
    fn test_prompt_choice_accepts_first_valid() {
        let mut term = terminal("2\n");
        assert_eq!(term.prompt_choice(3, "bad").unwrap(), 2);
        assert_eq!(output_of(term), "");
    }

    #[test]
    fn test_prompt_choice_reprompts_on_garbage_and_range() {
        let mut term = terminal("abc\n0\n4\n3\n");
        assert_eq!(term.prompt_choice(3, "Invalid option").unwrap(), 3);
        assert_eq!(
            output_of(term),
            "Invalid option\nPlease try again (1 - 3): ".repeat(3)
        );
    }

    #[test]
    fn test_bad_token_discards_rest_of_line() {
        // "2" shares a line with the bad token and must not be used
        let mut term = terminal("x 2\n1\n");
        assert_eq!(term.prompt_choice(2, "nope").unwrap(), 1);
    }

    #[test]
    fn test_valid_token_keeps_rest_of_line() {
        let mut term = terminal("1 2\n");
        assert_eq!(term.prompt_choice(2, "nope").unwrap(), 1);
        assert_eq!(term.prompt_choice(2, "nope").unwrap(), 2);
    }

    #[test]
    fn test_prompt_choice_input_closed() {
        let mut term = terminal("9\n");
        assert!(matches!(
            term.prompt_choice(3, "nope"),
            Err(KioskError::InputClosed)
        ));
    }

    #[test]
    fn test_non_utf8_line_is_reprompted() {
        // Latin-1 pound sign followed by a digit on the same line
        let mut term = Terminal::new(Cursor::new(b"\xA35\n2\n".to_vec()), Vec::new());
        assert_eq!(term.prompt_choice(3, "Invalid option").unwrap(), 2);
        assert_eq!(output_of(term), "Invalid option\nPlease try again (1 - 3): ");
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut term = terminal("1\n2\n");
        assert!(term.prompt_yes_no("nope").unwrap());
        assert!(!term.prompt_yes_no("nope").unwrap());
    }

    fn junk_token() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z]{1,6}",
            (-50i64..=0).prop_map(|n| n.to_string()),
            (20i64..1000).prop_map(|n| n.to_string()),
            (1u32..99).prop_map(|n| format!("{n}.5")),
        ]
    }

    proptest! {
        /// However much junk comes first, the first in-range value wins and
        /// every rejected line produced exactly one retry message.
        #[test]
        fn prop_prompt_choice_skips_any_invalid_lines(
            max in 1usize..20,
            junk in proptest::collection::vec(junk_token(), 0..10),
            pick in 0usize..20,
        ) {
            let choice = pick % max + 1;
            let mut input: String = junk.iter().map(|t| format!("{t}\n")).collect();
            input.push_str(&format!("{choice}\n"));

            let mut term = terminal(&input);
            prop_assert_eq!(term.prompt_choice(max, "bad").unwrap(), choice);
            prop_assert_eq!(output_of(term).matches("Please try again").count(), junk.len());
        }
    }
}
