//! # Balance Top-Up
//!
//! Asks for a decimal amount in `0..=100`. Zero cancels.
//!
//! The flow only reports the increment; the caller adds it to the session.
//! Invalid amounts are handled like invalid menu choices: the rest of the
//! line is discarded and the customer is asked again.

use std::io::{BufRead, Write};

use kiosk_core::validation::parse_top_up;
use kiosk_core::{Money, MAX_TOP_UP};
use tracing::{debug, info};

use crate::error::KioskResult;
use crate::flows::KioskContext;
use crate::terminal::Terminal;

/// Runs the top-up dialogue and returns the amount to add (zero if cancelled).
pub fn run_top_up<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    ctx: &KioskContext,
    balance: Money,
) -> KioskResult<Money> {
    let unit = &ctx.config.unit_label;
    let max = MAX_TOP_UP.dollars();

    write!(
        term.out(),
        "You have chosen to add to your balance.\n\
         Your current balance is {}.\n\
         The maximum {unit} you can add at one time is {max} {unit} (Enter 0 to cancel).\n\n\
         Enter the number of {unit} you wish to add: ",
        ctx.amount(balance),
    )?;

    let amount = loop {
        let token = term.next_token()?;
        match parse_top_up(&token) {
            Ok(amount) => break amount,
            Err(err) => {
                debug!(%token, %err, "rejected top-up amount");
                term.discard_line();
                write!(
                    term.out(),
                    "The amount entered is invalid!\n\
                     Note that the maximum number of {unit} you can add at one time is {max}\n\n\
                     Please try again (0 - {max}): "
                )?;
            }
        }
    };

    if amount.is_zero() {
        info!(%balance, "top-up cancelled");
        write!(
            term.out(),
            "\nBalance addition cancelled.\nYour balance remains at {}.\n\n",
            ctx.amount(balance)
        )?;
        return Ok(Money::zero());
    }

    info!(%amount, new_balance = %(balance + amount), "top-up accepted");
    writeln!(
        term.out(),
        "\nYou have successfully added {} to your balance.\nYour new balance is: {}.",
        ctx.amount(amount),
        ctx.amount(balance + amount)
    )?;
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Cursor;

    fn run(input: impl AsRef<[u8]>, balance: Money) -> (Money, String) {
        let mut term = Terminal::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
        let amount = run_top_up(&mut term, &KioskContext::default(), balance).unwrap();
        (amount, String::from_utf8(term.into_output()).unwrap())
    }

    #[rstest]
    #[case("0\n")]
    #[case("0.00\n")]
    #[case("-0\n")]
    #[case("-0.00\n")]
    fn test_zero_cancels(#[case] input: &str) {
        let (amount, output) = run(input, Money::from_cents(150));
        assert_eq!(amount, Money::zero());
        assert!(output.contains("Balance addition cancelled.\nYour balance remains at 1.50 credits."));
    }

    #[rstest]
    #[case("4\n", 400)]
    #[case("0.20\n", 20)]
    #[case("100\n", 100_00)]
    fn test_accepted_amounts(#[case] input: &str, #[case] cents: i64) {
        let (amount, _) = run(input, Money::zero());
        assert_eq!(amount, Money::from_cents(cents));
    }

    #[test]
    fn test_success_message() {
        let (_, output) = run("4\n", Money::from_cents(50));
        assert!(output.ends_with(
            "\nYou have successfully added 4.00 credits to your balance.\nYour new balance is: 4.50 credits.\n"
        ));
    }

    #[test]
    fn test_invalid_then_valid() {
        let (amount, output) = run("abc 7\n101\n-2\n2.5\n", Money::zero());
        assert_eq!(amount, Money::from_cents(250));
        assert_eq!(output.matches("The amount entered is invalid!").count(), 3);
        assert!(output.contains("Please try again (0 - 100): "));
    }

    #[test]
    fn test_non_utf8_amount_is_reprompted() {
        let (amount, output) = run(b"\xFF\xFE5\n5\n", Money::zero());
        assert_eq!(amount, Money::from_cents(500));
        assert_eq!(output.matches("The amount entered is invalid!").count(), 1);
    }
}
