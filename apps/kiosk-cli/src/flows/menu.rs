//! # Main Menu
//!
//! Top-level loop: top-up, order, or exit (with confirmation).

use std::io::{BufRead, Write};

use kiosk_core::{CoreError, Session, ValidationError, MIN_MENU_CHOICE};
use tracing::info;

use crate::error::KioskResult;
use crate::flows::order::run_ordering;
use crate::flows::top_up::run_top_up;
use crate::flows::{KioskContext, SEPARATOR};
use crate::terminal::Terminal;

/// The three main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    TopUp,
    OrderPizza,
    Exit,
}

impl MainMenuChoice {
    const COUNT: usize = 3;
}

impl TryFrom<usize> for MainMenuChoice {
    type Error = ValidationError;

    fn try_from(choice: usize) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(MainMenuChoice::TopUp),
            2 => Ok(MainMenuChoice::OrderPizza),
            3 => Ok(MainMenuChoice::Exit),
            _ => Err(ValidationError::OutOfRange {
                field: "choice".to_string(),
                min: MIN_MENU_CHOICE as i64,
                max: MainMenuChoice::COUNT as i64,
            }),
        }
    }
}

/// Shows the main menu until the customer confirms they want to leave.
pub fn run_main_menu<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    ctx: &KioskContext,
    session: &mut Session,
) -> KioskResult<()> {
    loop {
        write!(
            term.out(),
            "\n{SEPARATOR}\n\nMain Menu\n\n1) Add {unit} to balance\n2) Order Pizza\n3) Exit\n\n\
             Your current credit balance is: {}\n\n\
             Enter an option to continue (1, 2, or 3): ",
            ctx.amount(session.balance()),
            unit = ctx.config.unit_label,
        )?;
        let choice = term.prompt_choice(
            MainMenuChoice::COUNT,
            &format!(
                "Sorry, this is an invalid option, valid options are:\n\
                 1) Add {} to balance\n2) Order pizza\n3) Exit",
                ctx.config.unit_label
            ),
        )?;
        write!(term.out(), "\n{SEPARATOR}\n\n")?;

        match MainMenuChoice::try_from(choice).map_err(CoreError::from)? {
            MainMenuChoice::TopUp => {
                let increment = run_top_up(term, ctx, session.balance())?;
                session.deposit(increment)?;
            }
            MainMenuChoice::OrderPizza => {
                let receipts = run_ordering(term, ctx, session)?;
                info!(pizzas = receipts.len(), balance = %session.balance(), "returned to main menu");
            }
            MainMenuChoice::Exit => {
                if confirm_exit(term)? {
                    info!(balance = %session.balance(), "exit confirmed");
                    return Ok(());
                }
            }
        }
    }
}

fn confirm_exit<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> KioskResult<bool> {
    write!(
        term.out(),
        "You have chosen to exit this service.\n1) Return to main menu\n2) Exit\n\
         Enter an option to continue (1 - 2): "
    )?;
    let stay = term.prompt_yes_no(
        "Sorry, this is an invalid option, valid options are:\n1) Return to main menu\n2) Exit",
    )?;
    writeln!(term.out())?;
    Ok(!stay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::Money;
    use rstest::rstest;
    use std::io::Cursor;

    fn run(input: &str, session: &mut Session) -> String {
        let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_main_menu(&mut term, &KioskContext::default(), session).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_exit_needs_confirmation() {
        let mut session = Session::new();
        let output = run("3\n1\n3\n2\n", &mut session);
        assert_eq!(output.matches("Main Menu").count(), 2);
        assert_eq!(output.matches("You have chosen to exit this service.").count(), 2);
    }

    #[test]
    fn test_top_up_then_exit() {
        let mut session = Session::new();
        let output = run("1\n12.5\n3\n2\n", &mut session);
        assert_eq!(session.balance(), Money::from_cents(1250));
        assert!(output.contains("Your current credit balance is: 12.50 credits"));
    }

    #[test]
    fn test_invalid_main_menu_choice() {
        let mut session = Session::new();
        let output = run("9\n3\n2\n", &mut session);
        assert!(output.contains(
            "Sorry, this is an invalid option, valid options are:\n1) Add credits to balance\n2) Order pizza\n3) Exit\nPlease try again (1 - 3): "
        ));
    }

    #[test]
    fn test_choice_mapping() {
        assert_eq!(MainMenuChoice::try_from(1), Ok(MainMenuChoice::TopUp));
        assert_eq!(MainMenuChoice::try_from(2), Ok(MainMenuChoice::OrderPizza));
        assert_eq!(MainMenuChoice::try_from(3), Ok(MainMenuChoice::Exit));
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(usize::MAX)]
    fn test_choice_outside_menu_is_not_exit(#[case] choice: usize) {
        assert_eq!(
            MainMenuChoice::try_from(choice),
            Err(ValidationError::OutOfRange {
                field: "choice".to_string(),
                min: 1,
                max: 3,
            })
        );
    }
}
