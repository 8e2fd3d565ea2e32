//! # Order Flow
//!
//! Drives one pizza from size selection to payment, and repeats while the
//! customer wants another.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SelectSize ──► SelectToppings ──► ConfirmFunds ──► ConfirmPurchase     │
//! │      │               │                  │ ▲               │             │
//! │      │               │                  │ └── top-up      ├──► Completed│
//! │      │               │                  │                 │             │
//! │      └───────────────┴──────────────────┴─────────────────┴──► Cancelled│
//! │                                                                         │
//! │  Cancelled short-circuits straight back to the Main Menu.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use kiosk_core::{CoreError, Order, Receipt, Session, SizeId, ToppingId};
use tracing::{info, warn};

use crate::error::KioskResult;
use crate::flows::top_up::run_top_up;
use crate::flows::{KioskContext, SEPARATOR};
use crate::terminal::Terminal;

// =============================================================================
// Outcomes
// =============================================================================

/// Where an order was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPoint {
    SizeSelection,
    ToppingSelection,
    InsufficientFunds,
    PaymentConfirmation,
}

/// How a single pizza order ended.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Completed(Receipt),
    Cancelled(CancelPoint),
}

enum Step {
    SelectSize,
    SelectToppings(Order),
    ConfirmFunds(Order),
    ConfirmPurchase(Order),
    Done(OrderOutcome),
}

// =============================================================================
// Entry Points
// =============================================================================

/// Orders pizzas until the customer cancels or declines another one.
///
/// Returns the receipts of every completed pizza, in order.
pub fn run_ordering<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    ctx: &KioskContext,
    session: &mut Session,
) -> KioskResult<Vec<Receipt>> {
    let mut receipts = Vec::new();

    loop {
        match run_order_flow(term, ctx, session)? {
            OrderOutcome::Cancelled(_) => return Ok(receipts),
            OrderOutcome::Completed(receipt) => receipts.push(receipt),
        }

        write!(
            term.out(),
            "Would you like to order another pizza?\n1) Yes\n2) No\nEnter an option (1 - 2): "
        )?;
        let again = term.prompt_yes_no(
            "Sorry, this is an invalid option, valid options are:\n\
             1) Yes, order another pizza\n\
             2) No, return to main menu",
        )?;
        if !again {
            return Ok(receipts);
        }
    }
}

/// Runs the state machine for one pizza.
pub fn run_order_flow<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    ctx: &KioskContext,
    session: &mut Session,
) -> KioskResult<OrderOutcome> {
    let mut flow = OrderFlow { term, ctx, session };
    let mut step = Step::SelectSize;

    loop {
        step = match step {
            Step::SelectSize => flow.select_size()?,
            Step::SelectToppings(order) => flow.select_toppings(order)?,
            Step::ConfirmFunds(order) => flow.confirm_funds(order)?,
            Step::ConfirmPurchase(order) => flow.confirm_purchase(order)?,
            Step::Done(outcome) => return Ok(outcome),
        };
    }
}

// =============================================================================
// States
// =============================================================================

struct OrderFlow<'a, R, W> {
    term: &'a mut Terminal<R, W>,
    ctx: &'a KioskContext,
    session: &'a mut Session,
}

impl<R: BufRead, W: Write> OrderFlow<'_, R, W> {
    fn cancel(&mut self, at: CancelPoint, message: &str) -> KioskResult<Step> {
        info!(?at, "pizza order cancelled");
        write!(self.term.out(), "{}", message)?;
        Ok(Step::Done(OrderOutcome::Cancelled(at)))
    }

    fn select_size(&mut self) -> KioskResult<Step> {
        let ctx = self.ctx;
        let catalog = &ctx.catalog;
        let back = catalog.size_count() + 1;

        let out = self.term.out();
        write!(
            out,
            "You have chosen to order a pizza.\nYour current balance is {}.\n\n\
             Please select a size of pizza from the options below:\n",
            ctx.amount(self.session.balance())
        )?;
        for (id, size) in catalog.sizes_with_ids() {
            writeln!(
                out,
                "{}) {} inches (Price: {})",
                id.0 + 1,
                size.diameter_inches,
                ctx.amount(size.price)
            )?;
        }
        write!(out, "{back}) Return to Main Menu\n\nSelect your size of pizza (1 - {back}): ")?;

        let choice = self
            .term
            .prompt_choice(back, "Sorry this is an invalid size of pizza.")?;
        let size_id = match SizeId::from_menu_choice(choice) {
            Some(id) if choice != back => id,
            _ => return self.cancel(CancelPoint::SizeSelection, "\nPizza order cancelled.\n"),
        };

        let order = Order::new(size_id, catalog)?;
        info!(
            order_id = %order.id(),
            inches = order.size().diameter_inches,
            created_at = %order.created_at(),
            "pizza order started"
        );

        write!(
            self.term.out(),
            "\nYou have chosen a {}-inch pizza.\nThe base cost of this pizza is {}\n\n\
             {SEPARATOR}\n\nPizza Toppings\n\n\
             Please choose at least one topping from the list below:",
            order.size().diameter_inches,
            ctx.amount(order.cost())
        )?;
        Ok(Step::SelectToppings(order))
    }

    fn select_toppings(&mut self, mut order: Order) -> KioskResult<Step> {
        let ctx = self.ctx;
        let catalog = &ctx.catalog;
        let back = catalog.topping_count() + 1;

        loop {
            writeln!(self.term.out())?;

            if order.has_all_toppings(catalog) {
                write!(self.term.out(), "You have added the maximum number of toppings!\n\n")?;
                break;
            }

            let out = self.term.out();
            for (id, topping) in catalog.toppings_with_ids() {
                let marker = if order.has_topping(id) { " [added]" } else { "" };
                writeln!(
                    out,
                    "{}) {} (Price: {}){}",
                    id.0 + 1,
                    topping.name,
                    ctx.amount(topping.price),
                    marker
                )?;
            }
            write!(out, "{back}) Return to Main Menu\n\nEnter your choice here (1 - {back}): ")?;

            let choice = self
                .term
                .prompt_choice(back, "Sorry, this is not a valid topping!")?;
            let topping_id = match ToppingId::from_menu_choice(choice) {
                Some(id) if choice != back => id,
                _ => return self.cancel(CancelPoint::ToppingSelection, "\nPizza order cancelled.\n"),
            };

            match order.add_topping(topping_id, catalog) {
                Ok(cost) => {
                    let name = catalog
                        .topping(topping_id)
                        .map(|t| t.name.as_str())
                        .unwrap_or_default();
                    write!(
                        self.term.out(),
                        "\nYou have chosen to add {name} to your pizza.\n\
                         The new cost of the pizza is {}\n\
                         Would you like to add another topping?\n1) Yes\n2) No\n\
                         Enter your choice here (1 - 2): ",
                        ctx.amount(cost)
                    )?;
                    let another = self.term.prompt_yes_no(
                        "That option is invalid! Valid options are:\n1) Yes\n2) No\n",
                    )?;
                    if !another {
                        break;
                    }
                }
                Err(CoreError::DuplicateTopping { name }) => {
                    write!(
                        self.term.out(),
                        "\nYou have already added {name} to your pizza!\nPlease try again.\n"
                    )?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let out = self.term.out();
        write!(
            out,
            "\nThe pizza ordering process is now complete.\nYour pizza will cost {}.\n\n\
             Additional toppings:\n",
            ctx.amount(order.cost())
        )?;
        for topping in order.toppings() {
            writeln!(out, "- {} (Price: {})", topping.name, ctx.amount(topping.price))?;
        }
        writeln!(out)?;

        Ok(Step::ConfirmFunds(order))
    }

    fn confirm_funds(&mut self, order: Order) -> KioskResult<Step> {
        while !self.session.can_afford(&order) {
            warn!(
                balance = %self.session.balance(),
                cost = %order.cost(),
                shortfall = %self.session.shortfall(&order),
                "insufficient funds for order"
            );
            write!(
                self.term.out(),
                "You do not have sufficient funds to purchase this pizza!\n\
                 Would you like to add funds to your balance?\n\
                 1) Add to balance\n2) Cancel order\nEnter your choice here (1 - 2): "
            )?;
            if !self.term.prompt_yes_no("This is not a valid choice!")? {
                return self.cancel(CancelPoint::InsufficientFunds, "\nPizza order cancelled.\n\n");
            }

            let increment = run_top_up(self.term, self.ctx, self.session.balance())?;
            self.session.deposit(increment)?;
            writeln!(self.term.out())?;
        }

        Ok(Step::ConfirmPurchase(order))
    }

    fn confirm_purchase(&mut self, order: Order) -> KioskResult<Step> {
        let ctx = self.ctx;
        write!(
            self.term.out(),
            "Your pizza is ready to order. Would you like to pay {} for this pizza?\n\
             1) Yes, pay for my pizza\n2) No, cancel my order\nEnter an option (1 - 2): ",
            ctx.amount(order.cost())
        )?;
        if !self.term.prompt_yes_no("This is not a valid option!")? {
            return self.cancel(CancelPoint::PaymentConfirmation, "Your order has been cancelled\n");
        }

        let receipt = self.session.purchase(&order)?;
        match receipt.to_json() {
            Ok(json) => info!(receipt = %json, "purchase completed"),
            Err(err) => warn!(%err, order_id = %receipt.order_id, "purchase completed, receipt not serializable"),
        }

        write!(
            self.term.out(),
            "\nThank you for purchasing a pizza from the {}\nYour remaining balance is {}.\n\n",
            ctx.config.machine_name,
            ctx.amount(receipt.remaining_balance)
        )?;
        Ok(Step::Done(OrderOutcome::Completed(receipt)))
    }
}
