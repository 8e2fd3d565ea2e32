//! # Order
//!
//! One pizza being configured before payment.
//!
//! An order exists only between size selection and purchase (or
//! cancellation). Size and topping records are snapshotted when chosen, so
//! the receipt shows exactly what was priced.
//!
//! ## Invariants
//! - `cost() == size.price + Σ topping prices`
//! - A topping appears at most once

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::{Catalog, PizzaSize, SizeId, Topping, ToppingId};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// An in-progress pizza.
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    size: PizzaSize,
    /// Keyed by catalog position, so iteration follows menu order.
    toppings: BTreeMap<ToppingId, Topping>,
    cost: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Starts an order with the chosen size.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{Catalog, Order, SizeId};
    ///
    /// let catalog = Catalog::standard();
    /// let order = Order::new(SizeId(1), &catalog).unwrap();
    /// assert_eq!(order.cost().to_string(), "5.50");
    /// assert_eq!(order.topping_count(), 0);
    /// ```
    pub fn new(size_id: SizeId, catalog: &Catalog) -> CoreResult<Self> {
        let size = catalog
            .size(size_id)
            .cloned()
            .ok_or(CoreError::UnknownSize(size_id.0))?;

        Ok(Order {
            id: Uuid::new_v4(),
            cost: size.price,
            size,
            toppings: BTreeMap::new(),
            created_at: Utc::now(),
        })
    }

    /// Adds a topping and returns the new cost.
    ///
    /// ## Errors
    /// - `DuplicateTopping` if it is already on the pizza (cost unchanged)
    /// - `UnknownTopping` if the id is not in the catalog
    pub fn add_topping(&mut self, id: ToppingId, catalog: &Catalog) -> CoreResult<Money> {
        let topping = catalog.topping(id).ok_or(CoreError::UnknownTopping(id.0))?;

        if self.toppings.contains_key(&id) {
            return Err(CoreError::DuplicateTopping {
                name: topping.name.clone(),
            });
        }

        self.cost += topping.price;
        self.toppings.insert(id, topping.clone());
        Ok(self.cost)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn size(&self) -> &PizzaSize {
        &self.size
    }

    /// Accumulated cost of size plus toppings.
    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn has_topping(&self, id: ToppingId) -> bool {
        self.toppings.contains_key(&id)
    }

    /// Selected toppings in menu order.
    pub fn toppings(&self) -> impl Iterator<Item = &Topping> {
        self.toppings.values()
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// True once every topping on the menu has been added.
    pub fn has_all_toppings(&self, catalog: &Catalog) -> bool {
        self.toppings.len() >= catalog.topping_count()
    }

    /// When the size was chosen; carried onto the receipt as `ordered_at`.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_order_costs_base_price() {
        let catalog = Catalog::standard();
        let order = Order::new(SizeId(2), &catalog).unwrap();
        assert_eq!(order.cost(), Money::from_cents(725));
        assert_eq!(order.size().diameter_inches, 14);
    }

    #[test]
    fn test_unknown_size() {
        let catalog = Catalog::standard();
        assert_eq!(
            Order::new(SizeId(3), &catalog).unwrap_err(),
            CoreError::UnknownSize(3)
        );
    }

    #[test]
    fn test_add_topping_accumulates_cost() {
        let catalog = Catalog::standard();
        let mut order = Order::new(SizeId(0), &catalog).unwrap();

        assert_eq!(order.add_topping(ToppingId(0), &catalog), Ok(Money::from_cents(380)));
        assert_eq!(order.add_topping(ToppingId(5), &catalog), Ok(Money::from_cents(500)));
        assert!(order.has_topping(ToppingId(5)));
        assert_eq!(order.topping_count(), 2);
    }

    #[test]
    fn test_duplicate_topping_is_rejected_without_charging() {
        let catalog = Catalog::standard();
        let mut order = Order::new(SizeId(0), &catalog).unwrap();
        order.add_topping(ToppingId(0), &catalog).unwrap();

        let err = order.add_topping(ToppingId(0), &catalog).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateTopping {
                name: "Ham".to_string()
            }
        );
        assert_eq!(order.cost(), Money::from_cents(380));
        assert_eq!(order.topping_count(), 1);
    }

    #[test]
    fn test_unknown_topping() {
        let catalog = Catalog::standard();
        let mut order = Order::new(SizeId(0), &catalog).unwrap();
        assert_eq!(
            order.add_topping(ToppingId(6), &catalog),
            Err(CoreError::UnknownTopping(6))
        );
    }

    #[test]
    fn test_toppings_listed_in_menu_order() {
        let catalog = Catalog::standard();
        let mut order = Order::new(SizeId(1), &catalog).unwrap();
        order.add_topping(ToppingId(4), &catalog).unwrap();
        order.add_topping(ToppingId(1), &catalog).unwrap();

        let names: Vec<_> = order.toppings().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Mushrooms", "Pineapple"]);
    }

    #[test]
    fn test_has_all_toppings() {
        let catalog = Catalog::standard();
        let mut order = Order::new(SizeId(0), &catalog).unwrap();
        for (id, _) in catalog.toppings_with_ids() {
            assert!(!order.has_all_toppings(&catalog));
            order.add_topping(id, &catalog).unwrap();
        }
        assert!(order.has_all_toppings(&catalog));
        assert_eq!(order.cost(), Money::from_cents(300 + 80 + 50 + 100 + 30 + 60 + 120));
    }

    proptest! {
        /// Whatever sequence of picks (repeats included), cost equals the
        /// size price plus each distinct topping counted once.
        #[test]
        fn prop_cost_matches_selected_set(
            size in 0usize..3,
            picks in proptest::collection::vec(0usize..6, 0..20),
        ) {
            let catalog = Catalog::standard();
            let mut order = Order::new(SizeId(size), &catalog).unwrap();
            for pick in &picks {
                let _ = order.add_topping(ToppingId(*pick), &catalog);
            }

            let mut distinct = picks.clone();
            distinct.sort_unstable();
            distinct.dedup();

            let expected = catalog.sizes()[size].price
                + distinct.iter().map(|i| catalog.toppings()[*i].price).sum::<Money>();
            prop_assert_eq!(order.cost(), expected);
            prop_assert_eq!(order.topping_count(), distinct.len());
        }
    }
}
