//! # Catalog
//!
//! The fixed menu the kiosk sells from.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sizes (SizeId)                    Toppings (ToppingId)                 │
//! │  ─────────────────────             ─────────────────────────            │
//! │  0   7"   3.00                     0  Ham           0.80                │
//! │  1   9"   5.50                     1  Mushrooms     0.50                │
//! │  2  14"   7.25                     2  Pepperoni     1.00                │
//! │                                    3  Olives        0.30                │
//! │                                    4  Pineapple     0.60                │
//! │                                    5  Extra Cheese  1.20                │
//! │                                                                         │
//! │  Menus show position + 1; the extra last option is "Return to Menu"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are identified by position. The catalog is built once at startup
//! and only read afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Position of a size in [`Catalog::sizes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SizeId(pub usize);

/// Position of a topping in [`Catalog::toppings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToppingId(pub usize);

impl SizeId {
    /// Converts a 1-based menu choice into an id.
    ///
    /// Returns `None` for 0, which no menu ever offers.
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).map(SizeId)
    }
}

impl ToppingId {
    /// Converts a 1-based menu choice into an id.
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).map(ToppingId)
    }
}

// =============================================================================
// Records
// =============================================================================

/// A pizza size and its base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSize {
    /// Diameter shown on the menu.
    pub diameter_inches: u32,
    pub price: Money,
}

impl PizzaSize {
    pub fn new(diameter_inches: u32, price: Money) -> Self {
        PizzaSize {
            diameter_inches,
            price,
        }
    }
}

/// A topping and its surcharge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub name: String,
    pub price: Money,
}

impl Topping {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Topping {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable, ordered list of sizes and toppings.
///
/// ## Invariants
/// - At least one size and one topping
/// - No negative prices
/// - Topping names are non-empty and unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    sizes: Vec<PizzaSize>,
    toppings: Vec<Topping>,
}

impl Catalog {
    /// Builds a catalog, checking its invariants.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{Catalog, Money, PizzaSize, Topping};
    ///
    /// let catalog = Catalog::new(
    ///     vec![PizzaSize::new(10, Money::from_cents(400))],
    ///     vec![Topping::new("Basil", Money::from_cents(25))],
    /// );
    /// assert!(catalog.is_ok());
    ///
    /// let empty = Catalog::new(vec![], vec![]);
    /// assert!(empty.is_err());
    /// ```
    pub fn new(sizes: Vec<PizzaSize>, toppings: Vec<Topping>) -> CoreResult<Self> {
        if sizes.is_empty() {
            return Err(invalid_catalog("at least one size is required"));
        }
        if toppings.is_empty() {
            return Err(invalid_catalog("at least one topping is required"));
        }

        if sizes.iter().any(|s| s.price.is_negative()) {
            return Err(ValidationError::Negative {
                field: "size price".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for topping in &toppings {
            if topping.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "topping name".to_string(),
                }
                .into());
            }
            if topping.price.is_negative() {
                return Err(ValidationError::Negative {
                    field: "topping price".to_string(),
                }
                .into());
            }
            if !seen.insert(topping.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "topping".to_string(),
                    value: topping.name.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { sizes, toppings })
    }

    /// The menu the kiosk ships with.
    pub fn standard() -> Self {
        Catalog {
            sizes: vec![
                PizzaSize::new(7, Money::from_major_minor(3, 0)),
                PizzaSize::new(9, Money::from_major_minor(5, 50)),
                PizzaSize::new(14, Money::from_major_minor(7, 25)),
            ],
            toppings: vec![
                Topping::new("Ham", Money::from_major_minor(0, 80)),
                Topping::new("Mushrooms", Money::from_major_minor(0, 50)),
                Topping::new("Pepperoni", Money::from_major_minor(1, 0)),
                Topping::new("Olives", Money::from_major_minor(0, 30)),
                Topping::new("Pineapple", Money::from_major_minor(0, 60)),
                Topping::new("Extra Cheese", Money::from_major_minor(1, 20)),
            ],
        }
    }

    pub fn sizes(&self) -> &[PizzaSize] {
        &self.sizes
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn size(&self, id: SizeId) -> Option<&PizzaSize> {
        self.sizes.get(id.0)
    }

    pub fn topping(&self, id: ToppingId) -> Option<&Topping> {
        self.toppings.get(id.0)
    }

    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Sizes paired with their ids, in menu order.
    pub fn sizes_with_ids(&self) -> impl Iterator<Item = (SizeId, &PizzaSize)> {
        self.sizes.iter().enumerate().map(|(i, s)| (SizeId(i), s))
    }

    /// Toppings paired with their ids, in menu order.
    pub fn toppings_with_ids(&self) -> impl Iterator<Item = (ToppingId, &Topping)> {
        self.toppings.iter().enumerate().map(|(i, t)| (ToppingId(i), t))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

fn invalid_catalog(reason: &str) -> CoreError {
    CoreError::InvalidCatalog {
        reason: reason.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.size_count(), 3);
        assert_eq!(catalog.topping_count(), 6);

        assert_eq!(catalog.size(SizeId(0)).map(|s| s.price), Some(Money::from_cents(300)));
        assert_eq!(catalog.size(SizeId(2)).map(|s| s.diameter_inches), Some(14));

        let ham = catalog.topping(ToppingId(0)).unwrap();
        assert_eq!(ham.name, "Ham");
        assert_eq!(ham.price, Money::from_cents(80));

        let prices: Vec<i64> = catalog.sizes().iter().map(|s| s.price.cents()).collect();
        assert_eq!(prices, vec![300, 550, 725]);
        let cheese = catalog.topping(ToppingId(5)).unwrap();
        assert_eq!(cheese.price, Money::from_cents(120));
    }

    #[test]
    fn test_standard_catalog_passes_validation() {
        let standard = Catalog::standard();
        let rebuilt = Catalog::new(standard.sizes().to_vec(), standard.toppings().to_vec());
        assert_eq!(rebuilt, Ok(standard));
    }

    #[test]
    fn test_lookup_out_of_range() {
        let catalog = Catalog::standard();
        assert!(catalog.size(SizeId(3)).is_none());
        assert!(catalog.topping(ToppingId(6)).is_none());
    }

    #[test]
    fn test_menu_choice_conversion() {
        assert_eq!(SizeId::from_menu_choice(1), Some(SizeId(0)));
        assert_eq!(ToppingId::from_menu_choice(6), Some(ToppingId(5)));
        assert_eq!(ToppingId::from_menu_choice(0), None);
    }

    #[test]
    fn test_rejects_duplicate_topping_names() {
        let result = Catalog::new(
            vec![PizzaSize::new(7, Money::from_cents(300))],
            vec![
                Topping::new("Ham", Money::from_cents(80)),
                Topping::new("Ham", Money::from_cents(90)),
            ],
        );
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_rejects_negative_prices() {
        let result = Catalog::new(
            vec![PizzaSize::new(7, Money::from_cents(-1))],
            vec![Topping::new("Ham", Money::from_cents(80))],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_follow_menu_order() {
        let catalog = Catalog::standard();
        let names: Vec<_> = catalog
            .toppings_with_ids()
            .map(|(id, t)| (id.0, t.name.as_str()))
            .collect();
        assert_eq!(names[5], (5, "Extra Cheese"));
    }
}
