//! Catalog

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Marker for restaurant-scoped identifiers. The restaurant record itself
/// lives with the application layer; the catalog only needs the id to scope
/// its data to one tenant.
#[derive(Debug)]
pub struct RestaurantRef;

/// Restaurant UUID
pub type RestaurantUuid = TypedUuid<RestaurantRef>;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Customization option UUID
pub type OptionUuid = TypedUuid<CustomizationOption>;

/// Customization item UUID
pub type OptionItemUuid = TypedUuid<CustomizationItem>;

/// Category Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: String,
    pub description: String,
    pub restaurant_uuid: RestaurantUuid,
}

/// Product Model
///
/// Cart lines hold a snapshot copy of the product they were configured from,
/// so later catalog edits never reprice lines already in a cart or an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    /// Base selling price per unit.
    pub price: Decimal,
    pub image: String,
    pub category_uuid: CategoryUuid,
    pub restaurant_uuid: RestaurantUuid,
    /// Declared choice groups, in menu order.
    #[serde(default)]
    pub customization_options: Vec<CustomizationOption>,
    #[serde(default)]
    pub is_promotion: bool,
    pub promotion_price: Option<Decimal>,
    pub is_available: bool,
}

impl Product {
    /// The price a single unconfigured unit currently sells at: the
    /// promotion price when the promotion flag is set and a value is
    /// present, the base price otherwise.
    #[must_use]
    pub fn active_price(&self) -> Decimal {
        if self.is_promotion {
            if let Some(promotion_price) = self.promotion_price {
                return promotion_price;
            }
        }

        self.price
    }
}

/// A named choice group on a product, e.g. size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOption {
    pub uuid: OptionUuid,
    pub name: String,
    /// Whether the customer must pick from this group.
    pub required: bool,
    /// Whether more than one item may be picked.
    pub multi_select: bool,
    /// Selectable values, in menu order.
    pub items: Vec<CustomizationItem>,
}

/// One selectable value within a choice group, with its price delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationItem {
    pub uuid: OptionItemUuid,
    pub name: String,
    /// Added to the unit price when selected. Non-negative.
    pub price: Decimal,
}

/// Items chosen within one option. Small on the happy path.
pub type SelectedItems = SmallVec<[OptionItemUuid; 4]>;

/// One option's worth of chosen customization items on a cart line.
///
/// Selection lists compare structurally: the same items picked in a
/// different order count as a different configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub option_uuid: OptionUuid,
    pub selected_items: SelectedItems,
}

/// Errors raised when a selection set violates a product's declared options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// A required single-select option needs exactly one item chosen.
    #[error("option {option_uuid} requires exactly one selected item")]
    ExactlyOneRequired {
        /// The violated option.
        option_uuid: OptionUuid,
    },

    /// A required multi-select option needs at least one item chosen.
    #[error("option {option_uuid} requires at least one selected item")]
    AtLeastOneRequired {
        /// The violated option.
        option_uuid: OptionUuid,
    },
}

/// Checks a selection set against the product's declared options.
///
/// Only declared options are checked; selections referencing unknown option
/// ids are left for pricing to ignore.
///
/// # Errors
///
/// - [`SelectionError::ExactlyOneRequired`]: a required single-select option
///   has zero or several items chosen.
/// - [`SelectionError::AtLeastOneRequired`]: a required multi-select option
///   has nothing chosen.
pub fn validate_selections(
    product: &Product,
    selections: &[SelectedOption],
) -> Result<(), SelectionError> {
    for option in &product.customization_options {
        let chosen = selections
            .iter()
            .find(|selection| selection.option_uuid == option.uuid)
            .map_or(0, |selection| selection.selected_items.len());

        if option.required && !option.multi_select && chosen != 1 {
            return Err(SelectionError::ExactlyOneRequired {
                option_uuid: option.uuid,
            });
        }

        if option.required && option.multi_select && chosen == 0 {
            return Err(SelectionError::AtLeastOneRequired {
                option_uuid: option.uuid,
            });
        }
    }

    Ok(())
}

/// The selection set a product configurator starts from: for every required
/// single-select option the first item is pre-selected, everything else is
/// left empty.
#[must_use]
pub fn default_selections(product: &Product) -> Vec<SelectedOption> {
    product
        .customization_options
        .iter()
        .filter(|option| option.required && !option.multi_select)
        .filter_map(|option| {
            option.items.first().map(|first| SelectedOption {
                option_uuid: option.uuid,
                selected_items: SmallVec::from_slice(&[first.uuid]),
            })
        })
        .collect()
}
