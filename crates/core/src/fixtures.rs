//! Catalog fixtures shared by unit and integration tests.
//!
//! Identifiers are fixed so tests can reference options and items without
//! digging them back out of the built product.

use rust_decimal::Decimal;
use smallvec::SmallVec;
use uuid::Uuid;

use crate::catalog::{
    Category, CategoryUuid, CustomizationItem, CustomizationOption, OptionItemUuid, OptionUuid,
    Product, ProductUuid, RestaurantUuid, SelectedOption,
};

/// Restaurant most fixtures belong to.
#[must_use]
pub fn restaurant_a() -> RestaurantUuid {
    RestaurantUuid::from_uuid(Uuid::from_u128(0xA1))
}

/// A second restaurant, for tenant isolation tests.
#[must_use]
pub fn restaurant_b() -> RestaurantUuid {
    RestaurantUuid::from_uuid(Uuid::from_u128(0xB2))
}

/// Category the burger fixtures live in.
#[must_use]
pub fn snacks_category(restaurant: RestaurantUuid) -> Category {
    Category {
        uuid: CategoryUuid::from_uuid(Uuid::from_u128(0xC1)),
        name: "Lanches".to_string(),
        description: "Burgers e porções".to_string(),
        restaurant_uuid: restaurant,
    }
}

/// Category the drink fixtures live in.
#[must_use]
pub fn drinks_category(restaurant: RestaurantUuid) -> Category {
    Category {
        uuid: CategoryUuid::from_uuid(Uuid::from_u128(0xC2)),
        name: "Bebidas".to_string(),
        description: String::new(),
        restaurant_uuid: restaurant,
    }
}

/// A plain product with no customization options, selling at 45.90.
#[must_use]
pub fn simple_product(restaurant: RestaurantUuid) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: "X-Burger".to_string(),
        description: "Hambúrguer da casa".to_string(),
        price: Decimal::new(4590, 2),
        image: String::new(),
        category_uuid: snacks_category(restaurant).uuid,
        restaurant_uuid: restaurant,
        customization_options: Vec::new(),
        is_promotion: false,
        promotion_price: None,
        is_available: true,
    }
}

/// A product on promotion: base 39.90, promotion price 29.90.
#[must_use]
pub fn promo_product(restaurant: RestaurantUuid) -> Product {
    let mut product = simple_product(restaurant);
    product.name = "Pizza Margherita".to_string();
    product.price = Decimal::new(3990, 2);
    product.is_promotion = true;
    product.promotion_price = Some(Decimal::new(2990, 2));
    product
}

/// A 25.00 product with a required single-select size group and an optional
/// multi-select extras group.
#[must_use]
pub fn customizable_product(restaurant: RestaurantUuid) -> Product {
    let mut product = simple_product(restaurant);
    product.name = "Açaí".to_string();
    product.price = Decimal::new(2500, 2);
    product.customization_options = vec![size_option(), extras_option()];
    product
}

/// Uuid of the size group on [`customizable_product`].
#[must_use]
pub fn size_option_uuid() -> OptionUuid {
    OptionUuid::from_uuid(Uuid::from_u128(0x10))
}

/// Regular size, +0.00.
#[must_use]
pub fn size_regular() -> OptionItemUuid {
    OptionItemUuid::from_uuid(Uuid::from_u128(0x11))
}

/// Large size, +5.00.
#[must_use]
pub fn size_large() -> OptionItemUuid {
    OptionItemUuid::from_uuid(Uuid::from_u128(0x12))
}

/// Uuid of the extras group on [`customizable_product`].
#[must_use]
pub fn extras_option_uuid() -> OptionUuid {
    OptionUuid::from_uuid(Uuid::from_u128(0x20))
}

/// Extra cheddar, +3.50.
#[must_use]
pub fn extra_cheddar() -> OptionItemUuid {
    OptionItemUuid::from_uuid(Uuid::from_u128(0x21))
}

/// Extra bacon, +4.00.
#[must_use]
pub fn extra_bacon() -> OptionItemUuid {
    OptionItemUuid::from_uuid(Uuid::from_u128(0x22))
}

/// Required single-select size group.
#[must_use]
pub fn size_option() -> CustomizationOption {
    CustomizationOption {
        uuid: size_option_uuid(),
        name: "Tamanho".to_string(),
        required: true,
        multi_select: false,
        items: vec![
            CustomizationItem {
                uuid: size_regular(),
                name: "Médio".to_string(),
                price: Decimal::ZERO,
            },
            CustomizationItem {
                uuid: size_large(),
                name: "Grande".to_string(),
                price: Decimal::new(500, 2),
            },
        ],
    }
}

/// Optional multi-select extras group.
#[must_use]
pub fn extras_option() -> CustomizationOption {
    CustomizationOption {
        uuid: extras_option_uuid(),
        name: "Adicionais".to_string(),
        required: false,
        multi_select: true,
        items: vec![
            CustomizationItem {
                uuid: extra_cheddar(),
                name: "Cheddar".to_string(),
                price: Decimal::new(350, 2),
            },
            CustomizationItem {
                uuid: extra_bacon(),
                name: "Bacon".to_string(),
                price: Decimal::new(400, 2),
            },
        ],
    }
}

/// Selection of the given items within the given option.
#[must_use]
pub fn select(option_uuid: OptionUuid, items: &[OptionItemUuid]) -> SelectedOption {
    SelectedOption {
        option_uuid,
        selected_items: SmallVec::from_slice(items),
    }
}
