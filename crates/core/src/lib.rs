//! Carddz
//!
//! Domain engine for the Carddz restaurant ordering application: the menu
//! catalog model, customization-aware pricing, the single-restaurant
//! shopping cart and the order lifecycle.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod money;
pub mod orders;
pub mod pricing;
pub mod uuids;
