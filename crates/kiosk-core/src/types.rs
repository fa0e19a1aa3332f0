//! # Domain Types
//!
//! Core domain types for the kiosk cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartEntry     │   │    Catalog      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │──►│  name (frozen)  │   │  Vec<Product>   │       │
//! │  │  sku (business) │   │  price (frozen) │   │  lookup by sku  │       │
//! │  │  name, price    │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, unique per product instance
//! - `sku`: business identifier - human-readable, used for lookup
//!
//! `CartEntry` is deliberately NOT a product reference: it freezes the name
//! and price at the moment of adding, so later catalog edits never rewrite
//! what the customer saw. Entries compare by value, never by identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Cart Entry
// =============================================================================

/// A single cart line item.
///
/// ## Design Notes
/// - Immutable value type: construct it, clone it, never mutate it
/// - Equality is by value (`name` + `price`), which is what snapshot
///   comparison and restore verification rely on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Display name at time of adding (frozen).
    pub name: String,

    /// Price at time of adding (frozen).
    pub price: Money,
}

impl CartEntry {
    /// Creates a cart entry from a name and price.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        CartEntry {
            name: name.into(),
            price,
        }
    }

    /// Creates a cart entry from a catalog product.
    ///
    /// ## Price Freezing
    /// The name and price are captured at this moment. If the product later
    /// changes in the catalog, this entry retains the original values.
    pub fn from_product(product: &Product) -> Self {
        CartEntry {
            name: product.name.clone(),
            price: product.price,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Cloning a product is cheap and explicit: `product.clone()` yields an
/// independent copy sharing nothing with the original, which is how demo
/// catalogs stamp out variants of a base product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown on the shelf and the receipt.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a new product with a freshly generated id.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The ordered list of products on offer.
///
/// Insertion order is display order. SKUs are expected to be unique but the
/// catalog does not enforce it; `get_by_sku` returns the first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Adds a product to the end of the catalog.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Looks up a product by SKU.
    pub fn get_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Returns all products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
