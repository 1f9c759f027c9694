//! Menu Item Model

use super::serde_helpers::{bool_true, default_true, null_as_default};
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Bakery,
    Cafe,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 2] = [MenuCategory::Bakery, MenuCategory::Cafe];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Bakery => "bakery",
            MenuCategory::Cafe => "cafe",
        }
    }
}

/// Menu item entity
///
/// Only the seeding routine creates menu items; the API never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in currency unit
    pub price: f64,
    pub category: MenuCategory,
    /// Image URL
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "bool_true")]
    pub available: bool,
}
