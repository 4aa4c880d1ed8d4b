use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// A catalog product persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: Vec<String>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub categories: Option<Vec<String>>,
}

/// A validated product that has not been persisted yet.
/// The id is assigned by the repository on insert.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: Vec<String>,
}

impl ProductDraft {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price <= 0.0 {
            return Err(ProductError::PriceNotPositive);
        }

        Ok(Self {
            name: props.name,
            description: props.description.unwrap_or_default(),
            price: props.price,
            categories: props.categories.unwrap_or_default(),
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: String,
        price: f64,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            categories,
        }
    }
}
