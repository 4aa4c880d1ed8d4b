use poem_openapi::Object;

use business::domain::product::categories;
use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price, must be greater than zero
    pub price: f64,
    /// Category labels
    #[oai(skip_serializing_if_is_none)]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price, must be greater than zero
    pub price: f64,
    /// Category labels
    #[oai(skip_serializing_if_is_none)]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Category labels as a single comma-space-joined string
    pub categories: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            categories: categories::to_storage(&product.categories),
        }
    }
}

/// Confirmation body returned by the delete endpoint.
#[derive(Debug, Clone, Object)]
pub struct DeleteProductMessage {
    pub message: String,
}
