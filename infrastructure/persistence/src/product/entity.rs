use sqlx::FromRow;

use business::domain::product::categories;
use business::domain::product::model::Product;

/// Row shape of the `products` table. Categories are stored as a single
/// `", "`-joined string.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub categories: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            categories::from_storage(&self.categories),
        )
    }
}
