use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new row and returns it with its store-assigned id.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Overwrites all mutable fields of the row identified by `product.id`.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Removes the row. Deleting an absent id is a no-op success.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
