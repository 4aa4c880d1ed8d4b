use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, ProductError>;
}
