use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_categories::ListCategoriesUseCase;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, ProductError> {
        self.logger.info("Listing categories");

        let products = self.repository.get_all().await?;

        // Labels are keyed by exact text: case- and whitespace-sensitive.
        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        for product in products {
            for label in product.categories {
                if seen.insert(label.clone()) {
                    labels.push(label);
                }
            }
        }

        self.logger
            .info(&format!("Found {} categories", labels.len()));
        Ok(labels)
    }
}
