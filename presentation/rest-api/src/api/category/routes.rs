use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::list_categories::ListCategoriesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
}

impl CategoryApi {
    pub fn new(list_categories_use_case: Arc<dyn ListCategoriesUseCase>) -> Self {
        Self {
            list_categories_use_case,
        }
    }
}

/// Category listing API
#[OpenApi]
impl CategoryApi {
    /// List categories
    ///
    /// Returns the unique category labels referenced by any product.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.list_categories_use_case.execute().await {
            Ok(labels) => GetCategoriesResponse::Ok(Json(labels)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
