use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::catalog::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use business::domain::catalog::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_by_name::{
    GetProductsByNameParams, GetProductsByNameUseCase,
};
use business::domain::catalog::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::catalog::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

/// The document store's native identifier: 24 hex characters.
fn is_product_id_token(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

fn invalid_id_response() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

pub struct CatalogApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_name_use_case: Arc<dyn GetProductsByNameUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_name_use_case: Arc<dyn GetProductsByNameUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            get_by_category_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, replacing, and deleting catalog products.
#[OpenApi]
impl CatalogApi {
    /// List the full catalog
    ///
    /// An empty catalog returns 200 with an empty list, not a 404.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_products(&self) -> GetProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/catalog/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        if !is_product_id_token(&id.0) {
            return GetProductByIdResponse::BadRequest(invalid_id_response());
        }

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Find products by name
    ///
    /// Matches products whose name (or any name alias) equals the given
    /// value; returns an empty list when nothing matches.
    #[oai(path = "/catalog/name/:name", method = "get", tag = "ApiTags::Catalog")]
    async fn get_products_by_name(&self, name: Path<String>) -> GetProductListResponse {
        match self
            .get_by_name_use_case
            .execute(GetProductsByNameParams { name: name.0 })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductListResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductListResponse::InternalError(json)
            }
        }
    }

    /// Find products by category
    ///
    /// Exact, case-sensitive match on the category field.
    #[oai(
        path = "/catalog/category/:category_name",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn get_products_by_category(
        &self,
        category_name: Path<String>,
    ) -> GetProductListResponse {
        match self
            .get_by_category_use_case
            .execute(GetProductsByCategoryParams {
                category: category_name.0,
            })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetProductListResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductListResponse::InternalError(json)
            }
        }
    }

    /// Create a new product
    ///
    /// The store assigns the id when the request omits one; a colliding id
    /// is rejected with 409.
    #[oai(path = "/catalog", method = "post", tag = "ApiTags::Catalog")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        if let Some(id) = &body.0.id
            && !is_product_id_token(id)
        {
            return CreateProductResponse::BadRequest(invalid_id_response());
        }

        let params = CreateProductParams {
            id: body.0.id,
            name: body.0.name,
            category: body.0.category,
            summary: body.0.summary,
            description: body.0.description,
            image_file: body.0.image_file,
            price: body.0.price,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    409 => CreateProductResponse::Conflict(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a product
    ///
    /// Full-document replace keyed by id. Returns a boolean: `true` when a
    /// document was modified, `false` when nothing matched — never a 404.
    #[oai(path = "/catalog", method = "put", tag = "ApiTags::Catalog")]
    async fn update_product(&self, body: Json<UpdateProductRequest>) -> UpdateProductResponse {
        if !is_product_id_token(&body.0.id) {
            return UpdateProductResponse::BadRequest(invalid_id_response());
        }

        let params = UpdateProductParams {
            id: body.0.id,
            name: body.0.name,
            category: body.0.category,
            summary: body.0.summary,
            description: body.0.description,
            image_file: body.0.image_file,
            price: body.0.price,
        };

        match self.update_use_case.execute(params).await {
            Ok(modified) => UpdateProductResponse::Ok(Json(modified)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Returns a boolean: `true` when a document was removed, `false` for
    /// an unknown id — never a 404.
    #[oai(path = "/catalog/:id", method = "delete", tag = "ApiTags::Catalog")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        if !is_product_id_token(&id.0) {
            return DeleteProductResponse::BadRequest(invalid_id_response());
        }

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(removed) => DeleteProductResponse::Ok(Json(removed)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<bool>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<bool>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::is_product_id_token;

    #[test]
    fn should_accept_24_char_hex_token() {
        assert!(is_product_id_token("602d2149e773f2a3990b47f5"));
    }

    #[test]
    fn should_reject_wrong_length() {
        assert!(!is_product_id_token("602d2149"));
        assert!(!is_product_id_token("602d2149e773f2a3990b47f5ff"));
    }

    #[test]
    fn should_reject_non_hex_characters() {
        assert!(!is_product_id_token("602d2149e773f2a3990b47zz"));
    }
}
