use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::basket::model::ShoppingCart;
use business::domain::basket::use_cases::delete::{DeleteBasketParams, DeleteBasketUseCase};
use business::domain::basket::use_cases::get::{GetBasketParams, GetBasketUseCase};
use business::domain::basket::use_cases::update::{UpdateBasketParams, UpdateBasketUseCase};

use crate::api::basket::dto::{ShoppingCartResponse, UpdateBasketRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct BasketApi {
    get_use_case: Arc<dyn GetBasketUseCase>,
    update_use_case: Arc<dyn UpdateBasketUseCase>,
    delete_use_case: Arc<dyn DeleteBasketUseCase>,
}

impl BasketApi {
    pub fn new(
        get_use_case: Arc<dyn GetBasketUseCase>,
        update_use_case: Arc<dyn UpdateBasketUseCase>,
        delete_use_case: Arc<dyn DeleteBasketUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Shopping basket API
///
/// Endpoints for reading, replacing, and deleting a user's shopping cart.
#[OpenApi]
impl BasketApi {
    /// Get a user's basket
    ///
    /// Always succeeds: a user with no stored basket gets an empty cart,
    /// never a 404.
    #[oai(path = "/basket/:user_name", method = "get", tag = "ApiTags::Basket")]
    async fn get_basket(&self, user_name: Path<String>) -> GetBasketResponse {
        match self
            .get_use_case
            .execute(GetBasketParams {
                user_name: user_name.0.clone(),
            })
            .await
        {
            Ok(Some(cart)) => GetBasketResponse::Ok(Json(cart.into())),
            Ok(None) => GetBasketResponse::Ok(Json(ShoppingCart::empty(user_name.0).into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetBasketResponse::InternalError(json)
            }
        }
    }

    /// Replace a user's basket
    ///
    /// Stores the cart wholesale under its user name, overwriting any prior
    /// value, and returns the cart as the store now holds it.
    #[oai(path = "/basket", method = "post", tag = "ApiTags::Basket")]
    async fn update_basket(&self, body: Json<UpdateBasketRequest>) -> UpdateBasketResponse {
        let params = UpdateBasketParams {
            user_name: body.0.user_name,
            items: body.0.items.into_iter().map(|item| item.into()).collect(),
        };

        match self.update_use_case.execute(params).await {
            Ok(cart) => UpdateBasketResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBasketResponse::BadRequest(json),
                    _ => UpdateBasketResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a user's basket
    ///
    /// Idempotent: deleting a basket that does not exist still returns 200.
    #[oai(
        path = "/basket/:user_name",
        method = "delete",
        tag = "ApiTags::Basket"
    )]
    async fn delete_basket(&self, user_name: Path<String>) -> DeleteBasketResponse {
        match self
            .delete_use_case
            .execute(DeleteBasketParams {
                user_name: user_name.0,
            })
            .await
        {
            Ok(()) => DeleteBasketResponse::Ok,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteBasketResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBasketResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateBasketResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteBasketResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
