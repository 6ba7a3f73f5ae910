use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::basket::model::{CartItem, ShoppingCart};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    /// Number of units of the product
    pub quantity: i32,
    /// Opaque product identifier; not validated against the catalog
    pub product_id: String,
    pub product_name: String,
    pub unit_price: f64,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        Self {
            quantity: item.quantity,
            product_id: item.product_id,
            product_name: item.product_name,
            unit_price: item.unit_price,
        }
    }
}

impl From<CartItemDto> for CartItem {
    fn from(dto: CartItemDto) -> Self {
        Self {
            quantity: dto.quantity,
            product_id: dto.product_id,
            product_name: dto.product_name,
            unit_price: dto.unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UpdateBasketRequest {
    /// Cart owner; acts as the cache key (cannot be empty)
    pub user_name: String,
    /// Full replacement for the stored items; no merge is performed
    pub items: Vec<CartItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCartResponse {
    pub user_name: String,
    pub items: Vec<CartItemDto>,
    pub total_price: f64,
}

impl From<ShoppingCart> for ShoppingCartResponse {
    fn from(cart: ShoppingCart) -> Self {
        let total_price = cart.total_price();
        Self {
            user_name: cart.user_name,
            items: cart.items.into_iter().map(CartItemDto::from).collect(),
            total_price,
        }
    }
}
