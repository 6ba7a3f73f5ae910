use serde::{Deserialize, Serialize};

use business::domain::basket::model::{CartItem, ShoppingCart};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemEntity {
    pub quantity: i32,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: f64,
}

/// Stored form of a shopping cart, one cache entry per user name.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCartEntity {
    pub user_name: String,
    pub items: Vec<CartItemEntity>,
}

impl ShoppingCartEntity {
    pub fn from_domain(cart: &ShoppingCart) -> Self {
        Self {
            user_name: cart.user_name.clone(),
            items: cart
                .items
                .iter()
                .map(|item| CartItemEntity {
                    quantity: item.quantity,
                    product_id: item.product_id.clone(),
                    product_name: item.product_name.clone(),
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> ShoppingCart {
        ShoppingCart {
            user_name: self.user_name,
            items: self
                .items
                .into_iter()
                .map(|item| CartItem {
                    quantity: item.quantity,
                    product_id: item.product_id,
                    product_name: item.product_name,
                    unit_price: item.unit_price,
                })
                .collect(),
        }
    }
}
