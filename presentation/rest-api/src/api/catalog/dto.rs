use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// 24-character hex identifier; omitted to let the store assign one
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    /// Product name (cannot be empty)
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// 24-character hex identifier of the document to replace
    pub id: String,
    /// Product name (cannot be empty)
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            summary: product.summary,
            description: product.description,
            image_file: product.image_file,
            price: product.price,
        }
    }
}
