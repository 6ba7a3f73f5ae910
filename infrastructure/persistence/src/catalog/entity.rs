use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;

/// Stored form of a product. `_id` is the native ObjectId; the domain model
/// carries its 24-character hex rendering.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    #[serde(rename = "imageFile")]
    pub image_file: String,
    pub price: f64,
}

impl ProductDocument {
    /// Builds the stored form. A blank domain id gets a freshly generated
    /// ObjectId; a non-blank id that is not a valid ObjectId token yields
    /// `None` since no document could ever carry it.
    pub fn from_domain(product: &Product) -> Option<Self> {
        let id = if product.id.is_empty() {
            ObjectId::new()
        } else {
            ObjectId::parse_str(&product.id).ok()?
        };

        Some(Self {
            id,
            name: product.name.clone(),
            category: product.category.clone(),
            summary: product.summary.clone(),
            description: product.description.clone(),
            image_file: product.image_file.clone(),
            price: product.price,
        })
    }

    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id.to_hex(),
            self.name,
            self.category,
            self.summary,
            self.description,
            self.image_file,
            self.price,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::model::{NewProductProps, Product};

    fn product(id: Option<&str>) -> Product {
        Product::new(NewProductProps {
            id: id.map(str::to_string),
            name: "IPhone X".to_string(),
            category: "Smart Phone".to_string(),
            summary: "Summary".to_string(),
            description: "Description".to_string(),
            image_file: "product-1.png".to_string(),
            price: 950.0,
        })
        .unwrap()
    }

    #[test]
    fn should_map_domain_product_both_ways_without_loss() {
        let original = product(Some("602d2149e773f2a3990b47f5"));

        let round_tripped = ProductDocument::from_domain(&original)
            .unwrap()
            .into_domain();

        assert_eq!(round_tripped, original);
    }

    #[test]
    fn should_assign_fresh_id_when_domain_id_blank() {
        let document = ProductDocument::from_domain(&product(None)).unwrap();

        assert_eq!(document.id.to_hex().len(), 24);
    }

    #[test]
    fn should_reject_token_that_is_not_an_object_id() {
        let result = ProductDocument::from_domain(&product(Some("not-an-object-id")));

        assert!(result.is_none());
    }

    #[test]
    fn should_serialize_with_wire_field_names() {
        let document = ProductDocument::from_domain(&product(None)).unwrap();

        let json = serde_json::to_string(&document).unwrap();

        assert!(json.contains("\"_id\""));
        assert!(json.contains("\"imageFile\""));
    }
}
