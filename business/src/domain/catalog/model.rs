use super::errors::ProductError;

/// A catalog entry. `id` is the 24-character hex token the document store
/// natively produces; it is blank until the store assigns one on create.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

pub struct NewProductProps {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    pub image_file: String,
    pub price: f64,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            id: props.id.unwrap_or_default(),
            name: props.name,
            category: props.category,
            summary: props.summary,
            description: props.description,
            image_file: props.image_file,
            price: props.price,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        name: String,
        category: String,
        summary: String,
        description: String,
        image_file: String,
        price: f64,
    ) -> Self {
        Self {
            id,
            name,
            category,
            summary,
            description,
            image_file,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str) -> NewProductProps {
        NewProductProps {
            id: None,
            name: name.to_string(),
            category: "Smart Phone".to_string(),
            summary: "This phone is the company's biggest change".to_string(),
            description: "Long description".to_string(),
            image_file: "product-1.png".to_string(),
            price: 950.0,
        }
    }

    #[test]
    fn should_create_product_when_name_valid() {
        let result = Product::new(props("IPhone X"));

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "IPhone X");
        assert!(product.id.is_empty());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Product::new(props("  "));

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_keep_supplied_id() {
        let mut p = props("IPhone X");
        p.id = Some("602d2149e773f2a3990b47f5".to_string());

        let product = Product::new(p).unwrap();

        assert_eq!(product.id, "602d2149e773f2a3990b47f5");
    }
}
