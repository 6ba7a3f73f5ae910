use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductRepository;
use business::domain::errors::RepositoryError;

use super::entity::ProductDocument;

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct ProductRepositoryMongo {
    products: Collection<ProductDocument>,
}

impl ProductRepositoryMongo {
    pub fn new(products: Collection<ProductDocument>) -> Self {
        Self { products }
    }
}

fn map_store_error(error: mongodb::error::Error) -> RepositoryError {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            RepositoryError::Duplicated
        }
        ErrorKind::BsonDeserialization(_) => RepositoryError::Decode,
        _ => RepositoryError::Unavailable,
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let cursor = self
            .products
            .find(doc! {})
            .await
            .map_err(map_store_error)?;

        let documents: Vec<ProductDocument> =
            cursor.try_collect().await.map_err(map_store_error)?;

        Ok(documents
            .into_iter()
            .map(ProductDocument::into_domain)
            .collect())
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        // A token that is not an ObjectId cannot match any document.
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self
            .products
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(map_store_error)?;

        Ok(document.map(ProductDocument::into_domain))
    }

    async fn get_products_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        // Equality on a possibly multi-valued field: matches a scalar name
        // or any element of an alias array.
        let cursor = self
            .products
            .find(doc! { "name": name })
            .await
            .map_err(map_store_error)?;

        let documents: Vec<ProductDocument> =
            cursor.try_collect().await.map_err(map_store_error)?;

        Ok(documents
            .into_iter()
            .map(ProductDocument::into_domain)
            .collect())
    }

    async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        let cursor = self
            .products
            .find(doc! { "category": category })
            .await
            .map_err(map_store_error)?;

        let documents: Vec<ProductDocument> =
            cursor.try_collect().await.map_err(map_store_error)?;

        Ok(documents
            .into_iter()
            .map(ProductDocument::into_domain)
            .collect())
    }

    async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        let document = ProductDocument::from_domain(product).ok_or(RepositoryError::Decode)?;

        self.products
            .insert_one(&document)
            .await
            .map_err(map_store_error)?;

        Ok(document.into_domain())
    }

    async fn update_product(&self, product: &Product) -> Result<bool, RepositoryError> {
        // An id no document could carry means nothing to replace.
        let Some(document) = ProductDocument::from_domain(product) else {
            return Ok(false);
        };

        let result = self
            .products
            .replace_one(doc! { "_id": document.id }, &document)
            .await
            .map_err(map_store_error)?;

        Ok(result.modified_count > 0)
    }

    async fn delete_product(&self, id: &str) -> Result<bool, RepositoryError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self
            .products
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(map_store_error)?;

        Ok(result.deleted_count > 0)
    }
}
