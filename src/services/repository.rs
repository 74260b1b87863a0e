use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};

use crate::error::AppError;
use crate::models::{Product, ProductDraft};

#[derive(Clone)]
pub struct ProductRepository {
    products: Collection<Product>,
}

impl ProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            products: db.collection("products"),
        }
    }

    /// Insert a new product and return it with the store-assigned id.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, AppError> {
        let mut product = draft.into_product();
        let result = self.products.insert_one(&product, None).await?;
        product.id = result.inserted_id.as_object_id();
        Ok(product)
    }

    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        let cursor = self.products.find(doc! {}, None).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    pub async fn get(&self, id: ObjectId) -> Result<Option<Product>, AppError> {
        let product = self.products.find_one(doc! { "_id": id }, None).await?;
        Ok(product)
    }

    /// Replace all caller-supplied fields of a product.
    ///
    /// Returns false when no document matched the id. Concurrent replaces on
    /// the same id race at the store, last write wins.
    pub async fn replace(&self, id: ObjectId, draft: ProductDraft) -> Result<bool, AppError> {
        let update = doc! {
            "$set": {
                "name": draft.name,
                "price": draft.price,
                "description": draft.description,
            }
        };
        let result = self
            .products
            .update_one(doc! { "_id": id }, update, None)
            .await?;
        Ok(result.matched_count > 0)
    }

    pub async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self.products.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }
}
