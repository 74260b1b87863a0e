use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A catalog product as stored in the `products` collection.
///
/// The id is assigned by the store on insert, so it is absent on the
/// document we send and populated from the insert result.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// The caller-supplied fields of a product, after validation.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl ProductDraft {
    pub fn into_product(self) -> Product {
        Product {
            id: None,
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}
