use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::models::{Product, ProductDraft};

/// Request body shared by create and replace.
///
/// All fields are optional at the wire level so a missing field surfaces as
/// our own 400 payload instead of a deserialization rejection; presence is
/// enforced by [`ProductBody::into_draft`]. A price of 0 is valid.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductBody {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,
}

impl ProductBody {
    /// Run field validation and require all three fields to be present.
    pub fn into_draft(self) -> Result<ProductDraft, AppError> {
        self.validate()?;

        match (self.name, self.price, self.description) {
            (Some(name), Some(price), Some(description)) => Ok(ProductDraft {
                name,
                price,
                description,
            }),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(
                "name, price and description are required"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfirmationResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: Option<&str>, price: Option<f64>, description: Option<&str>) -> ProductBody {
        ProductBody {
            name: name.map(String::from),
            price,
            description: description.map(String::from),
        }
    }

    #[test]
    fn complete_body_becomes_a_draft() {
        let draft = body(Some("Pen"), Some(2.0), Some("Blue ink"))
            .into_draft()
            .expect("valid body");
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.price, 2.0);
        assert_eq!(draft.description, "Blue ink");
    }

    #[test]
    fn zero_price_is_accepted() {
        assert!(body(Some("Pen"), Some(0.0), Some("Blue ink"))
            .into_draft()
            .is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(body(Some("Pen"), Some(-1.0), Some("Blue ink"))
            .into_draft()
            .is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(body(Some(""), Some(2.0), Some("Blue ink"))
            .into_draft()
            .is_err());
    }

    #[test]
    fn missing_field_is_rejected() {
        assert!(body(Some("Pen"), None, Some("Blue ink")).into_draft().is_err());
        assert!(body(None, Some(2.0), Some("Blue ink")).into_draft().is_err());
        assert!(body(Some("Pen"), Some(2.0), None).into_draft().is_err());
    }
}
