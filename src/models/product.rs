use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    pub stock: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub stock: Option<i32>,
}

/// A create request that passed the presence check, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub stock: i32,
}

impl CreateProductRequest {
    pub fn validate(self) -> Result<NewProduct> {
        match (self.name, self.price) {
            (Some(name), Some(price)) => Ok(NewProduct {
                name,
                price,
                description: self.description.unwrap_or_default(),
                stock: self.stock.unwrap_or(0),
            }),
            _ => Err(AppError::BadRequest(
                "Name and price are required".to_string(),
            )),
        }
    }
}

/// Full replacement of a product row. Absent fields are written as NULL.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub stock: Option<i32>,
}
