//! Product domain entity
//!
//! The only record the catalog manages. Ids are assigned by the store on
//! insert and never change afterwards.

use serde::Serialize;

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Writable fields of a product, used for both create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A single rule broken by a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ProductDraft {
    /// Check every field and collect all violations.
    ///
    /// An empty vec means the draft may be handed to the service layer.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "name",
                message: "Product name is required",
            });
        }

        if self.description.trim().is_empty() {
            violations.push(FieldViolation {
                field: "description",
                message: "Product description is required",
            });
        }

        if self.price.is_nan() || self.price <= 0.0 {
            violations.push(FieldViolation {
                field: "price",
                message: "Price must be greater than 0",
            });
        }

        violations
    }
}
