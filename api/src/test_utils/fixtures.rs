//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Product, ProductDraft, ProductId};

/// Create a stored test product with default values
pub fn test_product() -> Product {
    Product {
        id: ProductId(1),
        name: "Pen".to_string(),
        description: "Blue ink pen".to_string(),
        price: 1.5,
    }
}

/// Create a valid draft with default values
pub fn test_draft() -> ProductDraft {
    ProductDraft {
        name: "Pen".to_string(),
        description: "Blue ink pen".to_string(),
        price: 1.5,
    }
}

/// Create a valid draft with a specific name
pub fn test_draft_named(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: format!("{} for testing", name),
        price: 9.99,
    }
}
