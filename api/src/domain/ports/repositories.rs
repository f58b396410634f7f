//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductDraft, ProductId};
use crate::error::DomainError;

/// Repository for Product entities
///
/// Absence is never an error here: lookups return `None` and deleting a
/// missing id succeeds. Callers that need "not found" semantics check first.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert when `id` is `None`, otherwise overwrite the row with that id.
    /// Performs no validation.
    async fn save(&self, id: Option<ProductId>, fields: &ProductDraft)
        -> Result<Product, DomainError>;

    /// All products, ordered by id
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Delete a product by ID
    async fn delete_by_id(&self, id: &ProductId) -> Result<(), DomainError>;
}
