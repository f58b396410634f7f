//! Product service
//!
//! The five catalog use-cases. Drafts arrive here already validated by the
//! request boundary; this layer turns absence into "not found".

use std::sync::Arc;

use crate::domain::entities::{Product, ProductDraft, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::AppError;

/// Service for managing products
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    products: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// Store a new product and return it with its assigned id
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, AppError> {
        let product = self.products.save(None, draft).await?;
        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// List every product
    pub async fn get_all_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.find_all().await?)
    }

    /// Fetch one product, failing with NotFound if it does not exist
    pub async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, AppError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(not_found_message(id)))
    }

    /// Replace name, description and price of an existing product
    ///
    /// The id is taken from the stored record, never from the draft.
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, AppError> {
        let existing = self.get_product_by_id(id).await?;
        let updated = self.products.save(Some(existing.id), draft).await?;
        tracing::info!(product_id = %updated.id, "Product updated");
        Ok(updated)
    }

    /// Delete an existing product
    ///
    /// Deleting an id that is already gone is NotFound, not a silent success.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), AppError> {
        let existing = self.get_product_by_id(id).await?;
        self.products.delete_by_id(&existing.id).await?;
        tracing::info!(product_id = %existing.id, "Product deleted");
        Ok(())
    }
}

fn not_found_message(id: &ProductId) -> String {
    format!("Product not found with id: {}", id)
}
