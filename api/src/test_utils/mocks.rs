//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Product, ProductDraft, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    next_id: Arc<RwLock<i64>>,
    should_fail: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like an unreachable database
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        {
            let mut products = self.products.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(product.id.0);
            products.insert(product.id, product);
        }
        self
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(
        &self,
        id: Option<ProductId>,
        fields: &ProductDraft,
    ) -> Result<Product, DomainError> {
        self.check_available()?;
        let mut products = self.products.write().unwrap();

        let id = match id {
            Some(id) if products.contains_key(&id) => id,
            Some(id) => {
                return Err(DomainError::NotFound(format!(
                    "Product not found with id: {}",
                    id
                )))
            }
            None => {
                let mut next_id = self.next_id.write().unwrap();
                *next_id += 1;
                ProductId(*next_id)
            }
        };

        let product = Product {
            id,
            name: fields.name.clone(),
            description: fields.description.clone(),
            price: fields.price,
        };
        products.insert(id, product.clone());

        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        self.check_available()?;
        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.check_available()?;
        let products = self.products.read().unwrap();
        Ok(products.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<(), DomainError> {
        self.check_available()?;
        self.products.write().unwrap().remove(id);
        Ok(())
    }
}
