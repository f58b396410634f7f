//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};

use crate::domain::entities::{Product, ProductDraft, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn save(
        &self,
        id: Option<ProductId>,
        fields: &ProductDraft,
    ) -> Result<Product, DomainError> {
        let model = products::ActiveModel {
            id: id.map_or(NotSet, |id| Set(id.0)),
            name: Set(fields.name.clone()),
            description: Set(fields.description.clone()),
            price: Set(fields.price),
        };

        let result = match id {
            None => model.insert(&self.db).await,
            Some(_) => model.update(&self.db).await,
        };

        let saved = result.map_err(|e| match (e, id) {
            // The row vanished between the caller's lookup and this write
            (DbErr::RecordNotUpdated, Some(id)) => {
                DomainError::NotFound(format!("Product not found with id: {}", id))
            }
            (e, _) => DomainError::Database(e.to_string()),
        })?;

        Ok(saved.into())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<(), DomainError> {
        products::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}
