use crate::model::field::{event::CreateField, Field};
use crate::model::id::FieldId;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait FieldRepository: Send + Sync {
    async fn create(&self, event: CreateField) -> AppResult<FieldId>;
    async fn find_all(&self) -> AppResult<Vec<Field>>;
    async fn find_by_id(&self, field_id: FieldId) -> AppResult<Option<Field>>;
}
