use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, Order, PaginatorTrait, PrimaryKeyTrait, QueryOrder, Select,
};

use super::base_traits::{CreationOrdered, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

type BaseModel<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type BaseColumn<D> = <<D as DaoBase>::Entity as EntityTrait>::Column;

/// Id-keyed CRUD shared by every entity DAO.
///
/// Rows are stamped with `created_at` on insert; list helpers fall back to
/// newest-first ordering with the id as tie breaker.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TimestampedActiveModel
        + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
    Self::Entity: CreationOrdered,
{
    type Entity: EntityTrait + Send + Sync;
    const ENTITY_NAME: &'static str;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<BaseModel<Self>> {
        let mut active = data.into_active_model();
        active.set_created_at(Utc::now().fixed_offset());
        active
            .insert(self.db())
            .await
            .map_err(|err| DaoLayerError::from_db(Self::ENTITY_NAME, err))
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<BaseModel<Self>> {
        let model = Self::Entity::find_by_id(id).one(self.db()).await?;
        model.ok_or(DaoLayerError::not_found(Self::ENTITY_NAME, id))
    }

    async fn find_all(
        &self,
        order: Option<(BaseColumn<Self>, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<BaseModel<Self>>> {
        let filtered = apply(Self::Entity::find());
        let ordered = match order {
            Some((column, order)) => filtered
                .order_by(column, order)
                .order_by_asc(Self::Entity::id_column()),
            None => filtered
                .order_by_desc(Self::Entity::created_at_column())
                .order_by_desc(Self::Entity::id_column()),
        };
        Ok(ordered.all(self.db()).await?)
    }

    async fn count_where(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<u64> {
        Ok(apply(Self::Entity::find()).count(self.db()).await?)
    }

    async fn update<F>(&self, id: i32, apply: F) -> DaoResult<BaseModel<Self>>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);

        active
            .update(self.db())
            .await
            .map_err(|err| DaoLayerError::from_db(Self::ENTITY_NAME, err))
    }

    async fn delete(&self, id: i32) -> DaoResult<i32> {
        let result = Self::Entity::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::not_found(Self::ENTITY_NAME, id));
        }

        Ok(id)
    }
}
