use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::location::{CreateLocationParams, UpdateLocationParams};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &CreateLocationParams,
    ) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            address: ActiveValue::Set(params.address.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(id).one(self.db).await
    }

    /// Gets all locations ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the provided fields of a location.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated location
    /// - `Ok(None)` - Location does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: &UpdateLocationParams,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        let Some(location) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::location::ActiveModel = location.into();

        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(address) = &params.address {
            active.address = ActiveValue::Set(address.clone());
        }

        active.update(self.db).await.map(Some)
    }

    /// Deletes a location together with its cars.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Location::find().count(self.db).await
    }
}
