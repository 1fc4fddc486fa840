use sea_orm::{
    sea_query::{Condition, Expr, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    model::car::CarStatus,
    server::model::car::{CarFilter, CarSortField, CreateCarParams, UpdateCarParams},
};

/// A car row joined with its location row.
pub type CarWithLocation = (entity::car::Model, Option<entity::location::Model>);

pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new car.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created car
    /// - `Err(DbErr)` - Database error, including a duplicate `car_id`
    pub async fn create(&self, params: &CreateCarParams) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            make: ActiveValue::Set(params.make.clone()),
            model: ActiveValue::Set(params.model.clone()),
            year: ActiveValue::Set(params.year),
            location_id: ActiveValue::Set(params.location_id),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            car_id: ActiveValue::Set(params.car_id.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a car by ID together with its location.
    ///
    /// # Returns
    /// - `Ok(Some((car, location)))` - Car found
    /// - `Ok(None)` - Car not found
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CarWithLocation>, DbErr> {
        entity::prelude::Car::find_by_id(id)
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await
    }

    /// Gets cars matching the filter.
    ///
    /// Cars are sorted by the filter's ordering, or by make and model when it is
    /// empty, with the ID as final tie-break.
    ///
    /// # Arguments
    /// - `filter` - Optional search text, status and ordering plus page selection
    ///
    /// # Returns
    /// - `Ok((cars, total))` - Cars for the requested page and total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_filtered(
        &self,
        filter: &CarFilter,
    ) -> Result<(Vec<CarWithLocation>, u64), DbErr> {
        let mut query = entity::prelude::Car::find();

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::car::Column::Make.contains(search))
                    .add(entity::car::Column::Model.contains(search))
                    .add(entity::car::Column::Year.contains(search))
                    .add(entity::car::Column::CarId.contains(search))
                    .add(entity::car::Column::Status.contains(search)),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::car::Column::Status.eq(status.as_str()));
        }

        if filter.ordering.is_empty() {
            query = query
                .order_by_asc(entity::car::Column::Make)
                .order_by_asc(entity::car::Column::Model);
        }
        for key in &filter.ordering {
            let order = if key.descending { Order::Desc } else { Order::Asc };
            query = query.order_by(sort_column(key.field), order);
        }

        let paginator = query
            .order_by_asc(entity::car::Column::Id)
            .find_also_related(entity::prelude::Location)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let cars = paginator.fetch_page(filter.page).await?;

        Ok((cars, total))
    }

    /// Gets every car whose status is `available`.
    pub async fn get_available(&self) -> Result<Vec<CarWithLocation>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Status.eq(CarStatus::Available.as_str()))
            .order_by_asc(entity::car::Column::Make)
            .order_by_asc(entity::car::Column::Model)
            .order_by_asc(entity::car::Column::Id)
            .find_also_related(entity::prelude::Location)
            .all(self.db)
            .await
    }

    /// Gets cars with their locations keyed by car ID.
    ///
    /// # Arguments
    /// - `ids` - Car IDs to load; unknown IDs are skipped
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, CarWithLocation>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(ids.iter().copied()))
            .find_also_related(entity::prelude::Location)
            .all(self.db)
            .await?;

        Ok(cars.into_iter().map(|c| (c.0.id, c)).collect())
    }

    /// Updates the provided fields of a car.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated car
    /// - `Ok(None)` - Car does not exist
    /// - `Err(DbErr)` - Database error, including a duplicate `car_id`
    pub async fn update(
        &self,
        params: &UpdateCarParams,
    ) -> Result<Option<entity::car::Model>, DbErr> {
        let Some(car) = entity::prelude::Car::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::car::ActiveModel = car.into();

        if let Some(make) = &params.make {
            active.make = ActiveValue::Set(make.clone());
        }
        if let Some(model) = &params.model {
            active.model = ActiveValue::Set(model.clone());
        }
        if let Some(year) = params.year {
            active.year = ActiveValue::Set(year);
        }
        if let Some(location_id) = params.location_id {
            active.location_id = ActiveValue::Set(location_id);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(car_id) = &params.car_id {
            active.car_id = ActiveValue::Set(car_id.clone());
        }

        active.update(self.db).await.map(Some)
    }

    /// Deletes a car together with its rentals.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Claims the car row for the remainder of the current transaction.
    ///
    /// Issues a no-op `UPDATE` on the row so the database holds a write lock on it
    /// until commit. Concurrent writers for the same car block or fail here, which
    /// serializes availability checks per car.
    ///
    /// # Returns
    /// - `Ok(true)` - Row exists and is now locked
    /// - `Ok(false)` - Car does not exist
    /// - `Err(DbErr)` - Database error, e.g. lock timeout
    pub async fn claim(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::update_many()
            .col_expr(entity::car::Column::Id, Expr::col(entity::car::Column::Id))
            .filter(entity::car::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Car::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: CarStatus) -> Result<u64, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}

fn sort_column(field: CarSortField) -> entity::car::Column {
    match field {
        CarSortField::Make => entity::car::Column::Make,
        CarSortField::Model => entity::car::Column::Model,
        CarSortField::Year => entity::car::Column::Year,
        CarSortField::Status => entity::car::Column::Status,
    }
}
