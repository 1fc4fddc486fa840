use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Condition, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::{
    model::rental::RentalStatus,
    server::model::rental::{
        CreateRentalParams, RentalFilter, RentalScope, RentalSortField, UpdateRentalParams,
    },
};

pub struct RentalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RentalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new rental.
    ///
    /// Callers are expected to have checked availability within the same transaction.
    pub async fn create(
        &self,
        params: &CreateRentalParams,
    ) -> Result<entity::rental::Model, DbErr> {
        entity::rental::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            car_id: ActiveValue::Set(params.car_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::rental::Model>, DbErr> {
        entity::prelude::Rental::find_by_id(id).one(self.db).await
    }

    /// Gets rentals visible in the given scope.
    ///
    /// Results follow the filter's ordering, or newest start date first when it is
    /// empty, with the higher ID first as final tie-break.
    ///
    /// # Arguments
    /// - `scope` - Restricts results to one user's rentals unless `All`
    /// - `filter` - Optional status, search text and ordering
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching rentals
    /// - `Err(DbErr)` - Database error
    pub async fn get_all(
        &self,
        scope: RentalScope,
        filter: &RentalFilter,
    ) -> Result<Vec<entity::rental::Model>, DbErr> {
        let mut query = scoped(scope);

        if let Some(status) = filter.status {
            query = query.filter(entity::rental::Column::Status.eq(status.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query
                .join(JoinType::InnerJoin, entity::rental::Relation::User.def())
                .join(JoinType::InnerJoin, entity::rental::Relation::Car.def())
                .filter(
                    Condition::any()
                        .add(entity::user::Column::Username.contains(search))
                        .add(entity::car::Column::CarId.contains(search))
                        .add(entity::rental::Column::Status.contains(search)),
                );
        }

        if filter.ordering.is_empty() {
            query = query.order_by_desc(entity::rental::Column::StartDate);
        }
        for key in &filter.ordering {
            let order = if key.descending { Order::Desc } else { Order::Asc };
            query = query.order_by(sort_column(key.field), order);
        }

        query
            .order_by_desc(entity::rental::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds an active rental of `car_id` whose interval overlaps `[start, end)`.
    ///
    /// Two intervals overlap when `existing.start < end` and `existing.end > start`,
    /// so rentals that merely touch at an endpoint do not conflict.
    ///
    /// # Arguments
    /// - `car_id` - Car to check
    /// - `start` - Requested start, inclusive
    /// - `end` - Requested end, exclusive
    /// - `exclude_rental_id` - Rental to ignore, used when updating a rental in place
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The earliest conflicting rental
    /// - `Ok(None)` - No conflict
    /// - `Err(DbErr)` - Database error
    pub async fn find_conflict(
        &self,
        car_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_rental_id: Option<i32>,
    ) -> Result<Option<entity::rental::Model>, DbErr> {
        let mut query = entity::prelude::Rental::find()
            .filter(entity::rental::Column::CarId.eq(car_id))
            .filter(entity::rental::Column::Status.eq(RentalStatus::Active.as_str()))
            .filter(entity::rental::Column::StartDate.lt(end))
            .filter(entity::rental::Column::EndDate.gt(start));

        if let Some(id) = exclude_rental_id {
            query = query.filter(entity::rental::Column::Id.ne(id));
        }

        query
            .order_by_asc(entity::rental::Column::StartDate)
            .one(self.db)
            .await
    }

    /// Writes the merged values of a rental update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated rental
    /// - `Ok(None)` - Rental does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: &UpdateRentalParams,
    ) -> Result<Option<entity::rental::Model>, DbErr> {
        let Some(rental) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::rental::ActiveModel = rental.into();

        if let Some(user_id) = params.user_id {
            active.user_id = ActiveValue::Set(user_id);
        }
        if let Some(car_id) = params.car_id {
            active.car_id = ActiveValue::Set(car_id);
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }

        active.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rental::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Rental::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: RentalStatus) -> Result<u64, DbErr> {
        entity::prelude::Rental::find()
            .filter(entity::rental::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}

fn scoped(scope: RentalScope) -> Select<entity::rental::Entity> {
    let query = entity::prelude::Rental::find();

    match scope {
        RentalScope::All => query,
        RentalScope::User(user_id) => query.filter(entity::rental::Column::UserId.eq(user_id)),
    }
}

fn sort_column(field: RentalSortField) -> entity::rental::Column {
    match field {
        RentalSortField::StartDate => entity::rental::Column::StartDate,
        RentalSortField::EndDate => entity::rental::Column::EndDate,
        RentalSortField::Status => entity::rental::Column::Status,
    }
}
