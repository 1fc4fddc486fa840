//! Read-only queries backing the dashboard summary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::data::login_history::LoginWithUser;

/// A rental row joined with its user and car rows.
pub type RentalWithParties = (
    entity::rental::Model,
    Option<entity::user::Model>,
    Option<entity::car::Model>,
);

pub struct DashboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DashboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the most recent logins, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of entries
    /// - `as_of` - Ignore logins after this instant
    pub async fn recent_logins(
        &self,
        limit: u64,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<LoginWithUser>, DbErr> {
        let mut query = entity::prelude::LoginHistory::find();

        if let Some(as_of) = as_of {
            query = query.filter(entity::login_history::Column::Timestamp.lte(as_of));
        }

        query
            .order_by_desc(entity::login_history::Column::Timestamp)
            .order_by_desc(entity::login_history::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Gets the rentals with the latest start dates, newest first, with their
    /// users and cars.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of entries
    /// - `as_of` - Ignore rentals starting after this instant
    pub async fn recent_rentals(
        &self,
        limit: u64,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Vec<RentalWithParties>, DbErr> {
        let mut query = entity::prelude::Rental::find();

        if let Some(as_of) = as_of {
            query = query.filter(entity::rental::Column::StartDate.lte(as_of));
        }

        let rentals = query
            .order_by_desc(entity::rental::Column::StartDate)
            .order_by_desc(entity::rental::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = rentals.iter().map(|r| r.user_id).collect();
        let car_ids: Vec<i32> = rentals.iter().map(|r| r.car_id).collect();

        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let cars: HashMap<i32, entity::car::Model> = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(car_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(rentals
            .into_iter()
            .map(|rental| {
                let user = users.get(&rental.user_id).cloned();
                let car = cars.get(&rental.car_id).cloned();
                (rental, user, car)
            })
            .collect())
    }

    /// Counts rentals of any status per car.
    ///
    /// Cars without rentals do not appear in the result.
    ///
    /// # Returns
    /// - `Ok(Vec<(car, count)>)` - Every car with at least one rental and its count, unordered
    /// - `Err(DbErr)` - Database error
    pub async fn rental_counts(&self) -> Result<Vec<(entity::car::Model, u64)>, DbErr> {
        let counts: Vec<(i32, i64)> = entity::prelude::Rental::find()
            .select_only()
            .column(entity::rental::Column::CarId)
            .column_as(entity::rental::Column::Id.count(), "rental_count")
            .group_by(entity::rental::Column::CarId)
            .into_tuple()
            .all(self.db)
            .await?;

        let car_ids: Vec<i32> = counts.iter().map(|(id, _)| *id).collect();
        let mut cars: HashMap<i32, entity::car::Model> = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(car_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(counts
            .into_iter()
            .filter_map(|(car_id, count)| cars.remove(&car_id).map(|car| (car, count as u64)))
            .collect())
    }
}
