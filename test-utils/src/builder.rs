use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Location, Car};
///
/// let test = TestBuilder::new()
///     .with_table(Location)
///     .with_table(Car)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether `build()` places the database in a temp file instead of memory.
    on_disk: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            on_disk: false,
        }
    }

    /// Backs the test database with a temporary file and a multi-connection pool.
    ///
    /// Needed by tests that run transactions concurrently. The file is removed when
    /// the `TestContext` is dropped.
    pub fn on_disk(mut self) -> Self {
        self.on_disk = true;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user, location and car tables.
    ///
    /// Use this when testing fleet functionality that doesn't involve rentals.
    pub fn with_car_tables(self) -> Self {
        self.with_table(User).with_table(Location).with_table(Car)
    }

    /// Adds every table of the schema in dependency order:
    /// - User
    /// - Location
    /// - Car
    /// - Rental
    /// - LoginHistory
    ///
    /// Rental availability and dashboard aggregation read across all of these.
    pub fn with_rental_tables(self) -> Self {
        self.with_car_tables()
            .with_table(Rental)
            .with_table(LoginHistory)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = if self.on_disk {
            TestContext::on_disk()
        } else {
            TestContext::new()
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
