//! PostgreSQL-backed `CarRepository` implementation using Diesel ORM.
//!
//! Cars are stored as JSON documents keyed by their identifier. Documents
//! read back are re-validated through [`CarDetails`], so a row edited out of
//! band surfaces as a decode error rather than an invalid record.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel_async::RunQueryDsl;
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::{CarRepository, CarRepositoryError};
use crate::domain::{Car, CarDetails, CarId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CarRow, NewCarRow};
use super::pool::DbPool;
use super::schema::cars;

const CREATE_CARS_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS cars (
    id uuid PRIMARY KEY,
    document jsonb NOT NULL,
    created_at timestamptz NOT NULL DEFAULT now()
)";

/// Diesel-backed implementation of the car repository port.
#[derive(Clone)]
pub struct DieselCarRepository {
    pool: DbPool,
}

impl DieselCarRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `cars` table when it does not exist yet.
    ///
    /// Runs once at startup; an error here means the store is unusable.
    ///
    /// # Errors
    /// Returns [`CarRepositoryError::Connection`] when no connection can be
    /// opened and [`CarRepositoryError::Query`] when the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        sql_query(CREATE_CARS_TABLE_SQL)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        info!("car table ready");
        Ok(())
    }
}

fn encode_document(details: &CarDetails) -> Result<serde_json::Value, CarRepositoryError> {
    serde_json::to_value(details)
        .map_err(|err| CarRepositoryError::query(format!("serialise car document: {err}")))
}

/// Convert a database row into a validated domain car.
fn row_to_car(row: CarRow) -> Result<Car, CarRepositoryError> {
    let CarRow { id, document } = row;
    let details: CarDetails = serde_json::from_value(document)
        .map_err(|err| CarRepositoryError::decode(id.to_string(), err.to_string()))?;
    Ok(Car::new(CarId::from_uuid(id), details))
}

#[async_trait]
impl CarRepository for DieselCarRepository {
    async fn insert(&self, car: &Car) -> Result<(), CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let document = encode_document(car.details())?;

        diesel::insert_into(cars::table)
            .values(&NewCarRow {
                id: *car.id().as_uuid(),
                document: &document,
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CarRow> = cars::table
            .order((cars::created_at.asc(), cars::id.asc()))
            .select(CarRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_car).collect()
    }

    async fn replace(
        &self,
        id: &CarId,
        details: &CarDetails,
    ) -> Result<Option<Car>, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let document = encode_document(details)?;

        let row = diesel::update(cars::table.filter(cars::id.eq(id.as_uuid())))
            .set(cars::document.eq(&document))
            .returning(CarRow::as_returning())
            .get_result::<CarRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_car).transpose()
    }

    async fn delete(&self, id: &CarId) -> Result<bool, CarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(cars::table.filter(cars::id.eq(id.as_uuid())))
            .returning(cars::id)
            .get_result::<Uuid>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(removed.is_some())
    }
}

#[cfg(test)]
mod tests {
    //! Row decoding coverage; statement behaviour needs a live database.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn row_decodes_into_car() {
        let id = Uuid::new_v4();
        let row = CarRow {
            id,
            document: json!({
                "make": "Toyota",
                "model": "Corolla",
                "year": 2020,
                "color": "Blue",
                "price": 20000.0
            }),
        };

        let car = row_to_car(row).expect("valid document");
        assert_eq!(car.id().as_uuid(), &id);
        assert_eq!(car.details().model(), "Corolla");
    }

    #[rstest]
    #[case(json!({"make": "Toyota", "model": "Corolla", "year": 2020, "color": "Blue"}))]
    #[case(json!({"make": "Toyota", "model": "Corolla", "year": 1800, "color": "Blue", "price": 1.0}))]
    #[case(json!(["not", "an", "object"]))]
    fn invalid_documents_are_decode_errors(#[case] document: serde_json::Value) {
        let id = Uuid::new_v4();
        let err = row_to_car(CarRow { id, document }).expect_err("invalid document");
        match err {
            CarRepositoryError::Decode { id: reported, .. } => {
                assert_eq!(reported, id.to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn encoded_document_omits_identifier() {
        let details =
            CarDetails::new("Honda", "Civic", 2018, "Red", 15_000.0).expect("valid car");
        let document = encode_document(&details).expect("serialise");
        assert_eq!(
            document,
            json!({
                "make": "Honda",
                "model": "Civic",
                "year": 2018,
                "color": "Red",
                "price": 15000.0
            })
        );
    }
}
