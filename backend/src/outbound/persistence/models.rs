//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::cars;

/// Row struct for reading from the cars table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CarRow {
    pub id: Uuid,
    pub document: serde_json::Value,
}

/// Insertable struct for creating new car documents.
///
/// `created_at` is filled by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cars)]
pub(crate) struct NewCarRow<'a> {
    pub id: Uuid,
    pub document: &'a serde_json::Value,
}
