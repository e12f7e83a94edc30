//! Diesel table definitions for the car document store.
//!
//! The table is created at startup by
//! [`super::DieselCarRepository::ensure_schema`]; keep both definitions in
//! step.

diesel::table! {
    /// Car documents.
    ///
    /// One row per car. The `document` column holds the five record fields
    /// as a JSON object; the identifier lives only in `id`.
    cars (id) {
        /// Primary key: UUID v4 identifier assigned by the domain.
        id -> Uuid,
        /// Record fields: make, model, year, color, price.
        document -> Jsonb,
        /// Insertion timestamp, used to keep listings in storage order.
        created_at -> Timestamptz,
    }
}
