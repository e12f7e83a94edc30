//! Car inventory record.
//!
//! A [`Car`] pairs a system-assigned [`CarId`] with validated [`CarDetails`].
//! Validation lives in the [`CarDetails`] constructors, so a value of that
//! type always satisfies the record constraints:
//!
//! - `make`, `model` and `color` are non-empty once trimmed, and stored
//!   trimmed;
//! - `year` is at least [`MIN_MODEL_YEAR`];
//! - `price` is finite and not negative (zero is a valid price).
//!
//! [`CarDraft`] is the unvalidated candidate supplied by callers, where every
//! field may be missing.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Earliest accepted model year, the year of the first automobile.
pub const MIN_MODEL_YEAR: i32 = 1886;

/// Message reported when one or more fields are absent.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";

/// Field names in the order they are reported.
const FIELD_MAKE: &str = "make";
const FIELD_MODEL: &str = "model";
const FIELD_YEAR: &str = "year";
const FIELD_COLOR: &str = "color";
const FIELD_PRICE: &str = "price";

/// Validation failures raised when building car values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarValidationError {
    /// One or more required fields were absent or blank.
    #[error("All fields are required.")]
    MissingFields {
        /// Names of the offending fields, in declaration order.
        fields: Vec<&'static str>,
    },
    /// The model year predates the first automobile.
    #[error("year must be at least {min}")]
    YearTooEarly {
        /// Earliest accepted year.
        min: i32,
        /// Year supplied by the caller.
        actual: i32,
    },
    /// The price was below zero.
    #[error("price must not be negative")]
    NegativePrice,
    /// The price was NaN or infinite.
    #[error("price must be a finite number")]
    NonFinitePrice,
    /// The identifier was not a UUID.
    #[error("car id must be a valid UUID")]
    InvalidId,
}

impl CarValidationError {
    /// Name of the field the failure refers to, when there is exactly one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingFields { .. } => None,
            Self::YearTooEarly { .. } => Some(FIELD_YEAR),
            Self::NegativePrice | Self::NonFinitePrice => Some(FIELD_PRICE),
            Self::InvalidId => Some("id"),
        }
    }
}

/// System-assigned identifier of a car record.
///
/// # Examples
/// ```
/// use car_inventory::domain::CarId;
///
/// let id = CarId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(CarId::new("64b7f0c2e4b0a1a2b3c4d5e6").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(Uuid);

impl CarId {
    /// Parse an identifier supplied by a client.
    ///
    /// # Errors
    /// Returns [`CarValidationError::InvalidId`] when `id` is not a UUID.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CarValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(CarValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| CarValidationError::InvalidId)
    }

    /// Generate a fresh identifier for a new record.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated car fields as supplied by a caller.
///
/// `None` means the field was absent from the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarDraft {
    /// Manufacturer name.
    pub make: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Model year.
    pub year: Option<i32>,
    /// Exterior colour.
    pub color: Option<String>,
    /// Asking price.
    pub price: Option<f64>,
}

/// Validated, complete set of car fields.
///
/// Serialised as the stored document body; deserialisation re-runs
/// validation so a corrupt document cannot become a `CarDetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CarDetailsDto", into = "CarDetailsDto")]
pub struct CarDetails {
    make: String,
    model: String,
    year: i32,
    color: String,
    price: f64,
}

fn present_text(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

impl CarDetails {
    /// Validate a complete set of fields.
    ///
    /// # Errors
    /// See [`CarDetails::from_draft`].
    ///
    /// # Examples
    /// ```
    /// use car_inventory::domain::CarDetails;
    ///
    /// let details = CarDetails::new(" Toyota ", "Corolla", 2020, "Blue", 20_000.0)
    ///     .expect("valid car");
    /// assert_eq!(details.make(), "Toyota");
    /// assert!(CarDetails::new("Benz", "Motorwagen", 1885, "Black", 0.0).is_err());
    /// ```
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        color: impl Into<String>,
        price: f64,
    ) -> Result<Self, CarValidationError> {
        Self::from_draft(CarDraft {
            make: Some(make.into()),
            model: Some(model.into()),
            year: Some(year),
            color: Some(color.into()),
            price: Some(price),
        })
    }

    /// Validate a draft, reporting every missing field at once.
    ///
    /// Presence is checked before ranges, so a draft missing `price` and
    /// carrying an early `year` reports the missing field.
    ///
    /// # Errors
    /// - [`CarValidationError::MissingFields`] when any field is absent or a
    ///   text field is blank.
    /// - [`CarValidationError::YearTooEarly`] when `year < MIN_MODEL_YEAR`.
    /// - [`CarValidationError::NonFinitePrice`] or
    ///   [`CarValidationError::NegativePrice`] for invalid prices.
    pub fn from_draft(draft: CarDraft) -> Result<Self, CarValidationError> {
        let CarDraft {
            make,
            model,
            year,
            color,
            price,
        } = draft;

        let make = present_text(make);
        let model = present_text(model);
        let color = present_text(color);

        let mut missing = Vec::new();
        if make.is_none() {
            missing.push(FIELD_MAKE);
        }
        if model.is_none() {
            missing.push(FIELD_MODEL);
        }
        if year.is_none() {
            missing.push(FIELD_YEAR);
        }
        if color.is_none() {
            missing.push(FIELD_COLOR);
        }
        if price.is_none() {
            missing.push(FIELD_PRICE);
        }

        let (Some(make), Some(model), Some(year), Some(color), Some(price)) =
            (make, model, year, color, price)
        else {
            return Err(CarValidationError::MissingFields { fields: missing });
        };

        if year < MIN_MODEL_YEAR {
            return Err(CarValidationError::YearTooEarly {
                min: MIN_MODEL_YEAR,
                actual: year,
            });
        }
        if !price.is_finite() {
            return Err(CarValidationError::NonFinitePrice);
        }
        if price < 0.0 {
            return Err(CarValidationError::NegativePrice);
        }

        Ok(Self {
            make,
            model,
            year,
            color,
            price,
        })
    }

    /// Manufacturer name, trimmed.
    #[must_use]
    pub fn make(&self) -> &str {
        self.make.as_str()
    }

    /// Model name, trimmed.
    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    /// Model year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Exterior colour, trimmed.
    #[must_use]
    pub fn color(&self) -> &str {
        self.color.as_str()
    }

    /// Asking price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CarDetailsDto {
    make: String,
    model: String,
    year: i32,
    color: String,
    price: f64,
}

impl From<CarDetails> for CarDetailsDto {
    fn from(value: CarDetails) -> Self {
        let CarDetails {
            make,
            model,
            year,
            color,
            price,
        } = value;
        Self {
            make,
            model,
            year,
            color,
            price,
        }
    }
}

impl TryFrom<CarDetailsDto> for CarDetails {
    type Error = CarValidationError;

    fn try_from(value: CarDetailsDto) -> Result<Self, Self::Error> {
        Self::new(value.make, value.model, value.year, value.color, value.price)
    }
}

/// Persisted car record.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    id: CarId,
    details: CarDetails,
}

impl Car {
    /// Pair an identifier with validated details.
    #[must_use]
    pub const fn new(id: CarId, details: CarDetails) -> Self {
        Self { id, details }
    }

    /// Stable identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> &CarId {
        &self.id
    }

    /// Current field values.
    #[must_use]
    pub const fn details(&self) -> &CarDetails {
        &self.details
    }

    /// Replace every field, keeping the identifier.
    #[must_use]
    pub fn replaced_with(self, details: CarDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }
}
