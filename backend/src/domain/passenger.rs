//! Passenger record data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::driver::{City, FullName, MobileNumber, RegistrationValidationError};

/// Raw passenger submission before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerDraft {
    /// Registrant's full name as submitted.
    pub full_name: String,
    /// Ten-digit mobile number as submitted.
    pub mobile_number: String,
    /// City the passenger wants rides in; required, no default.
    pub city: String,
}

/// Persistent passenger registration.
///
/// ## Invariants
/// - `mobile_number` is exactly 10 decimal digits and unique among passengers.
/// - `city` is non-empty; unlike drivers there is no default substitution.
/// - Records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    full_name: FullName,
    mobile_number: MobileNumber,
    city: City,
    created_at: DateTime<Utc>,
}

impl PassengerRecord {
    /// Validate a draft into a record, stamping `created_at` with the supplied
    /// creation time.
    pub fn from_draft(
        draft: PassengerDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, RegistrationValidationError> {
        Ok(Self {
            full_name: FullName::new(&draft.full_name)?,
            mobile_number: MobileNumber::new(&draft.mobile_number)?,
            city: City::new(&draft.city)?,
            created_at,
        })
    }

    /// Registrant's full name.
    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    /// Unique mobile number.
    pub fn mobile_number(&self) -> &MobileNumber {
        &self.mobile_number
    }

    /// City the passenger wants rides in.
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Creation timestamp, set at insert time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
