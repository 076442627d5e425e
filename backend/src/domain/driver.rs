//! Driver record data model.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation errors returned by the record constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Full name was empty after trimming.
    EmptyFullName,
    /// Mobile number was not exactly 10 decimal digits.
    InvalidMobileNumber,
    /// Licence number was empty after trimming.
    EmptyLicenseNumber,
    /// City was empty after trimming (passengers only; drivers default it).
    EmptyCity,
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFullName => write!(f, "full name must not be empty"),
            Self::InvalidMobileNumber => {
                write!(f, "mobile number must be exactly 10 digits")
            }
            Self::EmptyLicenseNumber => write!(f, "license number must not be empty"),
            Self::EmptyCity => write!(f, "city must not be empty"),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Registrant's full name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    /// Validate and construct a [`FullName`], trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, RegistrationValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RegistrationValidationError::EmptyFullName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

static MOBILE_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn mobile_number_regex() -> &'static Regex {
    MOBILE_NUMBER_RE.get_or_init(|| {
        let pattern = "^[0-9]{10}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("mobile number regex failed to compile: {error}"))
    })
}

/// Ten-digit mobile number; the unique key for both record types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Validate and construct a [`MobileNumber`].
    ///
    /// Surrounding whitespace is trimmed before the format check, so
    /// `" 9999999999 "` is accepted while `"12345abcde"` is not.
    pub fn new(value: impl AsRef<str>) -> Result<Self, RegistrationValidationError> {
        let trimmed = value.as_ref().trim();
        if !mobile_number_regex().is_match(trimmed) {
            return Err(RegistrationValidationError::InvalidMobileNumber);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

/// Driving licence number, trimmed and normalised to uppercase.
///
/// Uppercasing at construction makes the storage-level uniqueness check
/// case-insensitive: `"dl-123"` and `"DL-123"` collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicenseNumber(String);

impl LicenseNumber {
    /// Validate and construct a [`LicenseNumber`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, RegistrationValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RegistrationValidationError::EmptyLicenseNumber);
        }
        Ok(Self(trimmed.to_uppercase()))
    }
}

/// City the registrant operates in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct City(String);

/// City substituted when a driver omits the field.
pub const DEFAULT_DRIVER_CITY: &str = "Delhi NCR";

impl City {
    /// Validate and construct a required [`City`] (passenger flow).
    pub fn new(value: impl AsRef<str>) -> Result<Self, RegistrationValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RegistrationValidationError::EmptyCity);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Construct a [`City`] from optional input, substituting
    /// [`DEFAULT_DRIVER_CITY`] when the value is absent or blank (driver flow).
    pub fn or_default_city(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Self(trimmed.to_owned()),
            _ => Self(DEFAULT_DRIVER_CITY.to_owned()),
        }
    }
}

macro_rules! string_newtype_impls {
    ($($name:ident),+ $(,)?) => {
        $(
            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_ref())
                }
            }

            impl From<$name> for String {
                fn from(value: $name) -> Self {
                    value.0
                }
            }

            impl TryFrom<String> for $name {
                type Error = RegistrationValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }
        )+
    };
}

string_newtype_impls!(FullName, MobileNumber, LicenseNumber, City);

/// Raw driver submission before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDraft {
    /// Registrant's full name as submitted.
    pub full_name: String,
    /// Ten-digit mobile number as submitted.
    pub mobile_number: String,
    /// Driving licence number as submitted.
    pub license_number: String,
    /// Optional city; defaults to [`DEFAULT_DRIVER_CITY`] when absent or blank.
    pub city: Option<String>,
}

/// Persistent driver registration.
///
/// ## Invariants
/// - `mobile_number` is exactly 10 decimal digits.
/// - `license_number` is uppercase and non-empty.
/// - Records are immutable once created; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    full_name: FullName,
    mobile_number: MobileNumber,
    license_number: LicenseNumber,
    city: City,
    registered_at: DateTime<Utc>,
}

impl DriverRecord {
    /// Validate a draft into a record, stamping `registered_at` with the
    /// supplied creation time.
    pub fn from_draft(
        draft: DriverDraft,
        registered_at: DateTime<Utc>,
    ) -> Result<Self, RegistrationValidationError> {
        Ok(Self {
            full_name: FullName::new(&draft.full_name)?,
            mobile_number: MobileNumber::new(&draft.mobile_number)?,
            license_number: LicenseNumber::new(&draft.license_number)?,
            city: City::or_default_city(draft.city.as_deref()),
            registered_at,
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

    /// Unique, uppercased licence number.
    pub fn license_number(&self) -> &LicenseNumber {
        &self.license_number
    }

    /// City the driver operates in.
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Creation timestamp, set at insert time.
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft() -> DriverDraft {
        DriverDraft {
            full_name: "Asha Verma".to_owned(),
            mobile_number: "9999999999".to_owned(),
            license_number: "dl-123".to_owned(),
            city: Some("Gurugram".to_owned()),
        }
    }

    #[rstest]
    fn valid_draft_builds_a_record() {
        let record = DriverRecord::from_draft(draft(), Utc::now()).expect("valid draft");
        assert_eq!(record.full_name().as_ref(), "Asha Verma");
        assert_eq!(record.mobile_number().as_ref(), "9999999999");
        assert_eq!(record.city().as_ref(), "Gurugram");
    }

    #[rstest]
    #[case("12345")]
    #[case("12345678901")]
    #[case("12345abcde")]
    #[case("")]
    #[case("99999 9999")]
    fn malformed_mobile_numbers_are_rejected(#[case] mobile: &str) {
        assert_eq!(
            MobileNumber::new(mobile),
            Err(RegistrationValidationError::InvalidMobileNumber)
        );
    }

    #[rstest]
    fn mobile_number_tolerates_surrounding_whitespace() {
        let mobile = MobileNumber::new(" 9999999999 ").expect("trimmed input");
        assert_eq!(mobile.as_ref(), "9999999999");
    }

    #[rstest]
    #[case("dl-123", "DL-123")]
    #[case(" dl1 ", "DL1")]
    #[case("MH02-XY", "MH02-XY")]
    fn license_numbers_are_uppercased(#[case] input: &str, #[case] expected: &str) {
        let license = LicenseNumber::new(input).expect("valid licence");
        assert_eq!(license.as_ref(), expected);
    }

    #[rstest]
    fn blank_license_number_is_rejected() {
        assert_eq!(
            LicenseNumber::new("  "),
            Err(RegistrationValidationError::EmptyLicenseNumber)
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn driver_city_defaults_when_absent_or_blank(#[case] city: Option<&str>) {
        assert_eq!(City::or_default_city(city).as_ref(), DEFAULT_DRIVER_CITY);
    }

    #[rstest]
    fn driver_city_keeps_explicit_values() {
        assert_eq!(City::or_default_city(Some("Noida")).as_ref(), "Noida");
    }

    #[rstest]
    fn full_name_is_trimmed() {
        let mut input = draft();
        input.full_name = "  Asha Verma  ".to_owned();
        let record = DriverRecord::from_draft(input, Utc::now()).expect("valid draft");
        assert_eq!(record.full_name().as_ref(), "Asha Verma");
    }

    #[rstest]
    fn blank_full_name_is_rejected() {
        let mut input = draft();
        input.full_name = "   ".to_owned();
        assert_eq!(
            DriverRecord::from_draft(input, Utc::now()),
            Err(RegistrationValidationError::EmptyFullName)
        );
    }
}
