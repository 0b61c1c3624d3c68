//! Organization registration form model and validation.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Format accepted for the registration date.
pub const REGISTRATION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Countries offered by the country selector.
pub const COUNTRIES: &[&str] = &["Germany", "India", "Kenya", "Netherlands", "United Kingdom", "United States"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum OrganizationType {
    #[default]
    Manufacturer,
    Distributor,
    Retailer,
    Regulator,
}

impl OrganizationType {
    pub const ALL: [OrganizationType; 4] = [
        OrganizationType::Manufacturer,
        OrganizationType::Distributor,
        OrganizationType::Retailer,
        OrganizationType::Regulator,
    ];

    /// Next type in selector order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|candidate| *candidate == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|candidate| *candidate == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrganizationType::Manufacturer => "Manufacturer",
            OrganizationType::Distributor => "Distributor",
            OrganizationType::Retailer => "Retailer",
            OrganizationType::Regulator => "Regulator",
        };
        f.write_str(label)
    }
}

/// Fields of the registration form in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegistrationField {
    OrganizationType,
    AnotherWallet,
    LegalName,
    BusinessRegistrationNumber,
    Country,
    Email,
    ContactPerson,
    Designation,
    Phone,
    Address,
    DateOfRegistration,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 11] = [
        RegistrationField::OrganizationType,
        RegistrationField::AnotherWallet,
        RegistrationField::LegalName,
        RegistrationField::BusinessRegistrationNumber,
        RegistrationField::Country,
        RegistrationField::Email,
        RegistrationField::ContactPerson,
        RegistrationField::Designation,
        RegistrationField::Phone,
        RegistrationField::Address,
        RegistrationField::DateOfRegistration,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            RegistrationField::OrganizationType => "Organization type",
            RegistrationField::AnotherWallet => "Register another wallet",
            RegistrationField::LegalName => "Legal name",
            RegistrationField::BusinessRegistrationNumber => "Business reg. no",
            RegistrationField::Country => "Country",
            RegistrationField::Email => "Email",
            RegistrationField::ContactPerson => "Contact person",
            RegistrationField::Designation => "Designation",
            RegistrationField::Phone => "Phone",
            RegistrationField::Address => "Address",
            RegistrationField::DateOfRegistration => "Date of registration",
        }
    }

    /// Whether the field accepts free text.
    pub const fn is_text(&self) -> bool {
        !matches!(
            self,
            RegistrationField::OrganizationType | RegistrationField::AnotherWallet | RegistrationField::Country
        )
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0} is required")]
    MissingField(RegistrationField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("'{0}' is not a valid date (expected dd/mm/yyyy)")]
    InvalidDate(String),
}

/// Values captured by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationRegistration {
    pub organization_type: OrganizationType,
    pub another_wallet: bool,
    pub legal_name: String,
    pub business_registration_number: String,
    /// Index into [`COUNTRIES`].
    pub country: usize,
    pub email: String,
    pub contact_person: String,
    pub designation: String,
    pub phone: String,
    pub address: String,
    pub date_of_registration: String,
}

impl OrganizationRegistration {
    /// Text value of a free-text field; `None` for selectors and toggles.
    pub fn text(&self, field: RegistrationField) -> Option<&str> {
        let value = match field {
            RegistrationField::LegalName => &self.legal_name,
            RegistrationField::BusinessRegistrationNumber => &self.business_registration_number,
            RegistrationField::Email => &self.email,
            RegistrationField::ContactPerson => &self.contact_person,
            RegistrationField::Designation => &self.designation,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Address => &self.address,
            RegistrationField::DateOfRegistration => &self.date_of_registration,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn text_mut(&mut self, field: RegistrationField) -> Option<&mut String> {
        let value = match field {
            RegistrationField::LegalName => &mut self.legal_name,
            RegistrationField::BusinessRegistrationNumber => &mut self.business_registration_number,
            RegistrationField::Email => &mut self.email,
            RegistrationField::ContactPerson => &mut self.contact_person,
            RegistrationField::Designation => &mut self.designation,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Address => &mut self.address,
            RegistrationField::DateOfRegistration => &mut self.date_of_registration,
            _ => return None,
        };
        Some(value)
    }

    pub fn country_name(&self) -> &'static str {
        COUNTRIES.get(self.country).copied().unwrap_or(COUNTRIES[0])
    }

    pub fn cycle_country(&mut self, forward: bool) {
        let len = COUNTRIES.len();
        self.country = if forward {
            (self.country + 1) % len
        } else {
            (self.country + len - 1) % len
        };
    }

    /// Checks required fields, the email shape, and the optional date.
    ///
    /// The first problem found is reported, in tab order.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        for field in [
            RegistrationField::LegalName,
            RegistrationField::Email,
            RegistrationField::ContactPerson,
        ] {
            if self.text(field).is_none_or(|value| value.trim().is_empty()) {
                return Err(RegistrationError::MissingField(field));
            }
        }
        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(RegistrationError::InvalidEmail(email.to_string()));
        }
        self.registration_date()?;
        Ok(())
    }

    /// Parsed registration date, `None` when the field is blank.
    pub fn registration_date(&self) -> Result<Option<NaiveDate>, RegistrationError> {
        let raw = self.date_of_registration.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, REGISTRATION_DATE_FORMAT)
            .map(Some)
            .map_err(|_| RegistrationError::InvalidDate(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> OrganizationRegistration {
        OrganizationRegistration {
            legal_name: "Nordic Cold Chain GmbH".into(),
            email: "ops@nordic-cold.example".into(),
            contact_person: "A. Jensen".into(),
            ..Default::default()
        }
    }

    #[test]
    fn organization_type_cycles_through_all_values() {
        let mut current = OrganizationType::default();
        for _ in 0..OrganizationType::ALL.len() {
            current = current.next();
        }
        assert_eq!(current, OrganizationType::Manufacturer);
        assert_eq!(OrganizationType::Manufacturer.previous(), OrganizationType::Regulator);
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn missing_required_field_is_reported_in_tab_order() {
        let form = OrganizationRegistration::default();
        assert_eq!(form.validate(), Err(RegistrationError::MissingField(RegistrationField::LegalName)));
        let form = OrganizationRegistration {
            email: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(RegistrationError::MissingField(RegistrationField::Email)));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = OrganizationRegistration {
            email: "ops.example".into(),
            ..filled()
        };
        assert!(matches!(form.validate(), Err(RegistrationError::InvalidEmail(_))));
    }

    #[test]
    fn registration_date_must_be_a_real_day() {
        let form = OrganizationRegistration {
            date_of_registration: "31/02/2024".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(RegistrationError::InvalidDate("31/02/2024".into())));

        let form = OrganizationRegistration {
            date_of_registration: "14/03/2024".into(),
            ..filled()
        };
        assert_eq!(form.registration_date(), Ok(NaiveDate::from_ymd_opt(2024, 3, 14)));
    }

    #[test]
    fn country_selector_wraps() {
        let mut form = filled();
        form.cycle_country(false);
        assert_eq!(form.country_name(), "United States");
        form.cycle_country(true);
        assert_eq!(form.country_name(), "Germany");
    }
}
