//! Customer details collected at checkout.

use serde::{Deserialize, Serialize};

use crate::domain::delivery::PostalCode;
use crate::domain::shared::ValidationField;

/// A free-text contact field of the checkout form.
///
/// The pincode is edited separately because editing it drives delivery checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Street address.
    Address,
}

impl From<ContactField> for ValidationField {
    fn from(field: ContactField) -> Self {
        match field {
            ContactField::Name => Self::Name,
            ContactField::Email => Self::Email,
            ContactField::Phone => Self::Phone,
            ContactField::Address => Self::Address,
        }
    }
}

/// Shipping and contact details. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Street address without the pincode.
    pub address: String,
    /// Pincode.
    pub postal_code: PostalCode,
}

impl CustomerInfo {
    /// Set a contact field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Address => self.address = value,
        }
    }

    /// Read a contact field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Address => &self.address,
        }
    }

    /// The first blank field in form order, if any.
    ///
    /// A value made only of whitespace counts as blank.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<ValidationField> {
        [
            (ValidationField::Name, self.name.as_str()),
            (ValidationField::Email, self.email.as_str()),
            (ValidationField::Phone, self.phone.as_str()),
            (ValidationField::Address, self.address.as_str()),
            (ValidationField::PostalCode, self.postal_code.as_str()),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Address and pincode combined the way the backend expects them.
    #[must_use]
    pub fn address_line(&self) -> String {
        format!("{}, {}", self.address, self.postal_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> CustomerInfo {
        CustomerInfo {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road, Delhi".to_string(),
            postal_code: PostalCode::from("110001"),
        }
    }

    #[test]
    fn complete_info_has_no_missing_field() {
        assert_eq!(complete().first_missing_field(), None);
    }

    #[test]
    fn reports_first_missing_field_in_form_order() {
        let mut info = complete();
        info.phone.clear();
        info.address.clear();
        assert_eq!(info.first_missing_field(), Some(ValidationField::Phone));
    }

    #[test]
    fn whitespace_only_is_missing() {
        let mut info = complete();
        info.set(ContactField::Email, "   ");
        assert_eq!(info.first_missing_field(), Some(ValidationField::Email));
    }

    #[test]
    fn missing_postal_code_is_reported() {
        let mut info = complete();
        info.postal_code = PostalCode::default();
        assert_eq!(info.first_missing_field(), Some(ValidationField::PostalCode));
    }

    #[test]
    fn address_line_joins_address_and_pincode() {
        assert_eq!(complete().address_line(), "12 MG Road, Delhi, 110001");
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut info = CustomerInfo::default();
        info.set(ContactField::Name, "Asha");
        assert_eq!(info.get(ContactField::Name), "Asha");
        assert_eq!(ValidationField::from(ContactField::Address), ValidationField::Address);
    }
}
