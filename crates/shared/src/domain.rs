use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Whatsapp];

    /// Multipart part name expected by the relay.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "E-mail",
            Self::Whatsapp => "Phone",
        }
    }
}

macro_rules! per_field_struct {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub name: String,
            pub email: String,
            pub whatsapp: String,
        }

        impl $name {
            pub fn get(&self, field: ContactField) -> &str {
                match field {
                    ContactField::Name => &self.name,
                    ContactField::Email => &self.email,
                    ContactField::Whatsapp => &self.whatsapp,
                }
            }

            pub fn get_mut(&mut self, field: ContactField) -> &mut String {
                match field {
                    ContactField::Name => &mut self.name,
                    ContactField::Email => &mut self.email,
                    ContactField::Whatsapp => &mut self.whatsapp,
                }
            }

            pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
                *self.get_mut(field) = value.into();
            }

            pub fn clear(&mut self) {
                *self = Self::default();
            }

            pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
                ContactField::ALL
                    .into_iter()
                    .map(move |field| (field, self.get(field)))
            }
        }
    };
}

per_field_struct!(FormFields);
per_field_struct!(FieldErrors);

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        whatsapp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            whatsapp: whatsapp.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}

impl FieldErrors {
    /// True when every field message is empty.
    pub fn is_clear(&self) -> bool {
        self.iter().all(|(_, message)| message.is_empty())
    }

    pub fn first(&self) -> Option<(ContactField, &str)> {
        self.iter().find(|(_, message)| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_round_through_field_accessors() {
        let mut fields = FormFields::default();
        fields.set(ContactField::Email, "a@b.com");
        assert_eq!(fields.email, "a@b.com");
        assert!(!fields.is_empty());

        fields.clear();
        assert!(fields.is_empty());
    }

    #[test]
    fn wire_names_match_relay_contract() {
        let names: Vec<_> = ContactField::ALL.iter().map(|f| f.wire_name()).collect();
        assert_eq!(names, vec!["name", "email", "whatsapp"]);
    }

    #[test]
    fn field_errors_report_first_non_empty_message() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_clear());
        errors.set(ContactField::Whatsapp, "bad phone");
        assert_eq!(errors.first(), Some((ContactField::Whatsapp, "bad phone")));
    }

    #[test]
    fn form_fields_serialize_with_wire_keys() {
        let fields = FormFields::new("Alice", "a@b.com", "12345678901");
        let value = serde_json::to_value(&fields).expect("json");
        assert_eq!(value["whatsapp"], "12345678901");
    }
}
