pub mod validators;

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Form fields, in the order the form renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    City = 0,
    Date = 1,
    Name = 2,
    Phone = 3,
    Agreement = 4,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::City,
        Field::Date,
        Field::Name,
        Field::Phone,
        Field::Agreement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::City => "city",
            Field::Date => "date",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Agreement => "agreement",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values of one booking form submission, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationInput {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub agreed: bool,
}

impl ValidationInput {
    pub fn new(
        city: impl Into<String>,
        date: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        agreed: bool,
    ) -> Self {
        Self {
            city: city.into(),
            date: date.into(),
            name: name.into(),
            phone: phone.into(),
            agreed,
        }
    }
}
