use serde::{Deserialize, Serialize};

use crate::record;

/// Postal address of a [`Person`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub city: String,
    pub area: String,
}

/// Domain representation of a person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub address: Address,
}

/// Wire representation of an [`Address`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    pub city: String,
    pub area: String,
}

/// Wire representation of a [`Person`].
///
/// Declared separately from the domain type; the copier pairs the two by
/// field name and type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub address: AddressDto,
}

impl Address {
    pub fn new(city: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            area: area.into(),
        }
    }
}

impl PersonDto {
    /// Creates a new PersonDto instance.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `age` - Age in years
    /// * `city` - City of the address
    /// * `area` - District within the city
    pub fn new(
        name: impl Into<String>,
        age: i32,
        city: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            address: AddressDto {
                city: city.into(),
                area: area.into(),
            },
        }
    }
}

record! {
    Address { city, area };
    Person { name, age, address };
    AddressDto { city, area };
    PersonDto { name, age, address };
}
