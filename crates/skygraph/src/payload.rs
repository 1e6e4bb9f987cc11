//! Vertex payloads and the keys used to address them.

use crate::error::AirportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data stored in a vertex.
///
/// Edge and lookup operations take a key rather than an index; the graph compares each stored
/// payload's key against it. Keys are not required to be unique, the first match wins.
pub trait Payload {
    type Key: PartialEq + fmt::Debug;

    fn key(&self) -> &Self::Key;
}

macro_rules! impl_payload_for_ints {
    ($($t:ty),* $(,)?) => {
        $(
            impl Payload for $t {
                type Key = $t;

                fn key(&self) -> &Self::Key {
                    self
                }
            }
        )*
    };
}

impl_payload_for_ints!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

const MAX_TEXT_LEN: usize = 64;

/// An airport record, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub id: i32,
    pub iata_code: String,
    pub country: String,
    pub city: String,
    pub name: String,
    /// Offset from UTC in hours.
    pub utc_offset: i32,
}

impl Airport {
    pub fn new(
        id: i32,
        iata_code: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
        name: impl Into<String>,
        utc_offset: i32,
    ) -> Self {
        Self {
            id,
            iata_code: iata_code.into(),
            country: country.into(),
            city: city.into(),
            name: name.into(),
            utc_offset,
        }
    }

    /// Checks the record fits the fixed-width fields airport data is exchanged in: a 3 character
    /// IATA code and at most 64 bytes of country, city and name.
    pub fn validate(&self) -> Result<(), AirportError> {
        let code = &self.iata_code;
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AirportError::InvalidIataCode {
                id: self.id,
                code: code.clone(),
            });
        }
        for (field, value) in [
            ("country", &self.country),
            ("city", &self.city),
            ("name", &self.name),
        ] {
            if value.len() > MAX_TEXT_LEN {
                return Err(AirportError::FieldTooLong {
                    id: self.id,
                    field,
                    len: value.len(),
                    max: MAX_TEXT_LEN,
                });
            }
        }
        Ok(())
    }
}

impl Payload for Airport {
    type Key = i32;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.iata_code, self.city, self.country)
    }
}
