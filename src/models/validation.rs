use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::booking::BookingField;

/// Per-field error messages for one validation pass. An empty message means
/// the field is fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    messages: [String; 6],
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(field: BookingField) -> usize {
        match field {
            BookingField::Name => 0,
            BookingField::Phone => 1,
            BookingField::Location => 2,
            BookingField::Date => 3,
            BookingField::Time => 4,
            BookingField::Duration => 5,
        }
    }

    pub fn set(&mut self, field: BookingField, message: impl Into<String>) {
        self.messages[Self::index(field)] = message.into();
    }

    pub fn message(&self, field: BookingField) -> &str {
        &self.messages[Self::index(field)]
    }

    pub fn clear(&mut self) {
        self.messages = Default::default();
    }

    pub fn is_valid(&self) -> bool {
        self.messages.iter().all(|m| m.is_empty())
    }

    /// First failing field in form order.
    pub fn focus_target(&self) -> Option<BookingField> {
        BookingField::ALL
            .into_iter()
            .find(|field| !self.message(*field).is_empty())
    }

    pub fn errors(&self) -> Vec<(BookingField, &str)> {
        BookingField::ALL
            .into_iter()
            .map(|field| (field, self.message(field)))
            .filter(|(_, message)| !message.is_empty())
            .collect()
    }
}

// Serialized as `{ "name": "", "phone": "...", ... }` so the page can write
// every message back, including the empty ones that clear stale errors.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(BookingField::ALL.len()))?;
        for field in BookingField::ALL {
            map.serialize_entry(field.as_str(), self.message(field))?;
        }
        map.end()
    }
}
