use serde::{Deserialize, Serialize};

/// Raw booking form contents, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingFormInput {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub duration: String,
}

impl BookingFormInput {
    /// Copy with the free-text fields trimmed, the way the form hands them
    /// to the validators. Date, time and duration come from pickers and are
    /// passed through untouched.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            date: self.date.clone(),
            time: self.time.clone(),
            duration: self.duration.clone(),
        }
    }

    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Location => &self.location,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Duration => &self.duration,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Phone => self.phone = value,
            BookingField::Location => self.location = value,
            BookingField::Date => self.date = value,
            BookingField::Time => self.time = value,
            BookingField::Duration => self.duration = value,
        }
    }

    /// Relay query parameters, in form order.
    pub fn query_pairs(&self) -> [(&'static str, &str); 6] {
        BookingField::ALL.map(|field| (field.as_str(), self.value(field)))
    }
}

/// What the page posts: the form plus the browser's `getTimezoneOffset()`,
/// so "today" and "now" are the visitor's, not the server's.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingSubmission {
    #[serde(flatten)]
    pub booking: BookingFormInput,
    #[serde(default)]
    pub tz_offset: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Phone,
    Location,
    Date,
    Time,
    Duration,
}

impl BookingField {
    /// Form order. Also the order in which a failing field gets focus.
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Location,
        BookingField::Date,
        BookingField::Time,
        BookingField::Duration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::Location => "location",
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Duration => "duration",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(BookingField::Name),
            "phone" => Some(BookingField::Phone),
            "location" => Some(BookingField::Location),
            "date" => Some(BookingField::Date),
            "time" => Some(BookingField::Time),
            "duration" => Some(BookingField::Duration),
            _ => None,
        }
    }
}

/// Values offered by the duration select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationOption {
    #[serde(rename = "2-hours")]
    TwoHours,
    #[serde(rename = "4-hours")]
    FourHours,
    #[serde(rename = "8-hours")]
    EightHours,
    #[serde(rename = "full-day")]
    FullDay,
    #[serde(rename = "multi-day")]
    MultiDay,
}

impl DurationOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationOption::TwoHours => "2-hours",
            DurationOption::FourHours => "4-hours",
            DurationOption::EightHours => "8-hours",
            DurationOption::FullDay => "full-day",
            DurationOption::MultiDay => "multi-day",
        }
    }
}
