//! Calendar export configuration.

use chrono::{NaiveDateTime, Utc};

/// Configuration for iCalendar export.
#[derive(Debug, Clone)]
pub struct IcsConfig {
    year: i32,
    dtstamp: NaiveDateTime,
    product_id: String,
    calendar_name: String,
    calendar_description: String,
    timezone: String,
    url: String,
}

impl Default for IcsConfig {
    fn default() -> Self {
        Self {
            year: 2026,
            dtstamp: Utc::now().naive_utc(),
            product_id: "-//Latvian Name Days//lv-namedays//EN".to_string(),
            calendar_name: "Vārda dienas".to_string(),
            calendar_description: "Latviešu vārda dienu kalendārs".to_string(),
            timezone: "Europe/Riga".to_string(),
            url: "https://github.com/CaptSolo/lv-namedays".to_string(),
        }
    }
}

impl IcsConfig {
    /// Set the year in which the first occurrence of every event is placed.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the `DTSTAMP` written on every event (UTC).
    pub fn with_dtstamp(mut self, dtstamp: NaiveDateTime) -> Self {
        self.dtstamp = dtstamp;
        self
    }

    /// Set the `PRODID` of the calendar.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    /// Set the display name of the calendar.
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = name.into();
        self
    }

    /// Set the calendar description.
    pub fn with_calendar_description(mut self, description: impl Into<String>) -> Self {
        self.calendar_description = description.into();
        self
    }

    /// Set the `X-WR-TIMEZONE` hint.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Set the `URL` attached to every event.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Returns the base year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the event timestamp.
    pub fn dtstamp(&self) -> NaiveDateTime {
        self.dtstamp
    }

    /// Returns the product identifier.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the calendar name.
    pub fn calendar_name(&self) -> &str {
        &self.calendar_name
    }

    /// Returns the calendar description.
    pub fn calendar_description(&self) -> &str {
        &self.calendar_description
    }

    /// Returns the timezone hint.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the event URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
