use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::subscription::anchor::weekday_name;

/// Which end of the subscription term a date field refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Start => "start",
            DateField::End => "end",
        }
    }
}

/// Validation failures raised while assembling a subscription.
///
/// Every variant renders the message shown to whoever supplied the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("Charge rate must be larger than 0")]
    InvalidCharge,
    #[error("Please enter a valid {} date in format (dd/MM/yyyy).", .0.as_str())]
    InvalidDateFormat(DateField),
    #[error("Please ensure subscription type, start date and end date are being entered.")]
    MissingField,
    #[error("For daily subscription, the start date must be same as the end date.")]
    DateMismatch,
    #[error("For weekly and monthly subscription, the end date must be after the start date.")]
    DateOrder,
    #[error(
        "For weekly subscription, the day of week of end date must be the same as the start date ({start} - {}).",
        weekday_name(.weekday)
    )]
    WeekdayMismatch { start: NaiveDate, weekday: Weekday },
    #[error(
        "For monthly subscription, the day of month of end date must be the same as the start date ({start} - {day})."
    )]
    MonthDayMismatch { start: NaiveDate, day: u32 },
    #[error("You can only have maximum 3 months subscription.")]
    DurationExceeded,
    #[error("Unknown subscription type: {0}")]
    UnknownSubscriptionType(String),
}

impl SubscriptionError {
    /// True for the two day-anchor violations.
    pub fn is_anchor_mismatch(&self) -> bool {
        matches!(
            self,
            SubscriptionError::WeekdayMismatch { .. } | SubscriptionError::MonthDayMismatch { .. }
        )
    }
}

/// Failures while loading or saving the tool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Subscription(#[from] SubscriptionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
    #[error("Invalid usage: {0}")]
    Usage(String),
}
