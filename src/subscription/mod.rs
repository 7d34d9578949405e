//! Subscription terms, their validation, and the invoice schedule they produce.

pub mod anchor;
pub mod builder;
pub mod date_format;
pub mod schedule;
pub mod subscription_type;

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use anchor::DayOfSubscription;
pub use builder::{SubscriptionBuilder, MAX_TERM_MONTHS};
pub use date_format::{format_date, parse_date, DATE_FORMAT};
pub use subscription_type::SubscriptionType;

use crate::errors::SubscriptionError;

/// A validated billing term. Only obtainable via [`SubscriptionBuilder::build`].
#[derive(Debug, Clone)]
pub struct Subscription {
    charge: Decimal,
    subscription_type: SubscriptionType,
    day_of_subscription: DayOfSubscription,
    start_date: NaiveDate,
    end_date: NaiveDate,
    invoice_dates: Vec<String>,
}

impl Subscription {
    pub fn builder() -> SubscriptionBuilder {
        SubscriptionBuilder::new()
    }

    /// Seeds an independent builder with this subscription's fields.
    pub fn to_builder(&self) -> SubscriptionBuilder {
        SubscriptionBuilder::from_subscription(self)
    }

    pub(crate) fn new(
        charge: Decimal,
        subscription_type: SubscriptionType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        day_of_subscription: DayOfSubscription,
    ) -> Self {
        let dates = schedule::invoice_dates(subscription_type, start_date, end_date);
        Self {
            charge,
            subscription_type,
            day_of_subscription,
            start_date,
            end_date,
            invoice_dates: schedule::format_invoice_dates(&dates),
        }
    }

    pub fn charge(&self) -> Decimal {
        self.charge
    }

    pub fn subscription_type(&self) -> SubscriptionType {
        self.subscription_type
    }

    pub fn day_of_subscription(&self) -> DayOfSubscription {
        self.day_of_subscription
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Invoice dates in ascending order, formatted as `dd/MM/yyyy`.
    pub fn invoice_dates(&self) -> &[String] {
        &self.invoice_dates
    }

    pub fn invoice_count(&self) -> usize {
        self.invoice_dates.len()
    }

    /// Amount due across the whole term.
    pub fn total_charge(&self) -> Decimal {
        self.charge * Decimal::from(self.invoice_dates.len())
    }

    pub fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            subscription_type: self.subscription_type,
            day_of_subscription: self.day_of_subscription,
            charge: self.charge,
            start_date: format_date(self.start_date),
            end_date: format_date(self.end_date),
            invoice_dates: self.invoice_dates.clone(),
            invoice_count: self.invoice_count(),
            total_charge: self.total_charge(),
        }
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        self.charge == other.charge
            && self.subscription_type == other.subscription_type
            && self.day_of_subscription == other.day_of_subscription
            && self.start_date == other.start_date
            && self.end_date == other.end_date
    }
}

impl Eq for Subscription {}

impl Hash for Subscription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.charge.hash(state);
        self.subscription_type.hash(state);
        self.day_of_subscription.hash(state);
        self.start_date.hash(state);
        self.end_date.hash(state);
    }
}

/// Unvalidated subscription terms as received from a caller, e.g. a JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRequest {
    #[serde(default)]
    pub charge: Decimal,
    pub subscription_type: Option<SubscriptionType>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TryFrom<SubscriptionRequest> for Subscription {
    type Error = SubscriptionError;

    fn try_from(request: SubscriptionRequest) -> Result<Self, Self::Error> {
        let mut builder = Subscription::builder().charge(request.charge)?;
        if let Some(subscription_type) = request.subscription_type {
            builder = builder.subscription_type(subscription_type);
        }
        if let Some(start) = request.start_date.as_deref() {
            builder = builder.start_date(start)?;
        }
        if let Some(end) = request.end_date.as_deref() {
            builder = builder.end_date(end)?;
        }
        builder.build()
    }
}

/// Reporting view of a subscription's invoices.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InvoiceSummary {
    pub subscription_type: SubscriptionType,
    pub day_of_subscription: DayOfSubscription,
    pub charge: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub invoice_dates: Vec<String>,
    pub invoice_count: usize,
    pub total_charge: Decimal,
}
