use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    anchor::{DayOfSubscription, TermPeriod},
    date_format::parse_date,
    Subscription, SubscriptionType,
};
use crate::errors::{DateField, SubscriptionError};

/// Longest allowed term, in calendar months.
pub const MAX_TERM_MONTHS: u32 = 3;

/// Staging area for a [`Subscription`]. Setters validate their own field;
/// [`SubscriptionBuilder::build`] validates the combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionBuilder {
    charge: Decimal,
    subscription_type: Option<SubscriptionType>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl SubscriptionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_subscription(subscription: &Subscription) -> Self {
        Self {
            charge: subscription.charge(),
            subscription_type: Some(subscription.subscription_type()),
            start_date: Some(subscription.start_date()),
            end_date: Some(subscription.end_date()),
        }
    }

    pub fn charge(mut self, charge: Decimal) -> Result<Self, SubscriptionError> {
        if charge < Decimal::ZERO {
            return Err(SubscriptionError::InvalidCharge);
        }
        self.charge = charge;
        Ok(self)
    }

    pub fn subscription_type(mut self, subscription_type: SubscriptionType) -> Self {
        self.subscription_type = Some(subscription_type);
        self
    }

    /// Accepts `dd/MM/yyyy` text.
    pub fn start_date(mut self, text: &str) -> Result<Self, SubscriptionError> {
        self.start_date = Some(
            parse_date(text).ok_or(SubscriptionError::InvalidDateFormat(DateField::Start))?,
        );
        Ok(self)
    }

    /// Accepts `dd/MM/yyyy` text.
    pub fn end_date(mut self, text: &str) -> Result<Self, SubscriptionError> {
        self.end_date =
            Some(parse_date(text).ok_or(SubscriptionError::InvalidDateFormat(DateField::End))?);
        Ok(self)
    }

    pub fn build(&self) -> Result<Subscription, SubscriptionError> {
        let (Some(subscription_type), Some(start), Some(end)) =
            (self.subscription_type, self.start_date, self.end_date)
        else {
            return Err(SubscriptionError::MissingField);
        };

        let anchor = DayOfSubscription::for_start(subscription_type, start);
        validate_term(subscription_type, start, end, anchor)?;

        let subscription = Subscription::new(self.charge, subscription_type, start, end, anchor);
        tracing::debug!(
            subscription_type = %subscription_type,
            invoices = subscription.invoice_count(),
            "subscription built"
        );
        Ok(subscription)
    }
}

fn validate_term(
    subscription_type: SubscriptionType,
    start: NaiveDate,
    end: NaiveDate,
    anchor: DayOfSubscription,
) -> Result<(), SubscriptionError> {
    match subscription_type {
        SubscriptionType::Daily => {
            if start != end {
                return Err(SubscriptionError::DateMismatch);
            }
        }
        SubscriptionType::Weekly | SubscriptionType::Monthly => {
            if end <= start {
                return Err(SubscriptionError::DateOrder);
            }
            if !anchor.matches(end) {
                return Err(match anchor {
                    DayOfSubscription::Weekday(weekday) => {
                        SubscriptionError::WeekdayMismatch { start, weekday }
                    }
                    DayOfSubscription::MonthDay(day) => {
                        SubscriptionError::MonthDayMismatch { start, day }
                    }
                });
            }
        }
    }

    if TermPeriod::between(start, end).exceeds_months(MAX_TERM_MONTHS) {
        return Err(SubscriptionError::DurationExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn charge_defaults_to_zero() {
        let subscription = SubscriptionBuilder::new()
            .subscription_type(SubscriptionType::Daily)
            .start_date("14/10/2026")
            .unwrap()
            .end_date("14/10/2026")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(subscription.charge(), Decimal::ZERO);
        assert_eq!(subscription.total_charge(), Decimal::ZERO);
    }

    #[test]
    fn zero_charge_is_accepted() {
        assert!(SubscriptionBuilder::new().charge(dec!(0.00)).is_ok());
        assert_eq!(
            SubscriptionBuilder::new().charge(dec!(-0.01)).unwrap_err(),
            SubscriptionError::InvalidCharge
        );
    }

    #[test]
    fn failed_setter_reports_which_date() {
        assert_eq!(
            SubscriptionBuilder::new().start_date("14-10-2026").unwrap_err(),
            SubscriptionError::InvalidDateFormat(DateField::Start)
        );
        assert_eq!(
            SubscriptionBuilder::new().end_date("14-10-2026").unwrap_err(),
            SubscriptionError::InvalidDateFormat(DateField::End)
        );
    }

    #[test]
    fn presence_is_checked_before_dates() {
        let err = SubscriptionBuilder::new()
            .subscription_type(SubscriptionType::Daily)
            .start_date("14/10/2026")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, SubscriptionError::MissingField);
    }

    #[test]
    fn order_is_checked_before_anchor() {
        let err = SubscriptionBuilder::new()
            .subscription_type(SubscriptionType::Monthly)
            .start_date("14/10/2026")
            .unwrap()
            .end_date("13/09/2026")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, SubscriptionError::DateOrder);
    }

    #[test]
    fn anchor_is_checked_before_duration() {
        let err = SubscriptionBuilder::new()
            .subscription_type(SubscriptionType::Weekly)
            .start_date("14/10/2026")
            .unwrap()
            .end_date("15/06/2027")
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.is_anchor_mismatch());
    }
}
