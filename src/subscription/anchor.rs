use std::fmt;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use super::SubscriptionType;

/// The fixed day a subscription is billed on, taken from its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfSubscription {
    Weekday(Weekday),
    MonthDay(u32),
}

impl DayOfSubscription {
    pub fn for_start(subscription_type: SubscriptionType, start: NaiveDate) -> Self {
        match subscription_type {
            SubscriptionType::Weekly => DayOfSubscription::Weekday(start.weekday()),
            SubscriptionType::Daily | SubscriptionType::Monthly => {
                DayOfSubscription::MonthDay(start.day())
            }
        }
    }

    /// Whether `date` falls on this anchor.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DayOfSubscription::Weekday(weekday) => date.weekday() == *weekday,
            DayOfSubscription::MonthDay(day) => date.day() == *day,
        }
    }
}

impl fmt::Display for DayOfSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOfSubscription::Weekday(weekday) => f.write_str(weekday_name(weekday)),
            DayOfSubscription::MonthDay(day) => write!(f, "{day}"),
        }
    }
}

impl Serialize for DayOfSubscription {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) fn weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// Calendar distance between two dates as whole months plus leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermPeriod {
    pub months: u32,
    pub days: u32,
}

impl TermPeriod {
    /// Expects `start <= end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let months = whole_months_between(start, end);
        let stepped = start
            .checked_add_months(Months::new(months))
            .unwrap_or(end);
        let days = (end - stepped).num_days().max(0) as u32;
        Self { months, days }
    }

    pub fn exceeds_months(&self, cap: u32) -> bool {
        self.months > cap || (self.months == cap && self.days > 0)
    }
}

/// Number of complete calendar months from `start` to `end`, zero when `end < start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let start_idx = start.year() * 12 + start.month0() as i32;
    let end_idx = end.year() * 12 + end.month0() as i32;
    let mut months = end_idx - start_idx;
    if months > 0 && end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Number of complete weeks from `start` to `end`, zero when `end < start`.
pub fn whole_weeks_between(start: NaiveDate, end: NaiveDate) -> u32 {
    ((end - start).num_days().max(0) / 7) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_uses_weekday_for_weekly_and_day_for_others() {
        let start = date(2026, 10, 14);
        assert_eq!(
            DayOfSubscription::for_start(SubscriptionType::Weekly, start).to_string(),
            "WEDNESDAY"
        );
        assert_eq!(
            DayOfSubscription::for_start(SubscriptionType::Monthly, start).to_string(),
            "14"
        );
        assert_eq!(
            DayOfSubscription::for_start(SubscriptionType::Daily, start),
            DayOfSubscription::MonthDay(14)
        );
    }

    #[test]
    fn whole_months_drop_partial_month() {
        assert_eq!(whole_months_between(date(2025, 1, 31), date(2025, 2, 28)), 0);
        assert_eq!(whole_months_between(date(2025, 1, 15), date(2025, 4, 15)), 3);
        assert_eq!(whole_months_between(date(2025, 11, 20), date(2026, 2, 19)), 2);
    }

    #[test]
    fn term_period_splits_months_and_days() {
        let period = TermPeriod::between(date(2025, 1, 15), date(2025, 4, 16));
        assert_eq!(period, TermPeriod { months: 3, days: 1 });
        assert!(period.exceeds_months(3));

        let exact = TermPeriod::between(date(2025, 1, 15), date(2025, 4, 15));
        assert_eq!(exact, TermPeriod { months: 3, days: 0 });
        assert!(!exact.exceeds_months(3));
    }

    #[test]
    fn term_period_counts_years_as_months() {
        let period = TermPeriod::between(date(2025, 1, 15), date(2026, 1, 15));
        assert_eq!(period.months, 12);
        assert!(period.exceeds_months(3));
    }

    #[test]
    fn whole_weeks_floor_the_day_difference() {
        assert_eq!(whole_weeks_between(date(2025, 1, 1), date(2025, 1, 16)), 2);
        assert_eq!(whole_weeks_between(date(2025, 1, 1), date(2025, 1, 22)), 3);
    }
}
