use chrono::{Duration, Months, NaiveDate};

use super::{
    anchor::{whole_months_between, whole_weeks_between},
    date_format::format_date,
    SubscriptionType,
};

/// Expands a validated term into its invoice dates.
///
/// Each date is `start` plus a whole number of periods. For a monthly term
/// anchored on day 29-31 the intermediate dates clamp to the end of shorter
/// months while the last one still lands on `end`.
pub fn invoice_dates(
    subscription_type: SubscriptionType,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = match subscription_type {
        SubscriptionType::Daily => vec![start],
        SubscriptionType::Weekly => (0..=whole_weeks_between(start, end))
            .map(|step| start + Duration::weeks(i64::from(step)))
            .collect(),
        SubscriptionType::Monthly => (0..=whole_months_between(start, end))
            .filter_map(|step| start.checked_add_months(Months::new(step)))
            .collect(),
    };

    if subscription_type != SubscriptionType::Daily {
        debug_assert_eq!(dates.last(), Some(&end), "term is not aligned to its anchor");
    }
    dates
}

pub fn format_invoice_dates(dates: &[NaiveDate]) -> Vec<String> {
    dates.iter().copied().map(format_date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_is_a_single_invoice() {
        let start = date(2026, 10, 14);
        assert_eq!(
            invoice_dates(SubscriptionType::Daily, start, start),
            vec![start]
        );
    }

    #[test]
    fn weekly_steps_seven_days_to_end() {
        let dates = invoice_dates(
            SubscriptionType::Weekly,
            date(2026, 10, 14),
            date(2026, 11, 4),
        );
        assert_eq!(
            dates,
            vec![
                date(2026, 10, 14),
                date(2026, 10, 21),
                date(2026, 10, 28),
                date(2026, 11, 4),
            ]
        );
    }

    #[test]
    fn monthly_crosses_year_boundary() {
        let dates = invoice_dates(
            SubscriptionType::Monthly,
            date(2026, 11, 30),
            date(2027, 1, 30),
        );
        assert_eq!(
            dates,
            vec![date(2026, 11, 30), date(2026, 12, 30), date(2027, 1, 30)]
        );
    }

    #[test]
    fn monthly_anchor_on_31st_clamps_short_months() {
        let dates = invoice_dates(
            SubscriptionType::Monthly,
            date(2025, 1, 31),
            date(2025, 3, 31),
        );
        assert_eq!(
            dates,
            vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31)]
        );
    }

    #[test]
    fn formats_in_day_month_year_order() {
        let formatted = format_invoice_dates(&[date(2026, 2, 3), date(2026, 3, 3)]);
        assert_eq!(formatted, vec!["03/02/2026", "03/03/2026"]);
    }
}
