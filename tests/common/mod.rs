#![allow(dead_code)]

use chrono::{Local, NaiveDate};
use subscription_core::subscription::format_date;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn fmt(date: NaiveDate) -> String {
    format_date(date)
}
