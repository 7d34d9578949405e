use chrono::NaiveDate;

/// Textual date pattern used for every date accepted or produced by a subscription.
pub const DATE_FORMAT: &str = "dd/MM/yyyy";

const CHRONO_FORMAT: &str = "%d/%m/%Y";

/// Parses strict `dd/MM/yyyy` text. Unpadded fields and impossible dates are rejected.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, b)| idx == 2 || idx == 5 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, CHRONO_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(CHRONO_FORMAT).to_string()
}
