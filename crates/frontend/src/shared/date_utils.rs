//! Date and money formatting for tables.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// "15/03/2024 14:02", in the browser's local time zone.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

/// "15/03/2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

pub fn format_optional_date(dt: &Option<DateTime<Utc>>) -> String {
    dt.as_ref().map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Value for an `<input type="date">`, the local calendar day shown by `format_date`.
pub fn to_date_input(dt: &Option<DateTime<Utc>>) -> String {
    dt.map(|d| d.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse an `<input type="date">` value as the end of that local day.
pub fn from_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    let end_of_day = date.and_hms_opt(23, 59, 59)?;
    Local
        .from_local_datetime(&end_of_day)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// "1,25 €"
pub fn format_money(amount: f64) -> String {
    format!("{:.2} €", amount).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_round_trip() {
        let parsed = from_date_input("2024-06-30").unwrap();
        let local = Local.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        assert_eq!(parsed, local.with_timezone(&Utc));
        assert_eq!(to_date_input(&Some(parsed)), "2024-06-30");
    }

    #[test]
    fn date_input_agrees_with_table_date() {
        let parsed = from_date_input("2024-06-30").unwrap();
        assert_eq!(format_date(&parsed), "30/06/2024");

        let stored = Local
            .with_ymd_and_hms(2024, 1, 1, 0, 30, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(to_date_input(&Some(stored)), "2024-01-01");
        assert_eq!(format_date(&stored), "01/01/2024");
    }

    #[test]
    fn blank_or_invalid_input() {
        assert_eq!(from_date_input(""), None);
        assert_eq!(from_date_input("30/06/2024"), None);
        assert_eq!(to_date_input(&None), "");
        assert_eq!(format_optional_date(&None), "-");
    }

    #[test]
    fn money_uses_decimal_comma() {
        assert_eq!(format_money(1.5), "1,50 €");
        assert_eq!(format_money(12.0), "12,00 €");
    }
}
