//! Fixed-width table output for a forecast response.

use chrono::{DateTime, TimeZone, Utc};
use std::{fmt::Display, io::Write};

use crate::{
    config::Units,
    model::{ForecastResponse, MissingDataError},
};

pub const NO_DATA_MESSAGE: &str = "Sorry, no weather data";
pub const RULE_WIDTH: usize = 65;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// Header, rule and this many data rows were written.
    Rendered(usize),
    /// The response lacked required fields; only the no-data message was written.
    Unknown(MissingDataError),
}

/// Writes forecast tables with timestamps shown in `tz`.
#[derive(Debug, Clone)]
pub struct Presenter<Tz: TimeZone> {
    tz: Tz,
    units: Units,
}

impl<Tz> Presenter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(tz: Tz, units: Units) -> Self {
        Self { tz, units }
    }

    pub fn format_time(&self, time: &DateTime<Utc>) -> String {
        time.with_timezone(&self.tz).format(DATE_FORMAT).to_string()
    }

    /// Print the whole table, or only the no-data message if any entry is incomplete.
    pub fn render<W: Write>(&self, response: &ForecastResponse, out: &mut W) -> std::io::Result<RenderResult> {
        let rows = match response.rows() {
            Ok(rows) => rows,
            Err(err) => {
                writeln!(out, "{NO_DATA_MESSAGE}")?;
                return Ok(RenderResult::Unknown(err));
            }
        };

        let temperature = format!("Temperature {}", self.units.temperature_symbol());
        writeln!(out, "{:<20} {:<14} {:<18} {:<10}", "Date", temperature, "Description", "Wind speed")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

        for row in &rows {
            writeln!(
                out,
                "{:<20} {:<14} {:<18} {:<10}",
                self.format_time(&row.time),
                row.temperature,
                row.description,
                row.wind_speed,
            )?;
        }

        Ok(RenderResult::Rendered(rows.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ForecastResponse {
        serde_json::from_value(value).unwrap()
    }

    fn render(value: serde_json::Value) -> (RenderResult, Vec<String>) {
        let mut out = Vec::new();
        let result = Presenter::new(Utc, Units::Imperial).render(&response(value), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (result, text.lines().map(str::to_string).collect())
    }

    fn entry(dt: i64, temp: f64, desc: &str, wind: f64) -> serde_json::Value {
        json!({"dt": dt, "main": {"temp": temp}, "weather": [{"description": desc}], "wind": {"speed": wind}})
    }

    #[test]
    fn minneapolis_single_entry() {
        let (result, lines) = render(json!({"list": [entry(1_700_000_000, 42.5, "clear sky", 5.1)]}));

        assert_eq!(result, RenderResult::Rendered(1));
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("{:<20} {:<14} {:<18} {:<10}", "Date", "Temperature F", "Description", "Wind speed")
        );
        assert_eq!(lines[1], "-".repeat(65));
        assert_eq!(
            lines[2],
            format!("{:<20} {:<14} {:<18} {:<10}", "2023-11-14 22:13:20", "42.5", "clear sky", "5.1")
        );
    }

    #[test]
    fn emits_one_row_per_entry_in_order() {
        let list: Vec<_> = (0..5).rev().map(|i| entry(1_700_000_000 + i * 10_800, i as f64, "rain", 1.0)).collect();
        let (result, lines) = render(json!({ "list": list }));

        assert_eq!(result, RenderResult::Rendered(5));
        assert_eq!(lines.len(), 7);
        let temps: Vec<&str> = lines[2..].iter().map(|l| l[21..35].trim()).collect();
        assert_eq!(temps, vec!["4", "3", "2", "1", "0"]);
    }

    #[test]
    fn missing_list_prints_only_no_data() {
        let (result, lines) = render(json!({"cod": "200", "message": 0}));

        assert_eq!(result, RenderResult::Unknown(MissingDataError::NoList));
        assert_eq!(lines, vec![NO_DATA_MESSAGE]);
    }

    #[test]
    fn incomplete_entry_aborts_whole_table() {
        let (result, lines) = render(json!({"list": [
            entry(1_700_000_000, 40.0, "clouds", 3.0),
            {"dt": 1_700_010_800, "main": {"temp": 41.0}, "weather": [{"description": "rain"}]},
        ]}));

        assert_eq!(
            result,
            RenderResult::Unknown(MissingDataError::Field { index: 1, field: "wind.speed" })
        );
        assert_eq!(lines, vec![NO_DATA_MESSAGE]);
    }

    #[test]
    fn empty_list_renders_header_only() {
        let (result, lines) = render(json!({"list": []}));
        assert_eq!(result, RenderResult::Rendered(0));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn time_format_is_monotonic_with_timestamp() {
        let p = Presenter::new(Utc, Units::Metric);
        let stamps = [0_i64, 59, 3_600, 86_399, 86_400, 1_700_000_000, 1_700_010_800];
        let formatted: Vec<String> = stamps
            .iter()
            .map(|ts| p.format_time(&DateTime::from_timestamp(*ts, 0).unwrap()))
            .collect();

        assert!(formatted.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(formatted[0], "1970-01-01 00:00:00");
        assert_eq!(p.format_time(&DateTime::from_timestamp(59, 0).unwrap()), formatted[1]);
    }

    #[test]
    fn fixed_offset_shifts_time() {
        let p = Presenter::new(chrono::FixedOffset::west_opt(6 * 3600).unwrap(), Units::Metric);
        let t = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(p.format_time(&t), "2023-11-14 16:13:20");
    }

    #[test]
    fn metric_header_uses_celsius() {
        let mut out = Vec::new();
        Presenter::new(Utc, Units::Metric).render(&response(json!({"list": []})), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Temperature C"));
    }
}
