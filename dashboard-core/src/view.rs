//! Read-only views derived from the current forecast payload.
//!
//! These are pure functions recomputed on every access. The session
//! exposes them as accessors so the views can never drift out of sync
//! with the payload they were derived from.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::model::{ForecastPayload, HourEntry};

/// The hourly strip shows at most this many entries.
pub const HOURLY_WINDOW: usize = 5;

/// The daily outlook shows at most this many entries.
pub const DAILY_WINDOW: usize = 3;

const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One display-ready entry of the hourly strip.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySlot {
    /// "Now" for the first entry, otherwise an hour-only clock time like "3 PM".
    pub label: String,
    pub temperature_c: i32,
    pub condition_text: String,
    pub condition_code: i32,
}

/// One display-ready entry of the daily outlook.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySlot {
    /// "Today", "Tomorrow", or a weekday name.
    pub label: String,
    pub condition_text: String,
    /// Rounded maximum for the day.
    pub temperature_c: i32,
    pub condition_code: i32,
    /// Raw date string from the payload.
    pub date: String,
}

/// Upcoming hours for the payload's location, anchored to the location's
/// own local time rather than the viewer's clock.
///
/// Hours are taken from the first forecast day starting at the current
/// hour, topped up from the second day, and capped at [`HOURLY_WINDOW`].
pub fn hourly_forecast(payload: &ForecastPayload) -> Vec<HourlySlot> {
    let Some(localtime) = payload.location.localtime.as_deref() else {
        return Vec::new();
    };
    let Ok(local) = NaiveDateTime::parse_from_str(localtime, LOCALTIME_FORMAT) else {
        return Vec::new();
    };
    let anchor = local.hour();

    let days = &payload.forecast.forecastday;
    let mut upcoming: Vec<&HourEntry> = days
        .first()
        .map(|today| {
            today
                .hour
                .iter()
                .filter(|h| entry_hour(h).is_some_and(|hour| hour >= anchor))
                .take(HOURLY_WINDOW)
                .collect()
        })
        .unwrap_or_default();

    if upcoming.len() < HOURLY_WINDOW {
        if let Some(tomorrow) = days.get(1) {
            upcoming.extend(tomorrow.hour.iter().take(HOURLY_WINDOW - upcoming.len()));
        }
    }

    upcoming
        .into_iter()
        .enumerate()
        .map(|(index, entry)| HourlySlot {
            label: if index == 0 { "Now".to_string() } else { slot_label(entry) },
            temperature_c: round(entry.temp_c),
            condition_text: entry.condition.text.clone(),
            condition_code: entry.condition.code,
        })
        .collect()
}

/// The first [`DAILY_WINDOW`] days of the forecast, labeled
/// "Today" / "Tomorrow" / weekday name.
pub fn daily_forecast(payload: &ForecastPayload) -> Vec<DailySlot> {
    payload
        .forecast
        .forecastday
        .iter()
        .take(DAILY_WINDOW)
        .enumerate()
        .map(|(index, day)| DailySlot {
            label: match index {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => weekday_label(&day.date),
            },
            condition_text: day.day.condition.text.clone(),
            temperature_c: round(day.day.maxtemp_c),
            condition_code: day.day.condition.code,
            date: day.date.clone(),
        })
        .collect()
}

pub(crate) fn round(temp_c: f64) -> i32 {
    temp_c.round() as i32
}

fn entry_hour(entry: &HourEntry) -> Option<u32> {
    NaiveDateTime::parse_from_str(&entry.time, LOCALTIME_FORMAT)
        .ok()
        .map(|dt| dt.hour())
}

fn slot_label(entry: &HourEntry) -> String {
    match entry_hour(entry) {
        Some(hour) => hour_label(hour),
        // Unparseable timestamp; show it as-is rather than dropping the slot.
        None => entry.time.clone(),
    }
}

/// 12-hour clock label without minutes, e.g. 15 -> "3 PM".
fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12} {suffix}")
}

fn weekday_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(d) => d.format("%A").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Condition, CurrentConditions, DaySummary, Forecast, ForecastDay, LocationInfo,
    };

    fn condition(code: i32) -> Condition {
        Condition { text: "Sunny".into(), code }
    }

    fn hour_entry(time: &str, temp_c: f64) -> HourEntry {
        HourEntry { time: time.into(), temp_c, condition: condition(1000) }
    }

    fn day(date: &str, maxtemp_c: f64, hours: Vec<HourEntry>) -> ForecastDay {
        ForecastDay {
            date: date.into(),
            day: DaySummary { maxtemp_c, mintemp_c: 10.0, condition: condition(1003) },
            hour: hours,
        }
    }

    fn payload(localtime: Option<&str>, days: Vec<ForecastDay>) -> ForecastPayload {
        ForecastPayload {
            location: LocationInfo {
                name: "Denver".into(),
                region: "Colorado".into(),
                country: "United States".into(),
                localtime: localtime.map(str::to_string),
            },
            current: CurrentConditions { temp_c: Some(20.0), condition: condition(1000) },
            forecast: Forecast { forecastday: days },
        }
    }

    fn full_day(date: &str) -> ForecastDay {
        let hours =
            (0..24).map(|h| hour_entry(&format!("{date} {h:02}:00"), 15.0 + h as f64)).collect();
        day(date, 25.0, hours)
    }

    #[test]
    fn hourly_empty_without_payload_localtime() {
        let p = payload(None, vec![full_day("2026-08-26")]);
        assert!(hourly_forecast(&p).is_empty());

        let p = payload(Some("not a timestamp"), vec![full_day("2026-08-26")]);
        assert!(hourly_forecast(&p).is_empty());
    }

    #[test]
    fn hourly_window_starts_at_location_hour() {
        let p = payload(Some("2026-08-26 14:30"), vec![full_day("2026-08-26")]);
        let slots = hourly_forecast(&p);

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].label, "Now");
        // 14:00 is the first hour >= the anchor; labels continue from 15:00.
        assert_eq!(slots[0].temperature_c, 29);
        assert_eq!(slots[1].label, "3 PM");
        assert_eq!(slots[4].label, "6 PM");
    }

    #[test]
    fn hourly_tops_up_from_second_day() {
        let today = day(
            "2026-08-26",
            25.0,
            vec![hour_entry("2026-08-26 22:00", 18.0), hour_entry("2026-08-26 23:00", 17.0)],
        );
        let p = payload(Some("2026-08-26 22:10"), vec![today, full_day("2026-08-27")]);
        let slots = hourly_forecast(&p);

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].label, "Now");
        assert_eq!(slots[1].label, "11 PM");
        // Tomorrow's entries come from the front of its list.
        assert_eq!(slots[2].label, "12 AM");
        assert_eq!(slots[3].label, "1 AM");
        assert_eq!(slots[4].label, "2 AM");
    }

    #[test]
    fn hourly_shorter_when_data_runs_out() {
        let today = day("2026-08-26", 25.0, vec![hour_entry("2026-08-26 23:00", 17.0)]);
        let p = payload(Some("2026-08-26 23:00"), vec![today]);
        let slots = hourly_forecast(&p);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].label, "Now");
    }

    #[test]
    fn hourly_never_exceeds_window() {
        let p = payload(Some("2026-08-26 00:00"), vec![full_day("2026-08-26")]);
        assert_eq!(hourly_forecast(&p).len(), HOURLY_WINDOW);
    }

    #[test]
    fn hourly_first_label_is_now_even_late_in_the_day() {
        let p = payload(Some("2026-08-26 23:59"), vec![full_day("2026-08-26")]);
        let slots = hourly_forecast(&p);
        assert_eq!(slots[0].label, "Now");
    }

    #[test]
    fn hourly_rounds_temperatures() {
        let today = day(
            "2026-08-26",
            25.0,
            vec![hour_entry("2026-08-26 10:00", 22.4), hour_entry("2026-08-26 11:00", 22.5)],
        );
        let p = payload(Some("2026-08-26 10:00"), vec![today]);
        let slots = hourly_forecast(&p);

        assert_eq!(slots[0].temperature_c, 22);
        assert_eq!(slots[1].temperature_c, 23);
    }

    #[test]
    fn noon_and_midnight_labels() {
        let today = day(
            "2026-08-26",
            25.0,
            vec![
                hour_entry("2026-08-26 00:00", 10.0),
                hour_entry("2026-08-26 12:00", 20.0),
                hour_entry("2026-08-26 13:00", 21.0),
            ],
        );
        let p = payload(Some("2026-08-26 00:00"), vec![today]);
        let slots = hourly_forecast(&p);

        assert_eq!(slots[0].label, "Now"); // the 12 AM entry
        assert_eq!(slots[1].label, "12 PM");
        assert_eq!(slots[2].label, "1 PM");
    }

    #[test]
    fn daily_empty_without_days() {
        let p = payload(Some("2026-08-26 14:30"), vec![]);
        assert!(daily_forecast(&p).is_empty());
    }

    #[test]
    fn daily_labels_and_cap() {
        // 2026-08-28 is a Friday.
        let p = payload(
            Some("2026-08-26 14:30"),
            vec![
                day("2026-08-26", 27.4, vec![]),
                day("2026-08-27", 24.6, vec![]),
                day("2026-08-28", 21.0, vec![]),
                day("2026-08-29", 19.0, vec![]),
            ],
        );
        let slots = daily_forecast(&p);

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].label, "Today");
        assert_eq!(slots[1].label, "Tomorrow");
        assert_eq!(slots[2].label, "Friday");
        assert_eq!(slots[0].temperature_c, 27);
        assert_eq!(slots[1].temperature_c, 25);
        assert_eq!(slots[2].date, "2026-08-28");
    }

    #[test]
    fn daily_uses_day_summary_condition() {
        let p = payload(Some("2026-08-26 14:30"), vec![full_day("2026-08-26")]);
        let slots = daily_forecast(&p);
        // Day summary carries 1003, hours carry 1000.
        assert_eq!(slots[0].condition_code, 1003);
    }
}
