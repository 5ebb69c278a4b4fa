//! Plain-text rendering of the session's derived views.

use dashboard_core::WeatherSession;
use dashboard_core::icons::icon_name;

pub fn render(session: &WeatherSession) {
    if let Some(info) = session.location_info() {
        let mut line = info.name.clone();
        for part in [&info.region, &info.country] {
            if !part.is_empty() {
                line.push_str(", ");
                line.push_str(part);
            }
        }
        if let Some(localtime) = &info.localtime {
            line.push_str(&format!("  (local time {localtime})"));
        }
        println!("{line}");
    } else {
        println!("{}", session.selected_location());
    }

    let condition = session.current_condition().unwrap_or("no data");
    let icon = session.current_condition_code().map(icon_name).unwrap_or("sunny");
    println!("Currently {}°C, {condition} [{icon}]", session.current_temperature());

    let hourly = session.hourly_forecast();
    if !hourly.is_empty() {
        println!();
        println!("Next hours:");
        for slot in &hourly {
            println!(
                "  {:<8} {:>4}°C  {} [{}]",
                slot.label,
                slot.temperature_c,
                slot.condition_text,
                icon_name(slot.condition_code),
            );
        }
    }

    let daily = session.daily_forecast();
    if !daily.is_empty() {
        println!();
        println!("Outlook:");
        for slot in &daily {
            println!(
                "  {:<10} {:>4}°C  {} [{}]  ({})",
                slot.label,
                slot.temperature_c,
                slot.condition_text,
                icon_name(slot.condition_code),
                slot.date,
            );
        }
    }
}
