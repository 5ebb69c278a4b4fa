//! Temperature-to-color bands used by the presentation layer.
//!
//! Five fixed bands: very cold (< 0°C), cold (0–10), cool (10–20),
//! warm (20–30), hot (≥ 30).

pub fn temperature_color(temp_c: Option<f64>) -> Option<&'static str> {
    let t = temp_c?;
    Some(if t < 0.0 {
        "#e4f0fe"
    } else if t < 10.0 {
        "#c3e0fb"
    } else if t < 20.0 {
        "#cdf0eb"
    } else if t < 30.0 {
        "#fff4da"
    } else {
        "#fdd4d7"
    })
}

/// Darker variant of the same bands, used for accents.
pub fn darkened_temperature_color(temp_c: Option<f64>) -> Option<&'static str> {
    let t = temp_c?;
    Some(if t < 0.0 {
        "#d9e8fc"
    } else if t < 10.0 {
        "#b8d7f8"
    } else if t < 20.0 {
        "#c0e8e0"
    } else if t < 30.0 {
        "#f8ead0"
    } else {
        "#f8c8cc"
    })
}
