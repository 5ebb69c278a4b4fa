//! Maps WeatherAPI condition codes to icon identifiers.
//!
//! Codes per https://www.weatherapi.com/docs/weather_conditions.json.
//! First match wins; anything unrecognized falls back to "sunny".

pub fn icon_name(condition_code: i32) -> &'static str {
    match condition_code {
        0 => "tornado",
        1000 => "sunny",
        1003 => "partly-cloudy",
        1006 => "cloudy",
        1009 => "mostly-cloudy",
        // Mist and fog
        1030 | 1135 | 1147 => "clear-cloudy",
        // Rain in all its strengths, plus patchy sleet/drizzle/thunder
        // codes that double as rain in the source table
        1063 | 1066 | 1069 | 1072 | 1087 | 1150 | 1153 | 1168 | 1171 | 1180 | 1183 | 1186
        | 1189 | 1192 | 1195 | 1198 | 1201 | 1240 | 1243 | 1246 => "showers",
        // Snow, blowing snow, blizzard
        1114 | 1117 | 1210 | 1213 | 1216 | 1219 | 1222 | 1225 | 1255 | 1258 => "snow",
        1204 | 1207 | 1249 | 1252 => "sleet",
        // Ice pellets
        1237 | 1261 | 1264 => "hail",
        1273 | 1276 | 1279 | 1282 => "thunderstorms",
        _ => "sunny",
    }
}
