//! Thai display strings and the weather description table

/// OpenWeatherMap description → Thai. Lookups are exact.
pub const DESCRIPTIONS: &[(&str, &str)] = &[
    ("clear sky", "ท้องฟ้าแจ่มใส"),
    ("few clouds", "เมฆบางส่วน"),
    ("scattered clouds", "เมฆกระจาย"),
    ("broken clouds", "เมฆปกคลุมบางส่วน"),
    ("shower rain", "ฝนตกหนัก"),
    ("overcast clouds", "เมฆครึ้ม"),
    ("rain", "ฝนตก"),
    ("thunderstorm", "พายุฝนฟ้าคะนอง"),
    ("snow", "หิมะตก"),
    ("mist", "หมอก"),
];

/// Translate a raw description, passing unmapped phrases through unchanged.
pub fn translate_description(raw: &str) -> String {
    DESCRIPTIONS
        .iter()
        .find(|(en, _)| *en == raw)
        .map(|(_, th)| (*th).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub const NOT_FOUND: &str = "ไม่พบข้อมูลอากาศของเมืองนี้";

pub const TITLE: &str = "Weather App";
pub const CITIES: &str = "เมือง";
pub const SEARCH_PLACEHOLDER: &str = "ค้นหาเมือง";
pub const SEARCH: &str = "ค้นหา";
pub const DEFAULTS_HEADING: &str = "ข้อมูลอากาศเมือง";
pub const TEMPERATURE: &str = "อุณหภูมิ";
pub const HUMIDITY: &str = "ความชื้น";
pub const CONDITION: &str = "สภาพอากาศ";
pub const LOADING: &str = "Loading...";
