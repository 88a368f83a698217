use js_sys::{Date, Object, Reflect};
use wasm_bindgen::JsValue;

use common::model::card::ContactInfo;

/// Contact fields in display order with their labels.
const CONTACT_LABELS: [(&str, &str); 11] = [
    ("email", "Email"),
    ("phone", "Teléfono"),
    ("whatsapp", "WhatsApp"),
    ("website", "Sitio web"),
    ("linkedin", "LinkedIn"),
    ("twitter", "Twitter"),
    ("instagram", "Instagram"),
    ("facebook", "Facebook"),
    ("github", "GitHub"),
    ("youtube", "YouTube"),
    ("tiktok", "TikTok"),
];

/// Non-blank contact entries as `(label, value)`.
pub fn contact_entries(contact: &ContactInfo) -> Vec<(&'static str, &str)> {
    CONTACT_LABELS
        .iter()
        .filter_map(|&(key, label)| {
            contact
                .get(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| (label, value))
        })
        .collect()
}

/// Formats an ISO-8601 timestamp as a long Spanish date, e.g.
/// "15 de marzo de 2024, 10:30".
pub fn format_long_date(iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.trim().is_empty()) else {
        return "No disponible".to_string();
    };

    let date = Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }

    let options = Object::new();
    for (key, value) in [
        ("year", "numeric"),
        ("month", "long"),
        ("day", "numeric"),
        ("hour", "2-digit"),
        ("minute", "2-digit"),
    ] {
        let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    date.to_locale_string("es-ES", &options).into()
}
