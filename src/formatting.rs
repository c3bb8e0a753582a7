//! Conversión de valores crudos a texto legible para la consola.

use chrono::{DateTime, Local};
use std::ops::Range;
use std::time::SystemTime;

/// Longitud exacta de `D:YYYYMMDDHHmmSS+HH'mm'`.
const PDF_DATE_LEN: usize = 23;

/// Convierte una fecha PDF (`D:YYYYMMDDHHmmSS±HH'mm'`) a `YYYY-MM-DDTHH:mm:SS±HH:mm`.
///
/// Cualquier entrada que no siga el patrón completo se devuelve sin cambios,
/// incluidas las fechas truncadas o las que usan `Z` como zona horaria.
pub fn format_pdf_date(raw: &str) -> String {
    match split_pdf_date(raw) {
        Some(parts) => format!(
            "{}-{}-{}T{}:{}:{}{}{}:{}",
            parts.year,
            parts.month,
            parts.day,
            parts.hour,
            parts.minute,
            parts.second,
            parts.sign,
            parts.offset_hour,
            parts.offset_minute
        ),
        None => raw.to_string(),
    }
}

struct PdfDateParts<'a> {
    year: &'a str,
    month: &'a str,
    day: &'a str,
    hour: &'a str,
    minute: &'a str,
    second: &'a str,
    sign: char,
    offset_hour: &'a str,
    offset_minute: &'a str,
}

fn split_pdf_date(raw: &str) -> Option<PdfDateParts<'_>> {
    let bytes = raw.as_bytes();
    if bytes.len() != PDF_DATE_LEN || !raw.is_ascii() || !raw.starts_with("D:") {
        return None;
    }

    let sign = match bytes[16] {
        b'+' => '+',
        b'-' => '-',
        _ => return None,
    };
    if bytes[19] != b'\'' || bytes[22] != b'\'' {
        return None;
    }

    Some(PdfDateParts {
        year: digits(raw, 2..6)?,
        month: digits(raw, 6..8)?,
        day: digits(raw, 8..10)?,
        hour: digits(raw, 10..12)?,
        minute: digits(raw, 12..14)?,
        second: digits(raw, 14..16)?,
        sign,
        offset_hour: digits(raw, 17..19)?,
        offset_minute: digits(raw, 20..22)?,
    })
}

fn digits(raw: &str, range: Range<usize>) -> Option<&str> {
    let slice = &raw[range];
    slice
        .bytes()
        .all(|byte| byte.is_ascii_digit())
        .then_some(slice)
}

pub fn format_optional_time(time: Option<SystemTime>) -> String {
    match time {
        Some(value) => format_system_time(value),
        None => "No disponible".to_string(),
    }
}

pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["bytes", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit_index = 0;

    while value >= 1024.0 && unit_index < UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} bytes", bytes)
    } else {
        format!("{value:.2} {} ({} bytes)", UNITS[unit_index], bytes)
    }
}
