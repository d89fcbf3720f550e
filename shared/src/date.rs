//! 时间格式化模块
//!
//! 后端以 ISO 8601 传输日期，界面统一显示为 `dd/MM/yyyy`。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DISPLAY_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// 格式化为 `dd/MM/yyyy`
#[inline]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// 格式化为 `dd/MM/yyyy HH:mm`
#[inline]
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DISPLAY_DATETIME_FORMAT).to_string()
}

/// 解析后端日期字符串
///
/// 接受 `yyyy-MM-dd`、不带时区的 ISO 时间、或 RFC 3339 时间。
/// 返回 None 如果解析失败
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// 解析后端时间字符串
///
/// 接受不带时区的 ISO 时间、RFC 3339 时间（保留其本地时刻）或纯日期（按零点）。
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

// =========================================================
// Serde 适配 (`#[serde(with = ...)]`)
// =========================================================

/// `NaiveDate` 字段：输出 `yyyy-MM-dd`，读取时接受 [`parse_date`] 支持的全部形式
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
    }
}

/// `NaiveDateTime` 字段：输出 `yyyy-MM-ddTHH:mm:ss`，读取时接受 [`parse_datetime`] 支持的形式
pub mod lenient_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid datetime: {raw}")))
    }
}

/// 可空的 `NaiveDateTime` 字段，`null` 或缺失均为 `None`
pub mod lenient_datetime_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => super::lenient_datetime::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_datetime(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid datetime: {raw}"))),
        }
    }
}
