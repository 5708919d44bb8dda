use serde::Deserialize;

use crate::domain::{
    CountryCode, EmptyFieldPolicy, RequestConfig, ResponseFormat, Route, ScheduleTime, SenderId,
    ValidationError,
};

const SETTINGS_FIELD: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsJson {
    country: Option<u16>,
    sender: Option<String>,
    route: Option<RouteJson>,
    after_minutes: Option<u32>,
    schedule_time: Option<ScheduleJson>,
    response_format: Option<ResponseFormatJson>,
    encrypt: Option<bool>,
    empty_fields: Option<EmptyFieldsJson>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RouteJson {
    Name(RouteName),
    Code(u8),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RouteName {
    Promotional,
    Transactional,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScheduleJson {
    Unix(u64),
    Formatted(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ResponseFormatJson {
    Json,
    Text,
    Xml,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum EmptyFieldsJson {
    EmitEmpty,
    Omit,
}

impl RequestConfig {
    /// Apply a settings map on top of [`RequestConfig::default`].
    ///
    /// Recognized keys: `country`, `sender`, `route` (`"promotional"`, `"transactional"`, `1`
    /// or `4`), `after_minutes`, `schedule_time` (string or unix timestamp),
    /// `response_format` (`"json"`, `"text"`, `"xml"`), `encrypt` and `empty_fields`
    /// (`"emit_empty"`, `"omit"`). Unknown keys are rejected.
    pub fn from_settings(settings: serde_json::Value) -> Result<Self, ValidationError> {
        let parsed: SettingsJson =
            serde_json::from_value(settings).map_err(|err| ValidationError::InvalidField {
                field: SETTINGS_FIELD,
                reason: err.to_string(),
            })?;

        let mut config = Self::default();
        if let Some(country) = parsed.country {
            config.country = CountryCode::new(country);
        }
        if let Some(sender) = parsed.sender {
            config.sender = SenderId::new(sender)?;
        }
        if let Some(route) = parsed.route {
            config.route = decode_route(route)?;
        }
        config.after_minutes = parsed.after_minutes;
        config.schedule_time = match parsed.schedule_time {
            Some(ScheduleJson::Unix(timestamp)) => Some(ScheduleTime::Unix(timestamp)),
            Some(ScheduleJson::Formatted(value)) => Some(ScheduleTime::formatted(value)?),
            None => None,
        };
        if let Some(format) = parsed.response_format {
            config.response_format = match format {
                ResponseFormatJson::Json => ResponseFormat::Json,
                ResponseFormatJson::Text => ResponseFormat::Text,
                ResponseFormatJson::Xml => ResponseFormat::Xml,
            };
        }
        config.encrypt = parsed.encrypt;
        if let Some(policy) = parsed.empty_fields {
            config.empty_fields = match policy {
                EmptyFieldsJson::EmitEmpty => EmptyFieldPolicy::EmitEmpty,
                EmptyFieldsJson::Omit => EmptyFieldPolicy::Omit,
            };
        }

        Ok(config)
    }
}

fn decode_route(route: RouteJson) -> Result<Route, ValidationError> {
    match route {
        RouteJson::Name(RouteName::Promotional) | RouteJson::Code(1) => Ok(Route::Promotional),
        RouteJson::Name(RouteName::Transactional) | RouteJson::Code(4) => {
            Ok(Route::Transactional)
        }
        RouteJson::Code(other) => Err(ValidationError::InvalidField {
            field: Route::FIELD,
            reason: format!("unknown route code {other}"),
        }),
    }
}
