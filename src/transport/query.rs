use url::form_urlencoded;

use crate::domain::{
    CountryCode, EmptyFieldPolicy, MessageText, MobileNumber, RequestConfig, ResponseFormat,
    Route, ScheduleTime, SenderId,
};

const AFTER_MINUTES_FIELD: &str = "afterminutes";
const ENCRYPT_FIELD: &str = "encrypt";

/// Serialize the request config (plus optional recipient fields) as a form-encoded query.
///
/// Field order is fixed: `country, sender, route, afterminutes, schtime, response, encrypt`,
/// then `mobiles` and `message` when given. Spaces encode as `+`.
pub fn encode_query(
    config: &RequestConfig,
    mobile: Option<&MobileNumber>,
    message: Option<&MessageText>,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    query.append_pair(CountryCode::FIELD, &config.country.value().to_string());
    query.append_pair(SenderId::FIELD, config.sender.as_str());
    query.append_pair(Route::FIELD, &config.route.code().to_string());
    push_optional(
        &mut query,
        config.empty_fields,
        AFTER_MINUTES_FIELD,
        config.after_minutes.map(|minutes| minutes.to_string()),
    );
    push_optional(
        &mut query,
        config.empty_fields,
        ScheduleTime::FIELD,
        config.schedule_time.as_ref().map(ScheduleTime::to_param),
    );
    query.append_pair(ResponseFormat::FIELD, config.response_format.as_str());
    push_optional(
        &mut query,
        config.empty_fields,
        ENCRYPT_FIELD,
        config
            .encrypt
            .map(|encrypt| if encrypt { "1" } else { "0" }.to_owned()),
    );

    if let Some(mobile) = mobile {
        query.append_pair(MobileNumber::FIELD, mobile.raw());
    }
    if let Some(message) = message {
        query.append_pair(MessageText::FIELD, message.as_str());
    }

    query.finish()
}

fn push_optional(
    query: &mut form_urlencoded::Serializer<'_, String>,
    policy: EmptyFieldPolicy,
    key: &str,
    value: Option<String>,
) {
    match (value, policy) {
        (Some(value), _) => {
            query.append_pair(key, &value);
        }
        (None, EmptyFieldPolicy::EmitEmpty) => {
            query.append_pair(key, "");
        }
        (None, EmptyFieldPolicy::Omit) => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{CountryCode, Route, ScheduleTime, SenderId};

    use super::*;

    #[test]
    fn default_config_emits_empty_optional_fields() {
        let query = encode_query(&RequestConfig::default(), None, None);
        assert_eq!(
            query,
            "country=91&sender=HireAJackal&route=4&afterminutes=&schtime=&response=json&encrypt="
        );
    }

    #[test]
    fn omit_policy_drops_absent_fields() {
        let config = RequestConfig {
            empty_fields: EmptyFieldPolicy::Omit,
            ..Default::default()
        };
        let query = encode_query(&config, None, None);
        assert_eq!(query, "country=91&sender=HireAJackal&route=4&response=json");
    }

    #[test]
    fn recipient_fields_are_appended_and_encoded() {
        let mobile = MobileNumber::new("9990001111").unwrap();
        let message = MessageText::new("hello there & bye").unwrap();
        let config = RequestConfig {
            country: CountryCode::USA,
            sender: SenderId::new("ACME").unwrap(),
            route: Route::Promotional,
            after_minutes: Some(15),
            schedule_time: Some(ScheduleTime::formatted("2020/01/01 10:10:00").unwrap()),
            encrypt: Some(true),
            ..Default::default()
        };

        let query = encode_query(&config, Some(&mobile), Some(&message));
        assert_eq!(
            query,
            "country=1&sender=ACME&route=1&afterminutes=15&schtime=2020%2F01%2F01+10%3A10%3A00\
             &response=json&encrypt=1&mobiles=9990001111&message=hello+there+%26+bye"
        );
    }

    #[test]
    fn encoding_is_deterministic() {
        let config = RequestConfig {
            schedule_time: Some(ScheduleTime::Unix(1_577_873_400)),
            ..Default::default()
        };
        assert_eq!(
            encode_query(&config, None, None),
            encode_query(&config, None, None)
        );
    }
}
