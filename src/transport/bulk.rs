use serde::Serialize;

use crate::domain::{BulkEntry, MobileNumber, RequestConfig};

#[derive(Debug, Serialize)]
pub struct BulkSmsBody<'a> {
    sender: &'a str,
    route: u8,
    country: u16,
    sms: Vec<BulkSmsItem<'a>>,
}

#[derive(Debug, Serialize)]
struct BulkSmsItem<'a> {
    message: &'a str,
    to: Vec<&'a str>,
}

/// Build the `api/v2/sendsms` JSON body: `{sender, route, country, sms: [{message, to}]}`.
pub fn encode_bulk_body<'a>(
    config: &'a RequestConfig,
    entries: &'a [BulkEntry],
) -> BulkSmsBody<'a> {
    BulkSmsBody {
        sender: config.sender.as_str(),
        route: config.route.code(),
        country: config.country.value(),
        sms: entries
            .iter()
            .map(|entry| BulkSmsItem {
                message: entry.message().as_str(),
                to: entry.to().iter().map(MobileNumber::raw).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{MessageText, Route, SenderId};

    use super::*;

    #[test]
    fn body_lists_every_recipient() {
        let entries = vec![
            BulkEntry::single(
                MessageText::new("hi").unwrap(),
                MobileNumber::new("111").unwrap(),
            ),
            BulkEntry::new(
                MessageText::new("yo").unwrap(),
                vec![
                    MobileNumber::new("222").unwrap(),
                    MobileNumber::new("333").unwrap(),
                ],
            )
            .unwrap(),
        ];
        let config = RequestConfig {
            sender: SenderId::new("ACME").unwrap(),
            route: Route::Promotional,
            ..Default::default()
        };

        let body = serde_json::to_value(encode_bulk_body(&config, &entries)).unwrap();
        assert_eq!(
            body,
            json!({
                "sender": "ACME",
                "route": 1,
                "country": 91,
                "sms": [
                    {"message": "hi", "to": ["111"]},
                    {"message": "yo", "to": ["222", "333"]}
                ]
            })
        );
    }
}
