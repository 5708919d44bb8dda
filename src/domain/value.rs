use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// MSG91 auth key.
///
/// Invariant: non-empty. The key is opaque and stored exactly as given; the `Debug` output
/// never contains it.
pub struct AuthKey(String);

impl AuthKey {
    /// Query parameter and header name used by MSG91 (`authkey`).
    pub const FIELD: &'static str = "authkey";

    /// Create a validated [`AuthKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown to recipients (`sender`).
///
/// Invariant: non-empty after trimming and at most [`SenderId::MAX_LEN`] characters.
pub struct SenderId(String);

impl SenderId {
    /// Query/body field name used by MSG91 (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Longest alphanumeric sender id a handset will display.
    pub const MAX_LEN: usize = 11;

    /// Sender id used when none is configured.
    pub const DEFAULT: &'static str = "HireAJackal";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SenderId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Invariant: non-empty. The value is sent as given, so a whitespace-only body is allowed.
pub struct MessageText(String);

impl MessageText {
    /// Field name used by MSG91 (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient mobile number as sent to MSG91 (`mobiles`).
///
/// Invariant: non-empty after trimming. No normalization is applied; parse into
/// [`PhoneNumber`] first if you want the international digits form.
pub struct MobileNumber(String);

impl MobileNumber {
    /// Query parameter name used by `sendhttp.php` (`mobiles`).
    pub const FIELD: &'static str = "mobiles";

    /// Create a validated (non-empty) mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to MSG91.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for MobileNumber {
    /// MSG91 expects the country code followed by the national number, without `+`.
    fn from(value: PhoneNumber) -> Self {
        let digits = value.e164.trim_start_matches('+').to_owned();
        Self(digits)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: MobileNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Destination country code (`country`).
///
/// MSG91 treats `0` as international, `1` as USA and `91` as India; other codes are passed
/// through unchanged.
pub struct CountryCode(u16);

impl CountryCode {
    /// Field name used by MSG91 (`country`).
    pub const FIELD: &'static str = "country";

    pub const INTERNATIONAL: Self = Self(0);
    pub const USA: Self = Self(1);
    pub const INDIA: Self = Self(91);

    pub fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::INDIA
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message route (`route`): promotional (`1`) or transactional (`4`).
pub enum Route {
    Promotional,
    #[default]
    Transactional,
}

impl Route {
    /// Field name used by MSG91 (`route`).
    pub const FIELD: &'static str = "route";

    /// Numeric route id expected on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Promotional => 1,
            Self::Transactional => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Response body format requested from MSG91 (`response`).
pub enum ResponseFormat {
    #[default]
    Json,
    Text,
    Xml,
}

impl ResponseFormat {
    /// Field name used by MSG91 (`response`).
    pub const FIELD: &'static str = "response";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Xml => "xml",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled send time (`schtime`).
///
/// MSG91 accepts `Y-m-d h:i:s`, `Y/m/d h:i:s` or a unix timestamp. The formatted variant is
/// forwarded verbatim; this crate does not parse it.
pub enum ScheduleTime {
    Formatted(String),
    Unix(u64),
}

impl ScheduleTime {
    /// Field name used by MSG91 (`schtime`).
    pub const FIELD: &'static str = "schtime";

    /// Create a formatted schedule time; rejects blank input.
    pub fn formatted(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self::Formatted(trimmed.to_owned()))
    }

    /// Value as it appears in the query string.
    pub fn to_param(&self) -> String {
        match self {
            Self::Formatted(value) => value.clone(),
            Self::Unix(timestamp) => timestamp.to_string(),
        }
    }
}
