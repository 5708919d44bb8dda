//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BulkEntry, EmptyFieldPolicy, Recipient, RequestConfig, bulk_entries_from_json};
pub use response::{ProviderReply, ReplyKind, Response};
pub use validation::ValidationError;
pub use value::{
    AuthKey, CountryCode, MessageText, MobileNumber, PhoneNumber, ResponseFormat, Route,
    ScheduleTime, SenderId,
};
