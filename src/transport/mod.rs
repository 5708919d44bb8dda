//! Transport layer: wire-format details (query strings, JSON bodies, response decoding).

mod bulk;
mod endpoint;
mod query;
mod reply;
mod response;
mod settings;

pub use bulk::encode_bulk_body;
pub use endpoint::build_url;
pub use query::encode_query;
pub use response::normalize_response;
