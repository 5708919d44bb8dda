use std::io;

use msg91::{Msg91Client, ReplyKind};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = std::env::var("MSG91_AUTH_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_AUTH_KEY environment variable is required",
        )
    })?;
    let mobiles = std::env::var("MSG91_MOBILES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MSG91_MOBILES environment variable is required (comma-separated)",
        )
    })?;
    let mobiles = mobiles.split(',').map(str::trim).collect::<Vec<_>>();

    let client = Msg91Client::new(auth_key)?;
    let sms = json!([
        {"message": "First bulk message.", "phone_number": mobiles},
        {"message": "Second bulk message.", "phone_number": mobiles[0]},
    ]);

    let response = client.send_bulk_json(&sms).await?;
    match response.provider_reply() {
        Some(reply) if reply.kind == ReplyKind::Success => {
            println!("queued, request id: {:?}", reply.message);
        }
        Some(reply) => println!("provider replied: {reply:?}"),
        None => println!("unrecognized response: {response:?}"),
    }

    Ok(())
}
