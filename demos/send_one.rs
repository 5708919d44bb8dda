use std::io;

use msg91::{MessageText, MobileNumber, Msg91Client, Recipient, Response};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let auth_key = required_env("MSG91_AUTH_KEY")?;
    let mobile = required_env("MSG91_MOBILE")?;
    let message = std::env::var("MSG91_MESSAGE")
        .unwrap_or_else(|_| "Hello from the msg91 demo.".to_owned());

    let client = Msg91Client::new(auth_key)?;
    let recipient = Recipient::new(MobileNumber::new(mobile)?, MessageText::new(message)?);

    match client.send_to_one(&recipient).await? {
        Response::Structured(json) => println!("json: {json}"),
        Response::Raw(text) => println!("raw: {text}"),
    }

    Ok(())
}
