//! Retrieve one address record.
//!
//! Run with: ADDRESSCOMPLETE_API_KEY=... cargo run --example retrieve -- "CA|CP|ENG|3X1-R2J"

use addresscomplete::prelude::*;

#[tokio::main]
async fn main() -> addresscomplete::error::Result<()> {
    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "CA|CP|ENG|3X1-R2J".to_string());

    let client = AddressCompleteClient::from_env()?;

    match client.retrieve_details(&id).await {
        Ok(details) => println!("{details:#}"),
        Err(AddressCompleteError::Service { error, details, .. }) => {
            eprintln!("AddressComplete error {}: {error}", details.code);
            if let Some(resolution) = details.resolution {
                eprintln!("  {resolution}");
            }
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
