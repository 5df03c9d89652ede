//! Upload an activity file and wait until it has been processed.
//!
//! Run with: STRAVA_ACCESS_TOKEN=... cargo run --example upload_activity -- ride.fit

use std::time::Duration;

use strava_rs::models::{DataFormat, UploadRequest, UploadState};
use strava_rs::StravaClient;

#[tokio::main]
async fn main() -> strava_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .expect("usage: upload_activity <file>");
    let format = DataFormat::from_file_name(&path)
        .expect("file must end in .fit, .tcx or .gpx (optionally .gz)");

    let client = StravaClient::from_env()?;

    let request = UploadRequest::new(format).with_external_id(path.clone());
    let mut status = client.uploads().upload_file(&path, &request).await?;
    println!("Upload {} accepted: {}", status.id, status.status);

    while status.state() == UploadState::Processing {
        tokio::time::sleep(Duration::from_secs(2)).await;
        status = client.uploads().check_status(status.id).await?;
        println!("  {}", status.status);
    }

    match status.state() {
        UploadState::Ready => println!("Activity created: {:?}", status.activity_id),
        _ => println!("Upload failed: {:?}", status.error),
    }

    Ok(())
}
