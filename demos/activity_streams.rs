//! Download heart rate and power streams for the latest activity.
//!
//! Run with: STRAVA_ACCESS_TOKEN=... cargo run --example activity_streams

use strava_rs::models::{StreamResolution, StreamType, StreamTypes};
use strava_rs::StravaClient;

#[tokio::main]
async fn main() -> strava_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = StravaClient::from_env()?;

    let latest = client.activities().list(&Default::default(), 1, 1).await?;
    let Some(activity) = latest.into_iter().next() else {
        println!("No activities yet");
        return Ok(());
    };
    println!("Latest activity: {} ({})", activity.name, activity.meta.id);

    let types = StreamTypes::new()
        .with(StreamType::Time)
        .with(StreamType::Heartrate)
        .with(StreamType::Watts);

    let streams = client
        .streams()
        .activity(activity.meta.id, &types, StreamResolution::Medium)
        .await?;

    for stream in &streams {
        let values: Vec<f64> = stream.data.iter().filter_map(|p| p.as_f64()).collect();
        let max = values.iter().copied().fold(f64::MIN, f64::max);
        let mean = values.iter().sum::<f64>() / values.len().max(1) as f64;
        println!(
            "{:<10} {:>6} points  mean {:>7.1}  max {:>7.1}",
            stream.stream_type,
            stream.data.len(),
            mean,
            max
        );
    }

    Ok(())
}
