//! Summarize this week's rides and runs.
//!
//! Run with: STRAVA_ACCESS_TOKEN=... cargo run --example weekly_progress

use strava_rs::StravaClient;

#[tokio::main]
async fn main() -> strava_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = StravaClient::from_env()?;

    let week = client.activities().weekly_progress().await?;
    println!("=== Week starting {} ===", week.start.format("%Y-%m-%d"));
    println!("Rides:  {:>3}  {:>8.1} km", week.rides.len(), week.ride_distance / 1000.0);
    println!("Runs:   {:>3}  {:>8.1} km", week.runs.len(), week.run_distance / 1000.0);
    println!("Other:  {:>3}", week.other_activities.len());
    println!("Moving: {:>8.1} h", week.total_time.as_secs_f64() / 3600.0);
    println!();

    let year = client.activities().summary_this_year().await?;
    println!("=== Year to date ===");
    println!("Activities: {}", year.activity_count());
    println!("Ride km:    {:.1}", year.ride_distance / 1000.0);
    println!("Run km:     {:.1}", year.run_distance / 1000.0);

    Ok(())
}
