//! Print the authenticated athlete's profile, gear and yearly totals.
//!
//! Run with: STRAVA_ACCESS_TOKEN=... cargo run --example athlete_profile

use strava_rs::StravaClient;

#[tokio::main]
async fn main() -> strava_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = StravaClient::from_env()?;

    // 1. Profile
    let me = client.athletes().current().await?;
    println!("=== {} ===", me.summary.full_name());
    println!("Id:         {}", me.summary.meta.id);
    println!("City:       {:?}", me.summary.city);
    println!("Country:    {:?}", me.summary.country);
    println!("Followers:  {}", me.follower_count);
    println!("Friends:    {}", me.friend_count);
    println!("Premium:    {}", me.summary.premium);
    println!();

    // 2. Gear
    println!("=== Gear ===");
    for bike in &me.bikes {
        let gear = client.gear().get(&bike.id).await?;
        println!(
            "Bike  {:<24} {:>10.1} km  ({:?} {:?})",
            gear.summary.name,
            gear.summary.distance / 1000.0,
            gear.brand_name,
            gear.model_name
        );
    }
    for shoe in &me.shoes {
        println!("Shoe  {:<24} {:>10.1} km", shoe.name, shoe.distance / 1000.0);
    }
    println!();

    // 3. Totals
    let stats = client.stats().for_athlete(me.summary.meta.id).await?;
    println!("=== This Year ===");
    println!(
        "Rides: {:>4}  {:>10.1} km",
        stats.ytd_ride_totals.count,
        stats.ytd_ride_totals.distance / 1000.0
    );
    println!(
        "Runs:  {:>4}  {:>10.1} km",
        stats.ytd_run_totals.count,
        stats.ytd_run_totals.distance / 1000.0
    );
    println!();

    let limits = client.rate_limits().status();
    println!(
        "Rate limit: {} used, {:?} left in this window",
        limits.usage.short_term,
        limits.short_term_remaining()
    );

    Ok(())
}
