//! Fetch a segment and its complete leaderboard for one age group.
//!
//! Run with: STRAVA_ACCESS_TOKEN=... cargo run --example segment_leaderboard -- 229781

use strava_rs::api::LeaderboardQuery;
use strava_rs::models::{AgeGroup, GenderFilter, SegmentId};
use strava_rs::StravaClient;

#[tokio::main]
async fn main() -> strava_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let segment_id = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .map(SegmentId::new)
        .unwrap_or(SegmentId::new(229781));

    let client = StravaClient::from_env()?;

    let segment = client.segments().get(segment_id).await?;
    println!("=== {} ===", segment.summary.name);
    println!("Distance:   {:.0} m", segment.summary.distance);
    println!("Grade:      {:.1} %", segment.summary.average_grade);
    println!("Category:   {:?}", segment.summary.climb_category());
    println!("Entries:    {}", client.segments().entry_count(segment_id).await?);
    println!();

    let query = LeaderboardQuery::default()
        .gender(GenderFilter::All)
        .age_group(AgeGroup::From35To44);
    let board = client.segments().leaderboard(segment_id, &query).await?;

    println!("=== Age 35-44: {} entries ===", board.entries.len());
    for entry in board.entries.iter().take(10) {
        println!(
            "{:>4}. {:<28} {:>6} s",
            entry.rank, entry.athlete_name, entry.elapsed_time
        );
    }

    Ok(())
}
