//! The same gather pattern, expressed at `.await` boundaries.
//!
//! Run with: `cargo run --example async_gather --features async`

use callback_rail::async_ext::FutureCallbackExt;
use callback_rail::prelude::*;

async fn fetch_display_name() -> Result<String, &'static str> {
    Ok("Ada Lovelace".to_string())
}

async fn fetch_car() -> Result<Vec<String>, &'static str> {
    Ok(vec!["volvo".to_string(), "blue".to_string()])
}

async fn record_visit() -> Result<(), &'static str> {
    Err("audit log unavailable")
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let profile: Accumulator<String> = Accumulator::new();

    let profile = fetch_display_name()
        .augment_into(profile, "display_name")
        .await
        .expect("display name source cannot fail here");

    let profile = fetch_car()
        .augment_bulk_into(profile, mappings![0 => "make", 1 => "colour"])
        .await
        .expect("car source cannot fail here");

    // The audit write fails; it is reported and swallowed, and we keep the
    // accumulator we already have.
    let finished = record_visit().passthrough_into(profile.clone()).await;
    assert!(finished.is_none());

    println!("final profile: {profile:?}");
}
