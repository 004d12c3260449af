//! Gather several "asynchronous" lookups into one profile object.
//!
//! The sources here are plain functions that invoke their callback
//! immediately; in real code they would be I/O completions delivered by an
//! event loop.

use callback_rail::prelude::*;

fn fetch_display_name<C>(mut deliver: C)
where
    C: Continuation<String, &'static str>,
{
    deliver.resume(Ok("Ada Lovelace".to_string()));
}

fn fetch_roles<C>(mut deliver: C)
where
    C: Continuation<Vec<String>, &'static str>,
{
    deliver.resume(Ok(vec!["admin".to_string(), "author".to_string()]));
}

fn record_visit<C>(mut deliver: C)
where
    C: Continuation<(), &'static str>,
{
    // Fails, so the passthrough below reports and swallows it.
    deliver.resume(Err("audit log unavailable"));
}

fn main() {
    let profile: Accumulator<String> = Accumulator::new();
    profile.set("user_id", "42".to_string());

    fetch_display_name(augment(
        profile.clone(),
        "display_name",
        |outcome: Result<Accumulator<String>, &str>| {
            println!("after display name: {:?}", outcome.unwrap().keys());
        },
    ));

    fetch_roles(augment_bulk(
        profile.clone(),
        mappings![0 => "primary_role", 1 => "secondary_role"],
        |outcome: Result<Accumulator<String>, &str>| {
            println!("after roles: {:?}", outcome.unwrap().keys());
        },
    ));

    record_visit(passthrough(
        profile.clone(),
        |_: Result<Accumulator<String>, &str>| {
            println!("this line never prints: the audit error stops upstream");
        },
    ));

    println!("final profile: {profile:?}");
}
