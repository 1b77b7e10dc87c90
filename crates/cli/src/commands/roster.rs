//! Roster tally command

use anyhow::Result;
use drills_core::roster::{self, APPEARANCES};

pub fn handle() -> Result<()> {
    let report = roster::tally(APPEARANCES);

    println!("📊 Tally for {} appearances:", APPEARANCES.len());
    println!("{}", serde_json::to_string_pretty(&report)?);

    // A mismatch propagates out of main and fails the process with the
    // formatted message
    roster::verify_expected(&report)?;

    println!("✅ SUCCESS");
    Ok(())
}
