//! Accumulator command

use anyhow::Result;
use clap::Args;
use drills_core::calc::Calc;
use log::info;

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Starting total
    #[arg(short, long, default_value_t = 0.0)]
    pub start: f64,
}

pub fn handle(args: CalcArgs) -> Result<()> {
    let mut c = Calc::with_total(args.start);
    c.add(3.2).multiply(2.5).subtract(5.0).divide(2.0);

    info!(
        "sequence: (({} + 3.2) * 2.5 - 5) / 2",
        args.start
    );
    println!("🧮 Total: {}", c.total());

    Ok(())
}
