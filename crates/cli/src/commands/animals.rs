//! Receiver-semantics command

use anyhow::Result;
use drills_core::animals::{self, Dog};

pub fn handle() -> Result<()> {
    let d = Dog::new("Stamat");

    // No sugar coating
    println!("🐶 {}", Dog::greet(&d));

    // Sugar coating
    println!("🐶 {}", d.greet());

    println!("Original dog: {:?}", d);

    let renamed = animals::rename(d.clone(), "Pesho");
    println!("Renamed the copy:     {:?}", renamed);
    println!("Original after copy:  {:?}", d);

    let mut d = d;
    animals::rename_in_place(&mut d, "Vihren");
    println!("Original after ref:   {:?}", d);

    Ok(())
}
