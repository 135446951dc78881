//! Generate CALCULATORS.md from the calculator registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-calculators
//! ```
//!
//! The generated file is written to `creator_core/CALCULATORS.md`.

use std::fs;
use std::path::Path;

use creator_core::calculations::generate_calculators_markdown;

fn main() {
    println!("Generating CALCULATORS.md...");

    let markdown = generate_calculators_markdown();

    // Relative to workspace root
    let output_path = Path::new("creator_core/CALCULATORS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
