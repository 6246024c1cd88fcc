//! Startup banner.

use crate::constants::VERSION;

const BANNER: &str = r#"
  ___   ___   ___   ___   ___   ___  ___
 / __| / _ \ | __| / _ \ | _ \ / __|| __|
| (_ || (_) || _| | (_) ||   /| (_ || _|
 \___| \___/ |_|   \___/ |_|_\ \___||___|
"#;

/// Prints the ASCII banner and version line shown at the start of a run.
pub fn print() {
    println!("{}", BANNER);
    println!("goforge v{} - Go web project generator", VERSION);
    println!();
}
