//! pwgen entry point.
//!
//! Prints the generated secret on success. On failure the error is written
//! to stderr and the process exits with a nonzero status.

use pwgen::run;

fn main() -> anyhow::Result<()> {
    run()
}
