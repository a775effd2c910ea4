use std::path::Path;
use std::process::Command;

use crate::logger::{log_command, log_error, log_line};

/// Convert the rendered base PNG into a macOS `.icns` bundle via `sips`.
///
/// Best effort only: a missing source, missing tool, or failing tool is
/// reported as a warning and never fails the run.
pub fn convert_to_icns(png: &Path, icns: &Path) -> bool {
    if !png.exists() {
        println!("{} not found, skipping ICNS conversion", png.display());
        return false;
    }

    let args = [
        "-s".to_string(),
        "format".to_string(),
        "icns".to_string(),
        png.display().to_string(),
        "--out".to_string(),
        icns.display().to_string(),
    ];
    log_command("sips", &args);

    match Command::new("sips").args(&args).output() {
        Ok(out) if out.status.success() => {
            log_line(&format!("wrote {}", icns.display()));
            println!("Created {}", icns.display());
            true
        }
        Ok(out) => {
            log_line(&format!("sips exited with {}", out.status));
            println!("Warning: could not create ICNS file (sips exited with {})", out.status);
            false
        }
        Err(e) => {
            log_error("failed to run sips", &e);
            println!("Warning: could not create ICNS file (sips not found)");
            false
        }
    }
}
