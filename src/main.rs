use std::path::Path;

use porticon::bundle::convert_to_icns;
use porticon::export::write_icon_set;
use porticon::logger::log_error;

const OUT_DIR: &str = "Resources";

fn main() {
    println!("Creating PortList app icon...");

    let out_dir = Path::new(OUT_DIR);
    match write_icon_set(out_dir) {
        Ok(base) => {
            // Conversion is best effort and never changes the exit status.
            convert_to_icns(&base, &out_dir.join("AppIcon.icns"));
            println!("Icon creation complete");
        }
        Err(e) => {
            log_error("icon rendering failed", &e);
            println!("Icon creation failed: {}", e);
            std::process::exit(1);
        }
    }
}
