use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::IconError;
use crate::icon;
use crate::logger::log_line;

/// Edge lengths of the resized copies written next to the base icon.
pub const ICON_SIZES: [u32; 6] = [16, 32, 64, 128, 256, 512];

pub fn base_icon_path(out_dir: &Path) -> PathBuf {
    out_dir.join("AppIcon.png")
}

pub fn sized_icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("AppIcon_{}x{}.png", size, size))
}

/// Render the badge and persist the base PNG plus one copy per entry in
/// `ICON_SIZES`. Returns the base icon path for the bundle converter.
pub fn write_icon_set(out_dir: &Path) -> Result<PathBuf, IconError> {
    fs::create_dir_all(out_dir)?;

    let data = icon::generate_icon(icon::BASE_SIZE);
    let img = RgbaImage::from_raw(data.width, data.height, data.rgba)
        .ok_or(IconError::InvalidBuffer)?;

    let base = base_icon_path(out_dir);
    img.save(&base)?;
    log_line(&format!("wrote {}", base.display()));
    println!("Created {}", base.display());

    for sz in ICON_SIZES {
        let resized = if sz == icon::BASE_SIZE {
            img.clone()
        } else {
            imageops::resize(&img, sz, sz, FilterType::Lanczos3)
        };
        resized.save(sized_icon_path(out_dir, sz))?;
    }
    log_line(&format!("wrote {} resized copies", ICON_SIZES.len()));
    println!("Created {} icon sizes", ICON_SIZES.len());

    Ok(base)
}
