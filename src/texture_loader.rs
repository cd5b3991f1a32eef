use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Context, Result};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, info, warn};

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"),
        None => false,
    }
}

/// Loads every sprite image of `dir_path`. Images that fail to load are
/// skipped; an empty result is an error.
pub fn load_sprite_pool(rl: &mut RaylibHandle, thread: &RaylibThread, dir_path: &Path) -> Result<Vec<Texture2D>> {
    let mut textures = Vec::new();
    for path in load_sorted_image_paths(dir_path)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("Failed to load asset {}: {:#}", path.display(), e),
        }
    }
    if textures.is_empty() {
        bail!("No sprite image could be loaded from {}", dir_path.display());
    }
    info!(count = textures.len(), dir = %dir_path.display(), "loaded sprite images");
    Ok(textures)
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes).unwrap_or_else(|e| {
            debug!("No EXIF orientation for {}: {}", image_path.display(), e);
            1
        })
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to decode image {}: {}", image_path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(orientation, "rotated {}", image_path.display());
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}

fn exif_orientation(file_bytes: &[u8]) -> Result<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(file_bytes))?;
    let field = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .context("no orientation tag")?;
    match &field.value {
        Value::Short(values) if !values.is_empty() => Ok(values[0]),
        _ => bail!("unexpected orientation value"),
    }
}
