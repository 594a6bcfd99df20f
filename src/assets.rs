// SPDX-License-Identifier: MPL-2.0
//! Demo images embedded in the binary.
//!
//! Lookup is by logical name; a missing or undecodable asset yields `None`
//! so callers degrade to an image-less presentation instead of failing.

use image_rs::DynamicImage;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct DemoImages;

/// Loads and decodes an embedded demo image by logical name (no extension).
#[must_use]
pub fn demo_image(name: &str) -> Option<DynamicImage> {
    let file = DemoImages::get(&format!("{name}.png"))?;
    image_rs::load_from_memory(file.data.as_ref()).ok()
}
