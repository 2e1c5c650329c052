//! Shared key generation for storage backends.
//!
//! Key format: `{token}.{ext}` where `token` is the unpadded URL-safe base64
//! encoding of `random_bytes` bytes from the thread-local CSPRNG.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use tubely_core::AssetKind;

/// Map a normalized media type to the file extension used in storage keys.
pub fn extension_for_media_type(media_type: &str) -> Option<&'static str> {
    match media_type {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "video/mp4" => Some("mp4"),
        _ => None,
    }
}

/// Generate a fresh storage key for an asset of `kind`.
///
/// Unknown media types fall back to the kind's default extension.
pub fn generate_asset_key(random_bytes: usize, media_type: &str, kind: AssetKind) -> String {
    let mut buf = vec![0u8; random_bytes];
    rand::rng().fill_bytes(&mut buf);
    let token = URL_SAFE_NO_PAD.encode(&buf);
    let ext = extension_for_media_type(media_type).unwrap_or_else(|| kind.default_extension());
    format!("{}.{}", token, ext)
}
