//! Unique object paths for uploaded files.

use jiff::Timestamp;
use rand::{Rng, distributions::Alphanumeric};

const SUFFIX_LEN: usize = 10;
const FALLBACK_EXTENSION: &str = "bin";

/// Build a collision-resistant object path of the form
/// `{prefix}/{unix_millis}-{suffix}.{ext}`.
#[must_use]
pub fn unique_object_path(prefix: &str, file_name: &str, content_type: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();

    object_path(
        prefix,
        Timestamp::now().as_millisecond(),
        &suffix,
        &extension_for(file_name, content_type),
    )
}

fn object_path(prefix: &str, millis: i64, suffix: &str, extension: &str) -> String {
    let prefix = prefix.trim_matches('/');

    if prefix.is_empty() {
        format!("{millis}-{suffix}.{extension}")
    } else {
        format!("{prefix}/{millis}-{suffix}.{extension}")
    }
}

/// Extension for an uploaded file: the file name's own extension, else the
/// MIME subtype (`image/svg+xml` gives `svg`), else `bin`.
#[must_use]
pub fn extension_for(file_name: &str, content_type: &str) -> String {
    let from_name = file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .filter(|extension| is_clean_extension(extension));

    let from_type = || {
        content_type
            .split_once('/')
            .map(|(_, subtype)| subtype)
            .and_then(|subtype| subtype.split([';', '+']).next())
            .map(str::trim)
            .filter(|subtype| is_clean_extension(subtype))
    };

    from_name
        .or_else(from_type)
        .unwrap_or(FALLBACK_EXTENSION)
        .to_ascii_lowercase()
}

fn is_clean_extension(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric())
}
