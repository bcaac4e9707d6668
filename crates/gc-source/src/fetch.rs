use gc_core::error::ConvertError;

/// Fetch raw image bytes from a source identifier.
///
/// `http://` and `https://` sources go over the network; anything else
/// is read as a filesystem path. No state is retained across calls.
///
/// # Errors
/// Returns `ConvertError::ImageLoad` if the resource is unreachable,
/// including non-2xx HTTP responses.
pub fn fetch_bytes(source: &str) -> Result<Vec<u8>, ConvertError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        log::debug!("reading image file {source}");
        std::fs::read(source).map_err(|e| ConvertError::ImageLoad {
            resource: source.to_string(),
            reason: e.to_string(),
        })
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>, ConvertError> {
    log::debug!("fetching image {url}");
    let response = reqwest::blocking::get(url).map_err(|e| ConvertError::ImageLoad {
        resource: url.to_string(),
        reason: e.to_string(),
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ConvertError::ImageLoad {
            resource: url.to_string(),
            reason: format!("HTTP {status}"),
        });
    }
    let bytes = response.bytes().map_err(|e| ConvertError::ImageLoad {
        resource: url.to_string(),
        reason: e.to_string(),
    })?;
    Ok(bytes.to_vec())
}
