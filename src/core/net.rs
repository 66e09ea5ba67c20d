#[cfg(feature = "test-mode")]
use std::{env, fs, path::PathBuf};

use crate::core::TrackerError;
use url::Url;

/// Send a GET and fail on any non-2xx status.
pub(crate) async fn get_checked(
    http: &reqwest::Client,
    url: Url,
) -> Result<reqwest::Response, TrackerError> {
    let resp = http.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(TrackerError::Status {
            status: resp.status().as_u16(),
            url: crate::core::error::redact_query(url.as_str()),
        });
    }
    Ok(resp)
}

/// Read the response body as text.
/// In `test-mode`, if `INSIDER_RECORD=1`, the body is also saved as `{endpoint}_{name}.{ext}`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _name: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("INSIDER_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = record_fixture(_endpoint, _name, _ext, &text)
        {
            tracing::warn!("INSIDER_RECORD: failed to write fixture for {_name}: {e}");
        }
    }

    Ok(text)
}

/// Fixture directory: `INSIDER_FIXDIR`, else `tests/fixtures` in the crate root.
#[cfg(feature = "test-mode")]
fn record_fixture(endpoint: &str, name: &str, ext: &str, body: &str) -> std::io::Result<()> {
    let dir = env::var_os("INSIDER_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"));
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{endpoint}_{name}.{ext}"));
    fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), "recorded fixture");
    Ok(())
}
