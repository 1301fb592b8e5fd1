//! Load probes: decide whether a source would load, and drive a cursor
//! with those answers.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use crate::cursor::{CoverCursor, CoverTarget, LoadEvent, ResolutionOutcome};
use crate::encode::{decode_uri, is_remote};
use crate::error::CoverError;

/// Answers "did this source load?" for one reference at a time.
#[allow(async_fn_in_trait)]
pub trait SourceProbe {
    async fn check(&self, source: &str) -> LoadEvent;
}

/// Resolve relative references against a directory on disk.
///
/// Remote references always fail: the filesystem can't vouch for them.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path an encoded relative reference points at.
    ///
    /// `None` for remote references and for anything that would climb out
    /// of the root.
    pub fn local_path(&self, source: &str) -> Option<PathBuf> {
        if is_remote(source) {
            return None;
        }
        let decoded = decode_uri(source);
        let relative = Path::new(
            decoded
                .strip_prefix("./")
                .or_else(|| decoded.strip_prefix('/'))
                .unwrap_or(&decoded),
        );
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl SourceProbe for FsProbe {
    async fn check(&self, source: &str) -> LoadEvent {
        match self.local_path(source) {
            Some(path) if path.is_file() => LoadEvent::Loaded,
            _ => LoadEvent::Failed,
        }
    }
}

/// Resolve references against a base URL and issue `HEAD` requests.
///
/// Non-2xx responses, transport errors and non-image content types fail.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl HttpProbe {
    pub fn new(client: reqwest::Client, base: &str) -> Result<Self, CoverError> {
        // A base without a trailing slash would drop its last segment on join.
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = reqwest::Url::parse(&normalized)
            .map_err(|e| CoverError::InvalidUrl {
                url: base.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { client, base })
    }

    /// Build a client with the timeout used for probing.
    pub fn default_client() -> Result<reqwest::Client, CoverError> {
        Ok(reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?)
    }

    /// URL a candidate is requested from.
    ///
    /// A `#` in a relative candidate is part of the file name, not a
    /// fragment, so it is escaped before joining.
    pub fn absolute_url(&self, source: &str) -> Option<reqwest::Url> {
        if is_remote(source) {
            reqwest::Url::parse(source).ok()
        } else {
            self.base.join(&source.replace('#', "%23")).ok()
        }
    }
}

impl SourceProbe for HttpProbe {
    async fn check(&self, source: &str) -> LoadEvent {
        let Some(url) = self.absolute_url(source) else {
            return LoadEvent::Failed;
        };
        match self.client.head(url).send().await {
            Ok(resp) if resp.status().is_success() => {
                let is_image = resp
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_none_or(|ct| ct.starts_with("image/"));
                if is_image {
                    LoadEvent::Loaded
                } else {
                    LoadEvent::Failed
                }
            }
            Ok(resp) => {
                log::debug!("[cover http] {} -> {}", source, resp.status());
                LoadEvent::Failed
            }
            Err(e) => {
                log::debug!("[cover http] {} -> {}", source, e);
                LoadEvent::Failed
            }
        }
    }
}

/// Either probe, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Probe {
    Fs(FsProbe),
    Http(HttpProbe),
}

impl std::fmt::Display for Probe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fs(p) => write!(f, "files under {}", p.root().display()),
            Self::Http(p) => write!(f, "HTTP against {}", p.base),
        }
    }
}

impl SourceProbe for Probe {
    async fn check(&self, source: &str) -> LoadEvent {
        match self {
            Self::Fs(p) => p.check(source).await,
            Self::Http(p) => p.check(source).await,
        }
    }
}

/// Drive one cursor to completion using `probe` as the load signal.
pub async fn resolve_cover<T, P>(
    mut cursor: CoverCursor,
    target: &mut T,
    probe: &P,
) -> ResolutionOutcome
where
    T: CoverTarget,
    P: SourceProbe,
{
    cursor.start(target);
    loop {
        if let Some(outcome) = cursor.outcome() {
            return outcome;
        }
        let event = match cursor.current() {
            Some(source) => probe.check(source).await,
            None => LoadEvent::Failed,
        };
        cursor.on_event(event, target);
    }
}
