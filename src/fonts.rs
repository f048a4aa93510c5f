//! Font resolution: remote stylesheet scraping and local file reads.
//!
//! A remote source costs two round trips: fetch the stylesheet for the family,
//! scan its body for the first `.ttf` asset URL, then fetch the asset itself.
//! There is no fallback substitution and no retry; any miss aborts the whole
//! render. Resolved fonts live in memory for one render pass only.

use crate::{Error, Result};
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Stylesheet endpoint used by the default remote sources
const STYLESHEET_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

/// Slant of a resolved font face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Binary glyph data for one family/weight/style combination
#[derive(Debug, Clone)]
pub struct ResolvedFont {
    pub family: String,
    pub weight: u16,
    pub style: FontStyle,
    pub data: Vec<u8>,
}

/// The set of fonts resolved for one render pass
///
/// `family + weight + style` uniquely identifies a font within the set;
/// inserting a duplicate is an error.
#[derive(Debug, Default)]
pub struct FontSet {
    fonts: Vec<ResolvedFont>,
}

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, font: ResolvedFont) -> Result<()> {
        let duplicate = self.fonts.iter().any(|f| {
            f.family == font.family && f.weight == font.weight && f.style == font.style
        });
        if duplicate {
            return Err(Error::DuplicateFont(format!(
                "{} {} {}",
                font.family,
                font.weight,
                font.style.as_str()
            )));
        }
        self.fonts.push(font);
        Ok(())
    }

    pub fn contains_family(&self, family: &str) -> bool {
        self.fonts.iter().any(|f| f.family == family)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedFont> {
        self.fonts.iter()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Where a font's binary data originates
#[derive(Debug, Clone)]
pub enum FontSource {
    /// Fetched over HTTPS via a stylesheet lookup
    Remote { family: String, weight: u16, endpoint: String },
    /// Read from a fixed filesystem path
    Local { family: String, weight: u16, path: PathBuf },
}

impl FontSource {
    pub fn remote(family: impl Into<String>, weight: u16) -> Self {
        FontSource::Remote {
            family: family.into(),
            weight,
            endpoint: STYLESHEET_ENDPOINT.to_string(),
        }
    }

    /// Remote source against a non-default endpoint. Test seam.
    pub fn remote_at(endpoint: impl Into<String>, family: impl Into<String>, weight: u16) -> Self {
        FontSource::Remote { family: family.into(), weight, endpoint: endpoint.into() }
    }

    pub fn local(family: impl Into<String>, weight: u16, path: impl Into<PathBuf>) -> Self {
        FontSource::Local { family: family.into(), weight, path: path.into() }
    }

    pub fn family(&self) -> &str {
        match self {
            FontSource::Remote { family, .. } | FontSource::Local { family, .. } => family,
        }
    }

    /// Console line announcing this resolution
    pub fn progress_label(&self) -> String {
        match self {
            FontSource::Remote { family, .. } => format!("Downloading {}...", family),
            FontSource::Local { family, .. } => format!("Loading {}...", family),
        }
    }

    /// Resolve this source into binary glyph data
    pub fn resolve(&self, client: &Client) -> Result<ResolvedFont> {
        match self {
            FontSource::Remote { family, weight, endpoint } => {
                let data = fetch_remote(client, endpoint, family, *weight)?;
                Ok(ResolvedFont {
                    family: family.clone(),
                    weight: *weight,
                    style: FontStyle::Normal,
                    data,
                })
            }
            FontSource::Local { family, weight, path } => {
                let data = std::fs::read(path).map_err(|e| {
                    Error::ResourceNotFound(format!(
                        "local font file {} for family {}: {}",
                        path.display(),
                        family,
                        e
                    ))
                })?;
                log::debug!("read {} bytes from {}", data.len(), path.display());
                Ok(ResolvedFont {
                    family: family.clone(),
                    weight: *weight,
                    style: FontStyle::Normal,
                    data,
                })
            }
        }
    }
}

/// Resolve every source, one thread per fetch.
///
/// Fetches are independent and share no mutable state; the first failure wins
/// and siblings are left to run to completion. Nothing downstream starts until
/// the whole set is in memory.
pub fn resolve_all(sources: &[FontSource], timeout_ms: u64) -> Result<FontSet> {
    let client = Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| Error::Network(format!("failed to build HTTP client: {}", e)))?;

    let mut handles = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.clone();
        let client = client.clone();
        handles.push(std::thread::spawn(move || source.resolve(&client)));
    }

    let mut set = FontSet::new();
    for handle in handles {
        let font = handle
            .join()
            .map_err(|_| Error::Network("font resolver thread panicked".to_string()))??;
        set.insert(font)?;
    }
    Ok(set)
}

/// Stylesheet request URL for a family: whitespace in the family name becomes
/// `+`, the weight rides in the `wght` axis parameter.
fn stylesheet_url(endpoint: &str, family: &str, weight: u16) -> String {
    let family_param = family.split_whitespace().collect::<Vec<_>>().join("+");
    format!("{}?family={}:wght@{}&display=swap", endpoint, family_param, weight)
}

/// First `url(...)` in the stylesheet body whose target is an http(s) URL
/// ending in `.ttf`. Plain string scan; quotes around the URL are tolerated.
fn extract_asset_url(css: &str) -> Option<&str> {
    let mut rest = css;
    while let Some(start) = rest.find("url(") {
        let tail = &rest[start + 4..];
        let end = tail.find(')')?;
        let url = tail[..end].trim().trim_matches(|c| c == '\'' || c == '"');
        if url.starts_with("http") && url.ends_with(".ttf") {
            return Some(url);
        }
        rest = &tail[end + 1..];
    }
    None
}

fn fetch_remote(client: &Client, endpoint: &str, family: &str, weight: u16) -> Result<Vec<u8>> {
    let css_url = stylesheet_url(endpoint, family, weight);
    log::debug!("fetching stylesheet {}", css_url);

    let response = client
        .get(&css_url)
        .send()
        .map_err(|e| Error::Network(format!("stylesheet fetch for {} failed: {}", family, e)))?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "stylesheet fetch for {} returned {}",
            family,
            response.status()
        )));
    }
    let css = response
        .text()
        .map_err(|e| Error::Network(format!("stylesheet body for {} unreadable: {}", family, e)))?;

    let asset_url = extract_asset_url(&css).ok_or_else(|| {
        Error::ResourceNotFound(format!("no .ttf asset in stylesheet for {}", family))
    })?;
    log::debug!("fetching font asset {}", asset_url);

    let response = client
        .get(asset_url)
        .send()
        .map_err(|e| Error::Network(format!("asset fetch for {} failed: {}", family, e)))?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "asset fetch for {} returned {}",
            family,
            response.status()
        )));
    }
    let data = response
        .bytes()
        .map_err(|e| Error::Network(format!("asset body for {} unreadable: {}", family, e)))?;
    log::debug!("downloaded {} bytes for {}", data.len(), family);
    Ok(data.to_vec())
}
