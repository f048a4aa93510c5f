//! ogcard: social preview card renderer
//!
//! Renders a single static 1200x630 social card from a declarative styled-box
//! tree plus dynamically resolved fonts, then persists the PNG to a fixed
//! destination path. One linear pass per invocation: resolve fonts, build the
//! tree, produce a vector document, rasterize, write.
//!
//! # Example
//!
//! ```no_run
//! use ogcard::CardConfig;
//!
//! # fn main() -> ogcard::Result<()> {
//! let config = CardConfig::default();
//! let artifact = ogcard::generate(&config)?;
//! println!("{} ({}x{})", artifact.path.display(), artifact.width, artifact.height);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod card;
pub mod fonts;
pub mod output;
pub mod rendering;
pub mod tree;

pub use card::CardContent;
pub use fonts::{FontSet, FontSource, ResolvedFont};
pub use output::OutputArtifact;
pub use rendering::Bitmap;
pub use tree::Node;

/// Fixed raster dimensions for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 1200, height: 630 }
    }
}

/// Configuration for one card invocation
///
/// Everything the pipeline needs is carried here explicitly; there is no
/// ambient global state. The defaults reproduce the shipped gitlogue card.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Output bitmap dimensions
    pub canvas: Canvas,
    /// Destination path for the PNG, overwritten on every run
    pub output_path: PathBuf,
    /// Font sources to resolve before rendering
    pub fonts: Vec<FontSource>,
    /// Per-fetch network timeout
    pub fetch_timeout_ms: u64,
    /// Static content of the composition
    pub content: CardContent,
}

impl Default for CardConfig {
    fn default() -> Self {
        let mono_path = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".local/share/fonts/jetbrains-mono/JetBrainsMono-Regular.ttf");
        Self {
            canvas: Canvas::default(),
            output_path: PathBuf::from("docs/assets/ogp.png"),
            fonts: vec![
                FontSource::remote(card::SERIF_DISPLAY, 700),
                FontSource::remote(card::SERIF_BODY, 400),
                FontSource::local(card::MONO, 400, mono_path),
            ],
            fetch_timeout_ms: 30_000,
            content: CardContent::gitlogue(),
        }
    }
}

/// Run the whole pipeline: resolve fonts, build the tree, render, write.
///
/// Any stage failure aborts the run; the destination file is only touched
/// after a bitmap exists.
pub fn generate(config: &CardConfig) -> Result<OutputArtifact> {
    let fonts = fonts::resolve_all(&config.fonts, config.fetch_timeout_ms)?;
    log::debug!("resolved {} font(s)", fonts.len());

    let tree = card::compose(&config.content);
    let bitmap = rendering::render_card(&tree, &fonts, config.canvas)?;
    output::write_bitmap(&bitmap, &config.output_path)
}
