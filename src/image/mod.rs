//! Slide deck and lazy image loading
//!
//! Slides are decoded on demand rather than at startup: after every
//! transition the update loop requests the active slide and its two
//! neighbors (see `update::carousel`), and decoded pixels come back as
//! `AppMsg::SlideLoaded` messages. Undecoded slides render as a
//! placeholder fill.

use std::path::{Path, PathBuf};

/// Decoded RGBA pixel data for one slide
#[derive(Clone)]
pub struct DecodedImage {
    /// RGBA pixels, 4 bytes per pixel
    pub pixels: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Loading state of one slide's image
#[derive(Debug, Clone, Default)]
pub enum SlideImage {
    /// Not requested or not yet decoded
    #[default]
    Pending,
    /// Decoded and ready to blit
    Loaded(DecodedImage),
    /// Decode failed; the slide renders as a placeholder permanently
    Failed(String),
}

impl SlideImage {
    pub fn is_pending(&self) -> bool {
        matches!(self, SlideImage::Pending)
    }
}

/// One slide: a source path plus its (lazily decoded) image
#[derive(Debug, Clone)]
pub struct SlideSlot {
    pub path: PathBuf,
    pub image: SlideImage,
}

impl SlideSlot {
    /// File name for the caption / window title
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// The fixed, ordered set of slides for this run.
///
/// Created once at startup from the CLI paths; slides are never added or
/// removed afterwards.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slots: Vec<SlideSlot>,
}

impl SlideDeck {
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            slots: paths
                .into_iter()
                .map(|path| SlideSlot {
                    path,
                    image: SlideImage::Pending,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideSlot> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SlideSlot> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[SlideSlot] {
        &self.slots
    }

    /// Slides that should be decoded for the given active index: the
    /// active slide plus one neighbor in each direction (wrapping), in
    /// load-priority order, skipping anything already loaded or failed.
    pub fn preload_targets(&self, current: usize) -> Vec<usize> {
        let count = self.slots.len();
        if count == 0 {
            return Vec::new();
        }
        let next = (current + 1) % count;
        let prev = (current + count - 1) % count;

        let mut targets = Vec::with_capacity(3);
        for index in [current, next, prev] {
            if !targets.contains(&index) && self.slots[index].image.is_pending() {
                targets.push(index);
            }
        }
        targets
    }
}

/// Decode an image file into RGBA pixels.
///
/// Runs on a worker thread spawned by the runtime; the result is cached
/// in the deck, so each file is decoded at most once.
pub fn load_slide(path: &Path) -> Result<DecodedImage, String> {
    let img = image::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(
        "Decoded {} ({}x{}, {} bytes)",
        path.display(),
        width,
        height,
        rgba.len()
    );
    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}
