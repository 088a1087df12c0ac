use crate::error::{AppError, Result};
use crate::slides::SlideData;
use std::sync::Arc;

/// Navigation state of one mounted presentation
///
/// The deck is fixed for the lifetime of the presentation and never empty,
/// so `current_index` always lies in `[0, len)`.
#[derive(Debug, Clone)]
pub struct Presentation {
    slides: Arc<[SlideData]>,
    current_index: usize,
    is_auto_playing: bool,
}

impl Presentation {
    /// Create a presentation positioned on the first slide
    ///
    /// # Errors
    ///
    /// Returns error if the deck is empty
    pub fn new(slides: Arc<[SlideData]>, auto_play: bool) -> Result<Self> {
        if slides.is_empty() {
            return Err(AppError::EmptyDeck);
        }

        Ok(Self {
            slides,
            current_index: 0,
            is_auto_playing: auto_play,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_auto_playing(&self) -> bool {
        self.is_auto_playing
    }

    pub fn current_slide(&self) -> &SlideData {
        &self.slides[self.current_index]
    }

    /// Advance one slide, wrapping from the last to the first
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
    }

    /// Step back one slide, wrapping from the first to the last
    pub fn previous(&mut self) {
        self.current_index = (self.current_index + self.len() - 1) % self.len();
    }

    /// Jump directly to `index`
    ///
    /// # Errors
    ///
    /// Returns error if `index` is outside the deck; the position is unchanged
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(AppError::SlideOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    pub fn toggle_auto_play(&mut self) {
        self.is_auto_playing = !self.is_auto_playing;
    }
}
