//! Image preview caching and protocol state management.
//!
//! Downloaded images are decoded once and kept as encoded terminal graphics
//! protocols, keyed by their download URL, so switching back to a recently
//! previewed file neither refetches nor re-decodes it.

use std::collections::{HashMap, VecDeque};

use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

/// How many decoded images are kept.
const CAPACITY: usize = 8;

/// State of one image URL.
pub enum ImageSlot {
    Loading,
    Ready(StatefulProtocol),
    Failed(String),
}

/// Holds the picker and the recently decoded images.
pub struct ImagePreviewState {
    picker: Picker,
    slots: HashMap<String, ImageSlot>,
    order: VecDeque<String>,
}

impl ImagePreviewState {
    pub fn new(picker: Picker) -> Self {
        Self {
            picker,
            slots: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Marks `url` as loading and returns `true` if it has never been seen.
    ///
    /// The caller is expected to start the download when this returns `true`.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.remember(url.to_string(), ImageSlot::Loading);
        true
    }

    /// Decodes downloaded bytes for `url`.
    pub fn finish(&mut self, url: &str, bytes: &[u8]) {
        let slot = match image::load_from_memory(bytes) {
            Ok(img) => ImageSlot::Ready(self.picker.new_resize_protocol(img)),
            Err(e) => {
                tracing::debug!(url, "image decode failed: {e}");
                ImageSlot::Failed(format!("Cannot decode image: {e}"))
            }
        };
        self.remember(url.to_string(), slot);
    }

    /// Records a failed download for `url`.
    pub fn fail(&mut self, url: &str, message: String) {
        self.remember(url.to_string(), ImageSlot::Failed(message));
    }

    pub fn slot_mut(&mut self, url: &str) -> Option<&mut ImageSlot> {
        self.slots.get_mut(url)
    }

    fn remember(&mut self, url: String, slot: ImageSlot) {
        if self.slots.insert(url.clone(), slot).is_none() {
            self.order.push_back(url);
        }
        while self.order.len() > CAPACITY {
            if let Some(oldest) = self.order.pop_front() {
                self.slots.remove(&oldest);
            }
        }
    }
}
