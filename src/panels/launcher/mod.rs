use log::debug;
use slint::Image;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub mod events;
pub mod launcher;

pub use launcher::run_launcher;

/// Load an icon from a file path into a Slint Image.
pub fn load_icon(path: &Path) -> Option<Image> {
    match Image::load_from_path(path) {
        Ok(image) => {
            debug!("Successfully loaded icon: {:?}", path);
            Some(image)
        }
        Err(e) => {
            debug!("Failed to load icon {:?}: {}", path, e);
            None
        }
    }
}

/// Decoded icons keyed by resolved path. Every keystroke rebuilds the
/// row models, so each file is decoded at most once.
#[derive(Default)]
pub struct IconCache {
    images: RefCell<HashMap<PathBuf, Option<Image>>>,
}

impl IconCache {
    pub fn get(&self, path: &Path) -> Option<Image> {
        if let Some(cached) = self.images.borrow().get(path) {
            return cached.clone();
        }

        let image = load_icon(path);
        self.images
            .borrow_mut()
            .insert(path.to_path_buf(), image.clone());
        image
    }
}
