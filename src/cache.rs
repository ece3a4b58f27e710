use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Marks cached renderings of a path as stale.
pub trait Revalidate: Send + Sync {
    fn revalidate_path(&self, path: &str);
}

/// In-process cache of rendered page bodies, keyed by request path.
#[derive(Clone, Default)]
pub struct PageCache {
    pages: Arc<Mutex<HashMap<String, String>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<String> {
        let map = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        map.get(path).cloned()
    }

    pub fn put(&self, path: &str, body: String) {
        let mut map = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(path.to_string(), body);
    }
}

impl Revalidate for PageCache {
    fn revalidate_path(&self, path: &str) {
        let mut map = self.pages.lock().unwrap_or_else(|e| e.into_inner());
        if map.remove(path).is_some() {
            log::debug!("Revalidated cached page {path}");
        }
    }
}
