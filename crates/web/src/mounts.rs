//! Live catalog mounts, keyed by mount element id.
//!
//! `renderCatalog` may be called again for the same element. A live mount is
//! fed the new catalog through its handle instead of mounting a second
//! reactive tree next to the first one.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountAction<H> {
    /// Push the new catalog into the existing mount.
    Update(H),
    /// Clear the element and mount from scratch.
    Mount,
}

#[derive(Debug)]
pub struct MountRegistry<H> {
    live: HashMap<String, H>,
}

impl<H> Default for MountRegistry<H> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
        }
    }
}

impl<H: Copy> MountRegistry<H> {
    /// Decide how to render into `mount_id`. An element emptied by the page
    /// no longer shows the old mount, so its handle is dropped.
    pub fn plan(&mut self, mount_id: &str, element_has_content: bool) -> MountAction<H> {
        match self.live.get(mount_id) {
            Some(handle) if element_has_content => MountAction::Update(*handle),
            _ => {
                self.live.remove(mount_id);
                MountAction::Mount
            }
        }
    }

    pub fn register(&mut self, mount_id: impl Into<String>, handle: H) {
        self.live.insert(mount_id.into(), handle);
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
