//! Notice registry contract and in-memory implementation.
//!
//! # Invariants
//! - Ids are unique; a colliding registration leaves the original intact.
//! - Listing returns notices in insertion order.

use crate::model::notice::AdminNotice;
use indexmap::IndexMap;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Collision(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collision(id) => write!(f, "notification with ID {id} already exists"),
        }
    }
}

impl Error for RegistryError {}

/// Keyed store of registered notices.
pub trait NoticeRegistry {
    /// Stores `notice` and returns it for further configuration.
    fn register_notice(&mut self, notice: AdminNotice) -> Result<&mut AdminNotice, RegistryError>;

    /// Removes a notice; unknown ids are ignored.
    fn unregister_notice(&mut self, id: &str);

    fn get_notice(&self, id: &str) -> Option<&AdminNotice>;

    fn get_notice_mut(&mut self, id: &str) -> Option<&mut AdminNotice>;

    /// All notices in insertion order.
    fn notices(&self) -> Vec<&AdminNotice>;
}

/// Process-local registry backed by an insertion-ordered map.
#[derive(Debug, Default)]
pub struct InMemoryNoticeRegistry {
    notices: IndexMap<String, AdminNotice>,
}

impl InMemoryNoticeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl NoticeRegistry for InMemoryNoticeRegistry {
    fn register_notice(&mut self, notice: AdminNotice) -> Result<&mut AdminNotice, RegistryError> {
        let id = notice.id().to_string();
        if self.notices.contains_key(id.as_str()) {
            warn!(
                "event=notice_register module=registry status=error reason=collision id={}",
                id
            );
            return Err(RegistryError::Collision(id));
        }

        debug!("event=notice_register module=registry status=ok id={}", id);
        let entry = self.notices.entry(id).or_insert(notice);
        Ok(entry)
    }

    fn unregister_notice(&mut self, id: &str) {
        if self.notices.shift_remove(id).is_some() {
            debug!("event=notice_unregister module=registry status=ok id={}", id);
        }
    }

    fn get_notice(&self, id: &str) -> Option<&AdminNotice> {
        self.notices.get(id)
    }

    fn get_notice_mut(&mut self, id: &str) -> Option<&mut AdminNotice> {
        self.notices.get_mut(id)
    }

    fn notices(&self) -> Vec<&AdminNotice> {
        self.notices.values().collect()
    }
}
