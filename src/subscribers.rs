//! File-backed subscriber store for the scheduled digest.
//!
//! The store owns a JSON file holding the set of subscribed chat ids. It is
//! used only by the command front end, never by the aggregation core, and
//! operates under single-invocation scope: load, modify, save. Saves are
//! atomic (write to a temp file, then rename) so a crash mid-write cannot
//! leave a truncated subscriber list behind.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// Owned handle to the subscriber file.
pub struct SubscriberStore {
    path: PathBuf,
}

impl SubscriberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SubscriberStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the subscriber set. A missing file is an empty set; a corrupt
    /// file is logged and treated as empty rather than aborting.
    pub async fn load(&self) -> BTreeSet<i64> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeSet::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read subscriber file; starting empty");
                return BTreeSet::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(set) => set,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Subscriber file is corrupt; starting empty");
                BTreeSet::new()
            }
        }
    }

    /// Persist the subscriber set atomically.
    async fn save(&self, subscribers: &BTreeSet<i64>) -> io::Result<()> {
        let json = serde_json::to_string(subscribers)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Add a chat id. Returns `true` if it was newly added.
    pub async fn add(&self, chat_id: i64) -> io::Result<bool> {
        let mut subscribers = self.load().await;
        if !subscribers.insert(chat_id) {
            return Ok(false);
        }
        self.save(&subscribers).await?;
        info!(chat_id, total = subscribers.len(), "Subscriber added");
        Ok(true)
    }

    /// Remove a chat id. Returns `true` if it was present.
    pub async fn remove(&self, chat_id: i64) -> io::Result<bool> {
        let mut subscribers = self.load().await;
        if !subscribers.remove(&chat_id) {
            return Ok(false);
        }
        self.save(&subscribers).await?;
        info!(chat_id, total = subscribers.len(), "Subscriber removed");
        Ok(true)
    }
}
