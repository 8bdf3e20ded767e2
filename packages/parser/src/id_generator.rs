use crc32fast::Hasher;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Derive a short session seed from any stable string (file path, start time)
pub fn get_session_id(source: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(source.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes created during one editing session.
///
/// Clones share the counter, so every version of a document hands out
/// ids from the same sequence.
#[derive(Clone, Debug)]
pub struct IDGenerator {
    seed: String,
    count: Arc<AtomicU32>,
}

impl IDGenerator {
    pub fn new(session: &str) -> Self {
        Self::from_seed(get_session_id(session))
    }

    pub fn from_seed(seed: String) -> Self {
        Self {
            seed,
            count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Generate the next sequential id, `<prefix>_<seed>-<n>`
    pub fn new_id(&self, prefix: &str) -> String {
        let n = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{}-{}", prefix, self.seed, n)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }
}
