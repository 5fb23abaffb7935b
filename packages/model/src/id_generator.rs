//! Element id generation.
//!
//! Ids have the shape `"{seed}-{n}"`: a CRC32 hash of the page name
//! followed by a sequential counter. The generator is a value owned by
//! one editing session, never a process-wide singleton, which keeps
//! test runs deterministic and sessions independent.

use crc32fast::Hasher;

/// CRC32 seed for a page, derived from its name.
pub fn get_page_id(name: &str) -> String {
    let mut buff = String::from(name);
    if !name.starts_with("page://") {
        buff = format!("page://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Session-scoped element id generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(page_name: &str) -> Self {
        Self {
            seed: get_page_id(page_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Continue a previous sequence: the next id will be
    /// `"{seed}-{count + 1}"`. Used when a session reopens a document
    /// whose elements already carry ids from this seed, so fresh ids
    /// never collide with loaded ones.
    pub fn resume(seed: String, count: u32) -> Self {
        Self { seed, count }
    }

    /// Mint the next id in the sequence.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
