use cached::{Cached, TimedSizedCache};

const CACHE_SIZE: usize = 1000;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 24;

/// Portal sessions, keyed by the opaque token handed out at login.
/// Only 1000 sessions can be live at a time, and they expire after one day.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, i32>,
}

impl SessionStorage {
    pub fn store(&mut self, token: String, member_id: i32) {
        self.sessions.cache_set(token, member_id);
    }

    pub fn get(&mut self, token: &str) -> Option<i32> {
        self.sessions.cache_get(token).copied()
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        let sessions =
            TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}
