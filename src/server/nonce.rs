use dashmap::DashMap;
use rand::Rng;
use std::time::{Duration, Instant};

/// In-process anti-forgery token store. A token is issued per page load,
/// bound to a TTL, and consumed by its first successful check. Nothing is
/// persisted; a restart simply invalidates outstanding tokens.
pub struct NonceStore {
    tokens: DashMap<String, Instant>,
    ttl: Duration,
}

impl NonceStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: DashMap::new(),
            ttl,
        }
    }

    pub fn issue(&self) -> String {
        // Opportunistic cleanup so abandoned tokens don't pile up.
        self.prune_expired();

        let nonce = format!("{:032x}", rand::thread_rng().gen::<u128>());
        self.tokens.insert(nonce.clone(), Instant::now());
        nonce
    }

    /// Consumes the nonce. Returns false for unknown, expired, or reused
    /// tokens.
    pub fn verify(&self, nonce: &str) -> bool {
        match self.tokens.remove(nonce) {
            Some((_, issued_at)) => issued_at.elapsed() <= self.ttl,
            None => false,
        }
    }

    fn prune_expired(&self) {
        let ttl = self.ttl;
        self.tokens.retain(|_, issued_at| issued_at.elapsed() <= ttl);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tokens.len()
    }
}
