//! Rate-limited diagnostics for mutator precedence violations.
//!
//! Mirrors the kernel's `printk_ratelimit()` gate on the `steal`/`to_kernel`
//! warnings: under a buggy filter that applies both mutators repeatedly,
//! every violation still skips the mutation, but only every Nth one
//! actually logs.

use std::sync::atomic::{AtomicU64, Ordering};

/// Log every Nth violation; the rest are counted but silent.
const LOG_EVERY: u64 = 100;

/// A simple counting rate limiter, one per call site.
#[derive(Debug, Default)]
pub struct RateLimiter {
    hits: AtomicU64,
}

impl RateLimiter {
    pub const fn new() -> Self {
        RateLimiter {
            hits: AtomicU64::new(0),
        }
    }

    /// `true` on the hit that should actually be logged.
    pub fn allow(&self) -> bool {
        let n = self.hits.fetch_add(1, Ordering::Relaxed);
        n % LOG_EVERY == 0
    }
}

pub static STEAL_AFTER_TO_KERNEL: RateLimiter = RateLimiter::new();
pub static TO_KERNEL_AFTER_STOLEN: RateLimiter = RateLimiter::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_first_hit_then_rate_limits() {
        let limiter = RateLimiter::new();
        assert!(limiter.allow());
        for _ in 1..LOG_EVERY {
            assert!(!limiter.allow());
        }
        assert!(limiter.allow());
    }
}
