use chrono::Utc;

/// Clock seam for the TTL cache. Production uses [`SystemClock`];
/// tests inject a fake to drive expiry deterministically.
pub trait Clock: Send + Sync {
    fn now_unix(&self) -> i64;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}
