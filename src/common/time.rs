use std::time::SystemTime;

/// Wall-clock source, swappable in tests where the render-time fallback
/// timestamp must be deterministic.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
