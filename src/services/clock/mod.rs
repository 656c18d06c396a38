// Clock service
// Injectable source of "now" for rendering and "today" navigation

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Source of the current instant in a given zone.
pub trait Clock<Tz: TimeZone> {
    fn now(&self) -> DateTime<Tz>;
}

/// Wall clock, reported in `tz`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock<Tz> {
    tz: Tz,
}

impl<Tz: TimeZone> SystemClock<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl<Tz: TimeZone> Clock<Tz> for SystemClock<Tz> {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Clock frozen at a chosen instant until moved explicitly.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now }
    }

    pub fn set(&mut self, now: DateTime<Tz>) {
        self.now = now;
    }

    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.clone() + by;
    }
}

impl<Tz: TimeZone> Clock<Tz> for FixedClock<Tz> {
    fn now(&self) -> DateTime<Tz> {
        self.now.clone()
    }
}

impl<Tz: TimeZone, C: Clock<Tz> + ?Sized> Clock<Tz> for &C {
    fn now(&self) -> DateTime<Tz> {
        (**self).now()
    }
}
