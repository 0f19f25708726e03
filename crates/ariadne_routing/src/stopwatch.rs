use std::{fmt::Display, time::Instant};

use jiff::SignedDuration;

pub struct Stopwatch<'a> {
    start_time: Instant,
    name: &'a str,
}

impl<'a> Stopwatch<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            start_time: Instant::now(),
            name,
        }
    }

    pub fn elapsed(&self) -> SignedDuration {
        SignedDuration::try_from(self.start_time.elapsed()).unwrap_or(SignedDuration::MAX)
    }
}

impl Display for Stopwatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {:#}", self.name, self.elapsed())
    }
}
