use std::cell::Cell;
use std::ops::Add;
use std::time::{Duration, SystemTime};

use crate::totp::GetTime;
use crate::writer::OutErr;

pub struct MockOtpWriter {
    pub out: Vec<u8>,
    pub err: Vec<u8>,
    pub flushes: usize,
}

impl MockOtpWriter {
    pub fn new() -> Self {
        MockOtpWriter {
            out: Vec::new(),
            err: Vec::new(),
            flushes: 0,
        }
    }

    pub fn out_string(&self) -> String {
        String::from_utf8(self.out.clone()).unwrap()
    }

    pub fn err_string(&self) -> String {
        String::from_utf8(self.err.clone()).unwrap()
    }
}

impl OutErr for MockOtpWriter {
    fn write_err(&mut self, s: &str) {
        self.err.append(&mut s.as_bytes().to_vec());
    }

    fn write(&mut self, s: &str) {
        self.out.append(&mut s.as_bytes().to_vec());
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

pub struct MockClock {
    now: SystemTime,
}

impl MockClock {
    pub fn new() -> Self {
        MockClock::at(90)
    }

    pub fn at(secs: u64) -> Self {
        MockClock {
            now: SystemTime::UNIX_EPOCH.add(Duration::new(secs, 0)),
        }
    }
}

impl GetTime for MockClock {
    fn get_now(&self) -> SystemTime {
        self.now
    }
}

// Moves forward one full step every time it is read
pub struct SteppingClock {
    next: Cell<u64>,
    step: u64,
}

impl SteppingClock {
    pub fn new(start: u64, step: u64) -> Self {
        SteppingClock {
            next: Cell::new(start),
            step,
        }
    }
}

impl GetTime for SteppingClock {
    fn get_now(&self) -> SystemTime {
        let secs = self.next.get();
        self.next.set(secs + self.step);
        SystemTime::UNIX_EPOCH.add(Duration::new(secs, 0))
    }
}
