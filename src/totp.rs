use std::time::{Duration, SystemTime};

use crate::error::{OtpError, Result};
use crate::hotp::hotp;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// HOTP over a time-based moving factor
pub fn generate(secret: &[u8], at: SystemTime, interval: u64, digits: u32) -> Result<String> {
    let step = time_step(at, interval)?;
    let code = hotp(secret, step, digits)?;

    Ok(render(code, digits))
}

fn render(code: u32, digits: u32) -> String {
    format!("{:0>width$}", code, width = digits as usize)
}

/// Number of whole intervals elapsed between the unix epoch and `at`.
pub fn time_step(at: SystemTime, interval: u64) -> Result<u64> {
    let secs = unix_seconds(at)?.as_secs();
    secs.checked_div(interval).ok_or(OtpError::ZeroInterval)
}

/// Time left until the step following the one `at` falls in.
pub fn next_step_in(at: SystemTime, interval: u64) -> Result<Duration> {
    if interval == 0 {
        return Err(OtpError::ZeroInterval);
    }
    let since_epoch = unix_seconds(at)?;
    let into_step = Duration::new(since_epoch.as_secs() % interval, since_epoch.subsec_nanos());

    Ok(Duration::from_secs(interval) - into_step)
}

fn unix_seconds(at: SystemTime) -> Result<Duration> {
    at.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|_| OtpError::BeforeEpoch)
}

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}
