use std::ops::Add;
use std::time::{Duration, SystemTime};

use clap::ArgMatches;

use crate::cli;

pub fn get_matches(arg_vec: &[&str]) -> Result<ArgMatches, clap::Error> {
    cli::command().try_get_matches_from(arg_vec)
}

pub fn at_unix(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH.add(Duration::new(secs, 0))
}
