use clap::{arg, command, Arg, Command};

use crate::utils::is_positive_int;

const INPUT_HELP: &str = "\
If the -f flag is not specified, secrets are read from standard input.
Input is TAB separated and each line needs to contain two fields: the first
field is a display name for the service, the other is the base32 secret key.";

pub fn command() -> Command<'static> {
    command!()
        .about("Display time-based one-time passwords, refreshed every interval")
        .after_help(INPUT_HELP)
        .args(&[
            arg!(-f --file <FILE> "File path to a secrets file").required(false),
            arg!(-d --digits <DIGITS> "Amount of digits in each code")
                .required(false)
                .validator(is_positive_int),
            Arg::new("date-format")
                .short('D')
                .long("date-format")
                .value_name("FORMAT")
                .takes_value(true)
                .help("strftime format of the refresh time"),
            arg!(-i --interval <SECONDS> "Time step in seconds")
                .required(false)
                .validator(is_positive_int),
            arg!(-w --width <WIDTH> "Width of the name column")
                .required(false)
                .validator(is_positive_int),
            arg!(-c --config <CONFIG> "Path to a TOML config file").required(false),
            arg!(-o --once "Print a single block of codes and exit").required(false),
        ])
}
