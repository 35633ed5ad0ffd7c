// SPDX-License-Identifier: MPL-2.0
use event_registration::app::{self, Flags};

const HELP: &str = "\
EventRegistration

USAGE:
  event_registration [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US)
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: parse_option(&mut args, "--lang"),
        config_dir: parse_option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Invalid value for {key}: {err}");
            None
        }
    }
}
