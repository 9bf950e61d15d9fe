// SPDX-License-Identifier: MPL-2.0
use iced_pan::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_pan

USAGE:
  iced_pan [OPTIONS]

OPTIONS:
  --config <PATH>   Read settings from PATH instead of the default location
  --fps <N>         Frames per second of continuous panning
  --speed <PX>      Pixels per second of continuous panning
  -h, --help        Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        config_path: args.opt_value_from_str("--config")?,
        fps: args.opt_value_from_str("--fps")?,
        speed: args.opt_value_from_str("--speed")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_pan=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
