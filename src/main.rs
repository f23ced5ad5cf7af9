// SPDX-License-Identifier: MPL-2.0
use iced_slider::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_slider [OPTIONS]

Options:
  --config <DIR>   Directory holding slider.toml
  --min <NUMBER>   Range minimum
  --max <NUMBER>   Range maximum
  --step <NUMBER>  Tick spacing
  --value <NUMBER> Initial value
  --snap           Snap values to the step
  -h, --help       Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config")?,
        min: args.opt_value_from_str("--min")?,
        max: args.opt_value_from_str("--max")?,
        step: args.opt_value_from_str("--step")?,
        value: args.opt_value_from_str("--value")?,
        snap: args.contains("--snap"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
