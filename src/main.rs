// SPDX-License-Identifier: MPL-2.0
use showreel::app::{self, Flags};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("Invalid arguments: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        playlist: args.opt_value_from_str("--playlist")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        closable: args.contains("--closable"),
        diagnostics_out: args.opt_value_from_str("--diagnostics-out")?,
    })
}
