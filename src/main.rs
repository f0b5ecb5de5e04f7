// SPDX-License-Identifier: MPL-2.0
use akanni::app::{self, paths, Flags};
use akanni::logging;

const HELP: &str = "\
Àkanní studio showcase

USAGE:
  akanni [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --route <PATH>         Start page, e.g. /contact (unknown paths open home)
  --endpoint <URL>       Testimonials endpoint, overrides settings and AKANNI_TESTIMONIALS_ENDPOINT
  --config-dir <DIR>     Directory holding settings.toml, overrides AKANNI_CONFIG_DIR
  -h, --help             Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
