//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = wayfarer_cli::run() {
        if let wayfarer_cli::CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        log::error!("{err}");
        std::process::exit(1);
    }
}
