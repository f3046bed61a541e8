use std::process::ExitCode;

mod cli;
mod clipboard;
mod controller;
mod error;
mod exits;
mod pass;
mod settings;
mod source;
mod terminal;
mod tui;

use cli::prompts;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let bare = std::env::args_os().len() == 1;
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(code) => return code,
    };
    let interactive = bare || args.interactive;

    match cli::run(args, interactive) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal::reset_terminal();
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
