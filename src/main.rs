use env_logger::Env;
use rusty_phonebook::prelude::run_app;
use std::process::exit;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run_app() {
        eprintln!("{e}");
        exit(1);
    }
}
