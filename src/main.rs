use std::process;

mod adapters;
mod cli;
mod config;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = cli::run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
