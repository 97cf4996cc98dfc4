use raincloud::prelude::run_app;
use std::process::exit;

fn main() {
    env_logger::init();

    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
