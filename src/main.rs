mod app;

use std::process;

use env_logger::{Builder, Env, Target};

fn main() {
    // Diagnostics belong on stdout, and warnings must show without RUST_LOG.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stdout)
        .init();

    if let Err(err) = app::run() {
        println!("{:#}", err);
        process::exit(1);
    }
}
