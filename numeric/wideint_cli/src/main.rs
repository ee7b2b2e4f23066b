//! Wideint CLI
//!
//! Exact integer arithmetic from the shell.

use wideint_cli::commands::run;
use wideint_cli::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
