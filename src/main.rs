use std::env;
use std::process;

use mltree::cli;
use mltree::ui::Console;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let interface = Console::default();

    match cli::resolve(tokens.as_slice(), &interface) {
        Ok(options) => cli::dispatch(&options, &interface),
        Err(code) => process::exit(code),
    }
}
