use std::env;
use std::io;
use std::process;

use env_logger::Env;

use makespan_error::process_file;

const DEFAULT_INPUT: &str = "resultat_est_spt_random.txt";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [filename]", args[0]);
        eprintln!("Reads {} when no filename is given.", DEFAULT_INPUT);
        process::exit(2);
    }
    let filename = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT);

    if let Err(err) = process_file(filename, &mut io::stdout()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
