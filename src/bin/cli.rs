use clap::Parser;
use dotenvy::dotenv;

use edunav::cli::{Cli, run};

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
