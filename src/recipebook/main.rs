use clap::Parser;

mod cli;
use cli::setup::Cli;

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli::commands::run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
