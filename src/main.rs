use clap::Parser;
use tuido::cli::commands::Cli;
use tuido::cli::handlers;

fn main() {
    tuido::logging::init();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
