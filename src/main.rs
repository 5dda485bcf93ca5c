use ardi::cli::{self, Cli};
use ardi::utils::logging::init_cli_logging;

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = init_cli_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = cli::run(&cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
