use clap::Parser;
use hal_gene_liftover::{Args, liftover};
use log::{error, info};
use simple_logger::init_with_level;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting hal-gene-liftover with args: {}", args);

    match liftover(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if e.is_configuration() {
                error!("ERROR: see --help for usage");
            }
            ExitCode::FAILURE
        }
    }
}
