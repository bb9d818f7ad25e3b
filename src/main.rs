//! Binary entrypoint for the `gsbatch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A local .env may carry GSBATCH_PASSPHRASE and friends.
    dotenvy::dotenv().ok();
    match gsbatch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
