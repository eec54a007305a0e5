//! Strain++ installer packager.
//!
//! Stages the Strain++ executable and its MinGW/Qt runtime, renders the
//! Inno Setup script with the build's version and compiles the installer.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match strainpp_installer::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            if let Some((stdout, stderr)) = e.compiler_output() {
                eprint!("{stdout}{stderr}");
            }
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
