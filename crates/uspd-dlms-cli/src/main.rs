// crates/uspd-dlms-cli/src/main.rs

mod cli;

use clap::Parser;
use cli::Cli;
use log::{error, info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Cli::parse().into_settings();
    info!(
        "Converting {} -> {}",
        settings.input_path.display(),
        settings.output_path.display()
    );

    match uspd_dlms::convert(&settings) {
        Ok(report) => {
            if !report.is_clean() {
                warn!("Conversion finished with errors, see above");
            }
            info!(
                "{} module(s), {} channel(s) -> {} logical device(s), {} object(s)",
                report.modules, report.channels, report.logical_devices, report.objects
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
