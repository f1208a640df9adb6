use clap::Parser;
use code_context::{cli::Cli, config::Config, logging, pipeline::Pipeline};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    let result = Config::from_cwd()
        .and_then(Pipeline::new)
        .and_then(|pipeline| pipeline.run());

    match result {
        Ok(summary) => {
            println!("{}", summary.report());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("An error occurred during context generation: {e:#}");
            ExitCode::FAILURE
        }
    }
}
