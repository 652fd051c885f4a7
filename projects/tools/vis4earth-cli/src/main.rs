#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Converts raw volumes and transfer functions into DDS render resources
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Volume(commands::volume::VolumeCmd),
    TransferFunction(commands::transfer_function::TransferFunctionCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Volume(cmd) => {
            commands::volume::handle_volume_command(cmd)?;
        }
        Commands::TransferFunction(cmd) => {
            commands::transfer_function::handle_transfer_function_command(cmd)?;
        }
    }

    Ok(())
}
