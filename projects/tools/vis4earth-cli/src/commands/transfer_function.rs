use crate::error::CliError;
use argh::FromArgs;
use std::path::PathBuf;
use vis4earth_dds::DdsResourceFactory;
use vis4earth_transfer_function::PreIntegrationSettings;
use vis4earth_volume_api::{
    create_pre_integrated_table, load_transfer_function, save_transfer_function,
    TransferFunctionDesc,
};

#[derive(FromArgs, Debug)]
/// Convert a transfer function text file into a DDS colour ramp
#[argh(subcommand, name = "tf")]
pub struct TransferFunctionCmd {
    /// transfer function text file
    #[argh(positional)]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(crate::util::canonicalize_cli_path))]
    pub output: PathBuf,

    /// resource name [default: input file stem]
    #[argh(option)]
    pub name: Option<String>,

    /// also write a pre-integrated table
    #[argh(switch)]
    pub pre_integrate: bool,

    /// ray marching step for the pre-integrated table [default: 1.0]
    #[argh(option, default = "1.0")]
    pub step: f32,

    /// re-save the control points, normalized, to this path
    #[argh(option)]
    pub save: Option<PathBuf>,
}

pub fn handle_transfer_function_command(
    cmd: TransferFunctionCmd,
) -> Result<(), Box<dyn std::error::Error>> {
    let factory = DdsResourceFactory::new(&cmd.output);
    let mut desc = TransferFunctionDesc::new(&cmd.input);
    if let Some(name) = &cmd.name {
        desc = desc.with_name(name.as_str());
    }

    let loaded = load_transfer_function(&factory, &desc).map_err(CliError::from)?;
    println!(
        "{} -> {}",
        cmd.input.display(),
        loaded.color_ramp.path.display()
    );

    if cmd.pre_integrate {
        let table = create_pre_integrated_table(
            &factory,
            &format!("{}_preintegrated", desc.name),
            &loaded.ramp,
            PreIntegrationSettings { step: cmd.step },
        )
        .map_err(CliError::from)?;
        println!("{} -> {}", cmd.input.display(), table.path.display());
    }

    if let Some(save) = &cmd.save {
        save_transfer_function(Some(&loaded.curve), save).map_err(CliError::from)?;
        println!("{} -> {}", cmd.input.display(), save.display());
    }

    Ok(())
}
