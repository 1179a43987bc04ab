use clap::{Parser, Subcommand};
use eyre::Result;

use crate::{config::Config, device::Device};

mod status;
mod watch;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive dashboard (the default)
    Watch,

    /// Print the current device state once
    Status,

    /// Set the target temperature, forwarded verbatim
    SetTemp { value: String },

    /// Reboot the device
    Reboot,

    /// Shut the device down
    Shutdown,

    /// Print the firmware version
    Version,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config).await?;
    let device = Device::connect_from_config(&config.device)?;

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => watch::launch(device).await,
        Command::Status => status::show(&device).await,

        Command::SetTemp { value } => {
            device.set_temp(&value).await?;
            Ok(())
        }

        Command::Reboot => {
            device.reboot().await?;
            Ok(())
        }

        Command::Shutdown => {
            device.shutdown().await?;
            Ok(())
        }

        Command::Version => {
            println!("Version: {}", device.version().await?);
            Ok(())
        }
    }
}
