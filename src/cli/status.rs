use eyre::Result;

use crate::{device::Device, panel::Labels};

pub async fn show(device: &Device) -> Result<()> {
    let report = device.state().await?;

    let mut labels = Labels::default();
    labels.update(&report);

    println!("Target   {}", labels.target);
    println!("Current  {}", labels.current);
    println!("Pump     {}", labels.pump);
    println!("Heater   {}", labels.heater);

    Ok(())
}
