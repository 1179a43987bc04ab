use eyre::Result;

use crate::{device::Device, panel::Panel};

pub async fn launch(device: Device) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = Panel::new(device).run(&mut terminal).await;
    ratatui::restore();

    result
}
