use std::path::PathBuf;

use mirror_toolbox::gui;
use mirror_toolbox::logging;
use mirror_toolbox::settings::{
    resolve_settings_path, DeviceSettingsService, DEVICE_SETTINGS_FILE_NAME,
};

fn main() -> anyhow::Result<()> {
    logging::init(cfg!(debug_assertions));

    let settings_path = resolve_settings_path().unwrap_or_else(|e| {
        tracing::warn!("falling back to working directory for device settings: {e:#}");
        PathBuf::from(DEVICE_SETTINGS_FILE_NAME)
    });
    let settings = DeviceSettingsService::new(settings_path);

    let device_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-device".to_string());
    tracing::info!(%device_id, "opening device view");

    if let Err(e) = gui::run(settings, device_id) {
        tracing::error!("gui terminated: {e}");
    }
    Ok(())
}
