// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use std::sync::Arc;
use termwin::app::App;
use termwin::cli;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let runtime_options = cli::process_cli();
    // Routes all log::info!() etc. to /tmp/termwin_debug.log; mirrors to
    // stderr when RUST_LOG is set.
    termwin::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting termwin");

    // Renderer bus and log consumers run here.
    let runtime = Arc::new(Runtime::new()?);

    let result = App::run(runtime_options, Arc::clone(&runtime));

    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("termwin: error: {e:#}");
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x server") {
                eprintln!(
                    "termwin: hint: no display server found, ensure DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland) is set"
                );
            }
        }
    }
    result
}
