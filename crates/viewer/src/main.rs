#[cfg(not(target_arch = "wasm32"))]
mod app;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cabinet_viewer=info,cabinet_viewer_lib=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cabinet Viewer")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "cabinet-viewer",
        native_options,
        Box::new(|cc| Ok(Box::new(app::CabinetApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

// The browser build goes through the cabinet-viewer-wasm crate.
#[cfg(target_arch = "wasm32")]
fn main() {}
