use multibagger_lens::app_ui::DashboardApp;
use multibagger_lens::config::Config;
use multibagger_lens::gpu_backend;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = Config::load_default();
    log::info!(
        "starting with {} on {}",
        config.general.default_ticker,
        config.general.default_timeframe
    );

    eframe::run_native(
        "Multibagger Lens",
        gpu_backend::native_options(&config.window),
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &config)))),
    )
}
