//! Parachute Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use parachute_catch::platform::web::{
        CanvasSurface, load_images, request_frame, run_spawn_timer, setup_keyboard,
    };
    use parachute_catch::sim::Session;
    use parachute_catch::{App, GameError, Result, Settings};

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Parachute Catch starting...");

        if let Err(e) = start().await {
            log::error!("Startup aborted: {}", e);
        }
    }

    async fn start() -> Result<()> {
        let settings = Settings::load();
        let window = web_sys::window().ok_or_else(|| GameError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::MissingElement("document".into()))?;

        let (images, barrier) = load_images()?;
        barrier.wait().await?;
        log::info!("Assets ready");

        let surface = CanvasSurface::new(&document, images)?;
        let canvas = surface.canvas_size();
        let sizes = surface.asset_sizes();

        let seed = settings
            .seed
            .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
        let session = Session::new(&settings, canvas, &sizes, seed);

        let app = Rc::new(RefCell::new(App::new(session, surface)));
        app.borrow_mut().start();

        setup_keyboard(&document, app.clone());
        run_spawn_timer(app.clone());
        request_frame(app, settings.frame_interval_ms);

        log::info!("Parachute Catch running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use parachute_catch::Settings;
    use parachute_catch::platform::headless::{self, Autopilot};

    env_logger::init();
    log::info!("Parachute Catch (native) starting...");
    log::info!("Native mode runs a headless session with the autopilot - serve the web build to play");

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Startup aborted: {}", e);
            std::process::exit(1);
        }
    };

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });

    // Ten minutes of play at 60 Hz
    let summary = headless::run(&settings, seed, 36_000, Some(Autopilot::default()));

    println!(
        "Seed {}: score {} ({} caught, {} missed) in {} frames{}",
        seed,
        summary.score,
        summary.caught,
        summary.missed,
        summary.frames,
        if summary.game_over { ", game over" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
