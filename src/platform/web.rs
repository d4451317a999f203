//! Browser front end: stacked canvases, image loading and browser timers

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

use crate::App;
use crate::assets::{Asset, AssetSizes, LoadBarrier};
use crate::error::{GameError, Result};
use crate::render::{Layer, Paint, Rect, RenderSurface};
use crate::sim::{Direction, FrameOutcome, Size};

/// Overlay text font
const FONT: &str = "20px Arial";

/// One 2D canvas per layer plus the decoded images
pub struct CanvasSurface {
    contexts: Vec<CanvasRenderingContext2d>,
    images: Vec<HtmlImageElement>,
    canvas: Size,
}

impl CanvasSurface {
    /// Acquire a 2D context for every layer canvas
    ///
    /// Fails with `SurfaceUnsupported` when the browser cannot provide one.
    pub fn new(document: &Document, images: Vec<HtmlImageElement>) -> Result<Self> {
        let mut contexts = Vec::with_capacity(Layer::ALL.len());
        let mut canvas = Size::default();

        for layer in Layer::ALL {
            let element: HtmlCanvasElement = document
                .get_element_by_id(layer.element_id())
                .ok_or_else(|| GameError::MissingElement(layer.element_id().to_string()))?
                .dyn_into()
                .map_err(|_| GameError::MissingElement(layer.element_id().to_string()))?;

            let context: CanvasRenderingContext2d = element
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into().ok())
                .ok_or(GameError::SurfaceUnsupported(layer.element_id()))?;

            if layer == Layer::Background {
                canvas = Size::new(element.width() as f32, element.height() as f32);
            }
            contexts.push(context);
        }

        contexts[Layer::Stats.index()].set_font(FONT);
        log::info!("Canvas {}x{}", canvas.width, canvas.height);

        Ok(Self {
            contexts,
            images,
            canvas,
        })
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Natural sizes of the decoded images
    pub fn asset_sizes(&self) -> AssetSizes {
        let mut sizes = AssetSizes::new();
        for asset in Asset::ALL {
            let img = &self.images[asset.index()];
            sizes.set(
                asset,
                Size::new(img.natural_width() as f32, img.natural_height() as f32),
            );
        }
        sizes
    }

    fn ctx(&self, layer: Layer) -> &CanvasRenderingContext2d {
        &self.contexts[layer.index()]
    }
}

impl RenderSurface for CanvasSurface {
    fn draw_image(&mut self, layer: Layer, asset: Asset, x: f32, y: f32) {
        let img = &self.images[asset.index()];
        if let Err(e) = self
            .ctx(layer)
            .draw_image_with_html_image_element(img, x as f64, y as f64)
        {
            log::warn!("drawImage {:?} failed: {:?}", asset, e);
        }
    }

    fn clear_rect(&mut self, layer: Layer, rect: Rect) {
        self.ctx(layer).clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_rect(&mut self, layer: Layer, rect: Rect, paint: Paint) {
        let ctx = self.ctx(layer);
        apply_paint(ctx, paint);
        ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        ctx.set_global_alpha(1.0);
    }

    fn fill_text(&mut self, layer: Layer, text: &str, x: f32, y: f32, paint: Paint) {
        let ctx = self.ctx(layer);
        apply_paint(ctx, paint);
        let _ = ctx.fill_text(text, x as f64, y as f64);
        ctx.set_global_alpha(1.0);
    }
}

fn apply_paint(ctx: &CanvasRenderingContext2d, paint: Paint) {
    match paint {
        Paint::Panel => {
            ctx.set_global_alpha(0.4);
            ctx.set_fill_style_str("white");
        }
        Paint::Ink => ctx.set_fill_style_str("brown"),
    }
}

/// Start loading every asset; the barrier resolves once all have decoded and
/// fails as soon as one cannot be loaded
pub fn load_images() -> Result<(Vec<HtmlImageElement>, LoadBarrier)> {
    let (barrier, signals) = LoadBarrier::track(&Asset::ALL);
    let mut images = Vec::with_capacity(Asset::ALL.len());

    for signal in signals {
        let asset = signal.asset();
        let img = HtmlImageElement::new().map_err(|_| GameError::AssetLoad(asset.path()))?;

        let loaded = signal.clone();
        let onload = Closure::<dyn FnMut()>::new(move || loaded.loaded());
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(move || {
            log::error!("{}", GameError::AssetLoad(signal.asset().path()));
            signal.failed();
        });
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        img.set_src(asset.path());
        images.push(img);
    }

    Ok((images, barrier))
}

pub type WebApp = Rc<RefCell<App<CanvasSurface>>>;

/// Schedule the next frame, preferring requestAnimationFrame over a timer
pub fn request_frame(app: WebApp, interval_ms: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once_into_js(move || run_frame(app, interval_ms));
    let callback: &js_sys::Function = closure.unchecked_ref();
    if window.request_animation_frame(callback).is_err() {
        log::warn!("requestAnimationFrame unavailable, using {:.1}ms timer", interval_ms);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, interval_ms as i32);
    }
}

fn run_frame(app: WebApp, interval_ms: f64) {
    let outcome = app.borrow_mut().on_frame();
    if let FrameOutcome::Running(_) = outcome {
        request_frame(app, interval_ms);
    }
}

/// Fire the spawn timer now and keep re-arming it while the game is alive
pub fn run_spawn_timer(app: WebApp) {
    let next = app.borrow_mut().on_spawn_timer();
    let Some(delay_ms) = next else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once_into_js(move || run_spawn_timer(app));
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    );
}

/// Route arrow keys to the catcher
pub fn setup_keyboard(document: &Document, app: WebApp) {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if let Some(direction) = Direction::from_key_event(&event.key(), event.key_code()) {
            event.prevent_default();
            app.borrow_mut().on_key(direction);
        }
    });
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
