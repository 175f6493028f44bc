//! Browser entry point: binds a [`BoardView`] to a `<canvas>` element.
//!
//! The widget owns the DOM listeners and the fade timer. Listeners hold weak
//! references to the shared state, so dropping or destroying the widget
//! detaches everything. JS callbacks run only after every borrow of the view
//! is released, so a callback may call back into the widget.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use geometry::Point;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, PointerEvent, Window};

use crate::canvas::CanvasSurface;
use crate::config::{BoardOptions, ConfigError, RadiiPatch};
use crate::svg;
use crate::view::{BoardView, Throw, ViewError, result_text, viewport_size};

/// Error raised while mounting or configuring the widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn view_error(err: ViewError<JsValue>) -> JsValue {
    match err {
        ViewError::Geometry(e) => WidgetError::Config(ConfigError::Geometry(e)).into(),
        ViewError::Surface(js) => js,
    }
}

/// State shared between the widget handle and its DOM closures.
struct Shared {
    window: Window,
    view: RefCell<BoardView<CanvasSurface>>,
    on_throw: RefCell<Option<js_sys::Function>>,
    result: RefCell<Option<Element>>,
    fade: RefCell<Option<Timeout>>,
}

impl Shared {
    /// Measure the canvas's container and refit the board.
    fn resize(&self) -> Result<(), JsValue> {
        let mut view = self.view.borrow_mut();
        let container = view
            .surface()
            .canvas()
            .parent_element()
            .map(|parent| (parent.client_width(), parent.client_height()));
        let window = (
            self.window.inner_width()?.as_f64().unwrap_or_default(),
            self.window.inner_height()?.as_f64().unwrap_or_default(),
        );
        let (width, height) = viewport_size(container, window);
        view.resize(width, height, self.window.device_pixel_ratio())
    }
}

/// Interactive dartboard on a canvas element.
#[wasm_bindgen]
pub struct DartboardWidget {
    shared: Rc<Shared>,
    on_pointer: Option<Closure<dyn FnMut(PointerEvent)>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl DartboardWidget {
    /// Mount on the canvas with id `canvas_id`.
    ///
    /// # Errors
    ///
    /// Throws if the canvas or its 2D context is missing, or the options are
    /// invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, options_json: Option<String>) -> Result<DartboardWidget, JsValue> {
        let options = BoardOptions::from_json(options_json.as_deref().unwrap_or_default()).map_err(WidgetError::from)?;
        let (window, canvas, ctx) = mount(canvas_id)?;

        let shared = Rc::new(Shared {
            window,
            view: RefCell::new(BoardView::new(CanvasSurface::new(canvas, ctx), options)),
            on_throw: RefCell::new(None),
            result: RefCell::new(None),
            fade: RefCell::new(None),
        });

        let mut widget = Self { shared, on_pointer: None, on_resize: None };
        widget.attach()?;
        widget.shared.resize()?;
        log::info!("dartboard mounted on #{canvas_id}");
        Ok(widget)
    }

    /// Register `fn(name, value, isDouble)`, or clear it with `undefined`.
    #[wasm_bindgen(js_name = setOnThrow)]
    pub fn set_on_throw(&self, callback: Option<js_sys::Function>) {
        *self.shared.on_throw.borrow_mut() = callback;
    }

    /// Write result text into the element with id `id` after each hit.
    ///
    /// # Errors
    ///
    /// Throws if no such element exists.
    #[wasm_bindgen(js_name = setResultElement)]
    pub fn set_result_element(&self, id: &str) -> Result<(), JsValue> {
        let document = self.shared.window.document().ok_or(WidgetError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| WidgetError::MissingElement(id.to_owned()))?;
        *self.shared.result.borrow_mut() = Some(element);
        Ok(())
    }

    /// # Errors
    ///
    /// Throws if redrawing fails.
    #[wasm_bindgen(js_name = setDebug)]
    pub fn set_debug(&self, debug: bool) -> Result<(), JsValue> {
        self.shared.view.borrow_mut().set_debug(debug)
    }

    /// Merge a partial radii object, e.g. `{"doubleOuter": 0.97}`.
    ///
    /// # Errors
    ///
    /// Throws on malformed JSON or radii that break the ring ordering; the
    /// board keeps its previous radii.
    #[wasm_bindgen(js_name = setRadii)]
    pub fn set_radii(&self, patch_json: &str) -> Result<(), JsValue> {
        let patch = RadiiPatch::from_json(patch_json).map_err(WidgetError::from)?;
        self.shared.view.borrow_mut().set_radii(&patch).map_err(view_error)
    }

    /// Re-measure the canvas.
    ///
    /// # Errors
    ///
    /// Throws if resizing or redrawing fails.
    pub fn resize(&self) -> Result<(), JsValue> {
        self.shared.resize()
    }

    /// # Errors
    ///
    /// Throws if drawing fails.
    pub fn render(&self) -> Result<(), JsValue> {
        self.shared.view.borrow_mut().render()
    }

    /// The last hit as JSON, or `undefined` when nothing is highlighted.
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    #[wasm_bindgen(js_name = lastHitJson)]
    pub fn last_hit_json(&self) -> Result<Option<String>, JsValue> {
        let hit = self.shared.view.borrow().last_hit();
        hit.map(|h| serde_json::to_string(&h))
            .transpose()
            .map_err(|e| WidgetError::from(ConfigError::from(e)).into())
    }

    /// Debug payload for the last hit.
    ///
    /// # Errors
    ///
    /// Throws if serialization fails.
    #[wasm_bindgen(js_name = debugJson)]
    pub fn debug_json(&self) -> Result<Option<String>, JsValue> {
        let info = self.shared.view.borrow().debug_info();
        info.map(|d| serde_json::to_string(&d))
            .transpose()
            .map_err(|e| WidgetError::from(ConfigError::from(e)).into())
    }

    /// Remove listeners and cancel any pending fade.
    pub fn destroy(&mut self) {
        self.detach();
        self.shared.fade.borrow_mut().take();
        log::debug!("dartboard destroyed");
    }
}

impl DartboardWidget {
    fn attach(&mut self) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.shared);
        let on_pointer = Closure::wrap(Box::new(move |ev: PointerEvent| {
            ev.prevent_default();
            if let Some(shared) = weak.upgrade() {
                let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
                handle_pointer(&shared, client);
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        let weak = Rc::downgrade(&self.shared);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                if let Err(err) = shared.resize() {
                    log::error!("dartboard resize failed: {err:?}");
                }
            }
        }) as Box<dyn FnMut()>);

        self.shared
            .view
            .borrow()
            .surface()
            .canvas()
            .add_event_listener_with_callback("pointerdown", on_pointer.as_ref().unchecked_ref())?;
        self.shared
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        self.on_pointer = Some(on_pointer);
        self.on_resize = Some(on_resize);
        Ok(())
    }

    fn detach(&mut self) {
        if let Some(cb) = self.on_pointer.take() {
            let view = self.shared.view.borrow();
            if let Err(err) = view
                .surface()
                .canvas()
                .remove_event_listener_with_callback("pointerdown", cb.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove pointer listener: {err:?}");
            }
        }
        if let Some(cb) = self.on_resize.take() {
            if let Err(err) = self
                .shared
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove resize listener: {err:?}");
            }
        }
    }
}

impl Drop for DartboardWidget {
    fn drop(&mut self) {
        self.detach();
    }
}

fn mount(canvas_id: &str) -> Result<(Window, HtmlCanvasElement, CanvasRenderingContext2d), WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| WidgetError::MissingElement(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WidgetError::NotACanvas(canvas_id.to_owned()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| WidgetError::NoContext)?
        .ok_or(WidgetError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WidgetError::NoContext)?;
    Ok((window, canvas, ctx))
}

// =============================================================
// Event handling
// =============================================================

fn handle_pointer(shared: &Rc<Shared>, client: Point) {
    let (hit, throw, generation, fade_ms) = {
        let mut view = shared.view.borrow_mut();
        let origin = view.surface().client_origin();
        if let Err(err) = view.handle_pointer(client, origin) {
            log::error!("dartboard render failed: {err:?}");
        }
        let Some(hit) = view.last_hit() else {
            return;
        };
        (hit, view.throw_for(&hit), view.generation(), view.options().fade_ms)
    };

    if let Some(el) = shared.result.borrow().as_ref() {
        el.set_text_content(Some(&result_text(&hit)));
    }
    schedule_fade(shared, generation, fade_ms);
    if let Some(throw) = throw {
        forward_throw(shared, &throw);
    }
}

fn schedule_fade(shared: &Rc<Shared>, generation: u64, fade_ms: u32) {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let timeout = Timeout::new(fade_ms, move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        match shared.view.borrow_mut().fade(generation) {
            Ok(true) => log::debug!("highlight {generation} faded"),
            Ok(false) => {}
            Err(err) => log::error!("dartboard fade failed: {err:?}"),
        }
    });
    // Replacing the previous timer cancels it.
    *shared.fade.borrow_mut() = Some(timeout);
}

fn forward_throw(shared: &Shared, throw: &Throw) {
    let callback = shared.on_throw.borrow().clone();
    let Some(callback) = callback else {
        log::info!("throw {} = {}", throw.name, throw.value);
        return;
    };
    if let Err(err) = callback.call3(
        &JsValue::NULL,
        &JsValue::from_str(&throw.name),
        &JsValue::from(throw.value),
        &JsValue::from_bool(throw.is_double),
    ) {
        log::warn!("onThrow callback failed: {err:?}");
    }
}

// =============================================================
// Free functions
// =============================================================

/// Install the panic hook and the console logger. Safe to call twice.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Render a static board as an SVG document string.
///
/// # Errors
///
/// Throws if the options are invalid.
#[wasm_bindgen(js_name = renderBoardSvg)]
pub fn render_board_svg(size: u32, options_json: Option<String>) -> Result<String, JsValue> {
    let options = BoardOptions::from_json(options_json.as_deref().unwrap_or_default()).map_err(WidgetError::from)?;
    svg::render_board_svg(size, options).map_err(|e| JsValue::from_str(&e.to_string()))
}
