#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for the Halo site.
//!
//! [`HaloSite`] wraps a [`Router`] over the live document and owns the
//! window/document listeners that drive it. Only compiled on `wasm32`.

use std::cell::RefCell;
use std::rc::Rc;

use halo_core::{Router, SiteConfig};
use js_sys::{Object, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, Window};

use crate::dom::DomTarget;
use crate::logging;

type SharedRouter = Rc<RefCell<Router<DomTarget>>>;

thread_local! {
    static SITE: RefCell<Option<HaloSite>> = const { RefCell::new(None) };
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            web_sys::console::error_1(&JsValue::from_str(&msg));
        }));
    });
}

fn set_js(obj: &Object, key: &str, value: JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

fn current_hash(window: &Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Run one navigation for the current location hash.
fn route_current(router: &SharedRouter, window: &Window) {
    let hash = current_hash(window);
    match router.try_borrow_mut() {
        Ok(mut router) => {
            router.handle_navigation(&hash);
        }
        Err(_) => warn!(hash = %hash, "navigation re-entered while rendering; ignored"),
    }
}

/// An event listener removed on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut()>::new(handler);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target,
                event,
                closure,
            }),
            Err(err) => {
                warn!(event, error = ?err, "failed to attach listener");
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            warn!(event = self.event, error = ?err, "failed to remove listener");
        }
    }
}

/// Hash-routed site bound to the page's document.
#[wasm_bindgen]
pub struct HaloSite {
    window: Window,
    document: Document,
    router: SharedRouter,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl HaloSite {
    /// Create a site. `config_json` overrides [`SiteConfig`] defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<HaloSite, JsValue> {
        install_panic_hook();
        let config = match config_json.as_deref() {
            Some(json) => SiteConfig::from_json_str(json)
                .map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => SiteConfig::default(),
        };
        logging::init(&config.log_level);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let router = Router::new(DomTarget::new(document.clone()), config);
        Ok(Self {
            window,
            document,
            router: Rc::new(RefCell::new(router)),
            listeners: Vec::new(),
        })
    }

    /// Listen for `hashchange` and render the current location, waiting for
    /// `DOMContentLoaded` if the document is still loading.
    pub fn mount(&mut self) {
        if !self.listeners.is_empty() {
            return;
        }

        let router = Rc::clone(&self.router);
        let window = self.window.clone();
        self.listeners.extend(Listener::attach(
            self.window.clone().into(),
            "hashchange",
            move || route_current(&router, &window),
        ));

        if self.document.ready_state() == "loading" {
            debug!("document loading; deferring first render");
            let router = Rc::clone(&self.router);
            let window = self.window.clone();
            self.listeners.extend(Listener::attach(
                self.document.clone().into(),
                "DOMContentLoaded",
                move || route_current(&router, &window),
            ));
        } else {
            route_current(&self.router, &self.window);
        }
    }

    /// Render `fragment` directly. Returns `false` if the mount point is
    /// missing.
    pub fn navigate(&mut self, fragment: &str) -> bool {
        self.router.borrow_mut().handle_navigation(fragment).is_some()
    }

    /// Key of the mounted route, if any.
    #[wasm_bindgen(js_name = currentRoute)]
    pub fn current_route(&self) -> Option<String> {
        self.router
            .borrow()
            .current_route()
            .map(|route| route.key().to_owned())
    }

    /// `{x, y, angle}` of the dot, or `null` when no animation is live.
    #[wasm_bindgen(js_name = dotPosition)]
    pub fn dot_position(&self) -> JsValue {
        let Some(pos) = self.router.borrow().dot_position() else {
            return JsValue::NULL;
        };
        let obj = Object::new();
        set_js(&obj, "x", JsValue::from(pos.x));
        set_js(&obj, "y", JsValue::from(pos.y));
        set_js(&obj, "angle", JsValue::from(pos.angle_deg));
        obj.into()
    }

    /// Remove every listener this site attached.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        if let Ok(mut router) = self.router.try_borrow_mut() {
            router.teardown();
        }
    }
}

impl Drop for HaloSite {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Build the page's site and keep it alive for the page lifetime.
///
/// Calling again replaces the previous site after tearing it down.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<(), JsValue> {
    SITE.with(|slot| drop(slot.borrow_mut().take()));
    let mut site = HaloSite::new(config_json)?;
    site.mount();
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}
