#![forbid(unsafe_code)]

//! `web-sys` implementation of the router's render target.

use halo_core::error::Result;
use halo_core::router::{RenderTarget, ScrollSubscription};
use halo_core::{AnimationScene, DotStyle, RouterError, SceneSelectors, ScrollMetrics, TrackGeometry};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement};

const SCROLL: &str = "scroll";

/// The live document.
pub struct DomTarget {
    document: Document,
}

impl DomTarget {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            Err(err) => {
                warn!(selector, error = ?err, "invalid selector");
                None
            }
        }
    }
}

impl RenderTarget for DomTarget {
    type Scene = DomScene;
    type Subscription = DomScrollSubscription;

    fn replace_markup(&mut self, mount_id: &str, markup: &str) -> Result<()> {
        let mount = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| RouterError::mount_missing(mount_id))?;
        mount.set_inner_html(markup);
        Ok(())
    }

    fn locate_scene(&self, selectors: &SceneSelectors) -> Option<DomScene> {
        Some(DomScene {
            container: self.query(&selectors.scroll_container)?,
            track: self.query(&selectors.track)?,
            dot: self.query(&selectors.dot)?,
        })
    }

    fn subscribe_scroll(
        &mut self,
        scene: &DomScene,
        on_scroll: Box<dyn FnMut()>,
    ) -> DomScrollSubscription {
        let closure = Closure::wrap(on_scroll);
        let target: EventTarget = scene.container.clone().into();
        if let Err(err) =
            target.add_event_listener_with_callback(SCROLL, closure.as_ref().unchecked_ref())
        {
            warn!(error = ?err, "failed to attach scroll listener");
        }
        DomScrollSubscription { target, closure }
    }
}

/// Hero scroll container, track, and dot.
#[derive(Clone)]
pub struct DomScene {
    container: HtmlElement,
    track: HtmlElement,
    dot: HtmlElement,
}

impl AnimationScene for DomScene {
    fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: f64::from(self.container.scroll_top()),
            scroll_height: f64::from(self.container.scroll_height()),
            client_height: f64::from(self.container.client_height()),
        }
    }

    fn track_geometry(&self) -> TrackGeometry {
        let rect = self.track.get_bounding_client_rect();
        TrackGeometry {
            track_left: rect.left(),
            track_top: rect.top(),
            track_width: f64::from(self.track.offset_width()),
            track_height: f64::from(self.track.offset_height()),
            dot_width: f64::from(self.dot.offset_width()),
        }
    }

    fn place_dot(&self, style: &DotStyle) {
        let css = self.dot.style();
        for (property, value) in style.declarations() {
            if let Err(err) = css.set_property(property, value) {
                warn!(property, error = ?err, "failed to style dot");
            }
        }
    }
}

/// Scroll listener on the hero container; removed on dispose.
pub struct DomScrollSubscription {
    target: EventTarget,
    closure: Closure<dyn FnMut()>,
}

impl ScrollSubscription for DomScrollSubscription {
    fn dispose(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(SCROLL, self.closure.as_ref().unchecked_ref())
        {
            warn!(error = ?err, "failed to remove scroll listener");
        }
    }
}
