//! Hash router.
//!
//! The router owns the only mutable page state: which route is mounted and,
//! for the hero route, the live scroll subscription driving the dot. The
//! document itself is reached through a [`RenderTarget`] handed in at
//! construction, so the whole navigate/render/animate cycle runs natively in
//! tests.
//!
//! # Lifecycle
//!
//! ```text
//! navigate(fragment)
//!   -> Route::from_fragment
//!   -> render(route, params)           pure
//!   -> target.replace_markup           MountMissing aborts here
//!   -> dispose previous AnimationHandle
//!   -> attach_animation                hero only; skipped if elements missing
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error};

use crate::arc::{AnimationScene, DotAnimator, DotPosition, animate_frame, settle_scene};
use crate::config::{SceneSelectors, SiteConfig};
use crate::error::Result;
use crate::route::Route;
use crate::view::{BuiltinViews, ViewParams, ViewSource, wrap_card};

/// A registered scroll listener that can be removed.
pub trait ScrollSubscription {
    fn dispose(self);
}

/// The document the router renders into.
pub trait RenderTarget {
    /// Handles to the hero scroll container, track, and dot.
    type Scene: AnimationScene + Clone + 'static;
    type Subscription: ScrollSubscription;

    /// Replace the mount point's contents wholesale.
    fn replace_markup(&mut self, mount_id: &str, markup: &str) -> Result<()>;

    /// Find the animation elements, or `None` if any of them is absent.
    fn locate_scene(&self, selectors: &SceneSelectors) -> Option<Self::Scene>;

    /// Call `on_scroll` on every scroll event of the scene's container.
    fn subscribe_scroll(
        &mut self,
        scene: &Self::Scene,
        on_scroll: Box<dyn FnMut()>,
    ) -> Self::Subscription;
}

/// Live animation for one mount of the hero view.
pub struct AnimationHandle<L> {
    animator: Rc<RefCell<DotAnimator>>,
    subscription: L,
}

impl<L: ScrollSubscription> AnimationHandle<L> {
    #[must_use]
    pub fn position(&self) -> Option<DotPosition> {
        self.animator.borrow().position()
    }

    /// Remove the scroll listener.
    pub fn dispose(self) {
        self.subscription.dispose();
    }
}

/// Result of one successful navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation {
    pub route: Route,
    /// Resting dot position when the hero animation was wired.
    pub dot: Option<DotPosition>,
}

impl Navigation {
    #[must_use]
    pub fn animated(&self) -> bool {
        self.dot.is_some()
    }
}

pub struct Router<T: RenderTarget, V = BuiltinViews> {
    target: T,
    views: V,
    config: SiteConfig,
    current: Option<Route>,
    animation: Option<AnimationHandle<T::Subscription>>,
}

impl<T: RenderTarget> Router<T> {
    #[must_use]
    pub fn new(target: T, config: SiteConfig) -> Self {
        Self::with_views(target, config, BuiltinViews)
    }
}

impl<T: RenderTarget, V: ViewSource> Router<T, V> {
    #[must_use]
    pub fn with_views(target: T, config: SiteConfig, views: V) -> Self {
        Self {
            target,
            views,
            config,
            current: None,
            animation: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Route currently mounted, if any render has succeeded.
    #[must_use]
    pub fn current_route(&self) -> Option<Route> {
        self.current
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Last dot position written by the live animation.
    #[must_use]
    pub fn dot_position(&self) -> Option<DotPosition> {
        self.animation.as_ref().and_then(AnimationHandle::position)
    }

    /// Markup for a route, card views wrapped. No side effects.
    #[must_use]
    pub fn render(&self, route: Route, params: &ViewParams) -> String {
        wrap_card(route, &self.views.render(route, params))
    }

    /// Parameters the router passes to each view.
    #[must_use]
    pub fn params_for(route: Route) -> ViewParams {
        if route.is_card() {
            ViewParams::active_card(route)
        } else {
            ViewParams::new()
        }
    }

    /// Resolve `fragment`, mount the matching view, and wire the hero
    /// animation when applicable.
    pub fn navigate(&mut self, fragment: &str) -> Result<Navigation> {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = if path.is_empty() {
            self.config.default_fragment.as_str()
        } else {
            path
        };
        let route = Route::from_fragment(path);
        let markup = self.render(route, &Self::params_for(route));

        self.target.replace_markup(&self.config.mount_id, &markup)?;
        self.dispose_animation();
        self.current = Some(route);
        debug!(%route, fragment, bytes = markup.len(), "view mounted");

        let dot = if route == Route::Hero {
            self.attach_animation()
        } else {
            None
        };
        Ok(Navigation { route, dot })
    }

    /// Event-handler entry point: like [`Router::navigate`], but a missing
    /// mount point is logged and swallowed.
    pub fn handle_navigation(&mut self, fragment: &str) -> Option<Navigation> {
        match self.navigate(fragment) {
            Ok(nav) => Some(nav),
            Err(err) => {
                error!(%err, fragment, "render aborted");
                None
            }
        }
    }

    /// Locate the hero elements, place the dot at rest, and listen for
    /// scroll. Returns the resting position, or `None` when any element is
    /// missing.
    pub fn attach_animation(&mut self) -> Option<DotPosition> {
        self.dispose_animation();
        let Some(scene) = self.target.locate_scene(&self.config.scene) else {
            debug!(
                container = %self.config.scene.scroll_container,
                track = %self.config.scene.track,
                dot = %self.config.scene.dot,
                "animation elements missing; skipping dot animation"
            );
            return None;
        };

        let animator = Rc::new(RefCell::new(DotAnimator::new(self.config.arc)));
        let rest = settle_scene(&scene, &mut animator.borrow_mut());

        let frame_scene = scene.clone();
        let frame_animator = Rc::clone(&animator);
        let subscription = self.target.subscribe_scroll(
            &scene,
            Box::new(move || {
                animate_frame(&frame_scene, &mut frame_animator.borrow_mut());
            }),
        );

        debug!(x = rest.x, y = rest.y, "dot animation attached");
        self.animation = Some(AnimationHandle {
            animator,
            subscription,
        });
        Some(rest)
    }

    /// Remove the live scroll listener, if any.
    pub fn teardown(&mut self) {
        self.dispose_animation();
    }

    fn dispose_animation(&mut self) {
        if let Some(handle) = self.animation.take() {
            handle.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::{DotStyle, ScrollMetrics, TrackGeometry};
    use crate::error::RouterError;
    use pretty_assertions::assert_eq;

    #[derive(Clone)]
    struct InertScene;

    impl AnimationScene for InertScene {
        fn scroll_metrics(&self) -> ScrollMetrics {
            ScrollMetrics {
                scroll_top: 0.0,
                scroll_height: 0.0,
                client_height: 0.0,
            }
        }

        fn track_geometry(&self) -> TrackGeometry {
            TrackGeometry {
                track_left: 0.0,
                track_top: 0.0,
                track_width: 0.0,
                track_height: 0.0,
                dot_width: 0.0,
            }
        }

        fn place_dot(&self, _style: &DotStyle) {}
    }

    struct Noop;

    impl ScrollSubscription for Noop {
        fn dispose(self) {}
    }

    /// Records markup; never exposes a scene.
    #[derive(Default)]
    struct Sink {
        mounted: bool,
        markup: Option<String>,
    }

    impl RenderTarget for Sink {
        type Scene = InertScene;
        type Subscription = Noop;

        fn replace_markup(&mut self, mount_id: &str, markup: &str) -> Result<()> {
            if !self.mounted {
                return Err(RouterError::mount_missing(mount_id));
            }
            self.markup = Some(markup.to_owned());
            Ok(())
        }

        fn locate_scene(&self, _selectors: &SceneSelectors) -> Option<InertScene> {
            None
        }

        fn subscribe_scroll(&mut self, _scene: &InertScene, _on_scroll: Box<dyn FnMut()>) -> Noop {
            Noop
        }
    }

    fn router() -> Router<Sink> {
        Router::new(
            Sink {
                mounted: true,
                markup: None,
            },
            SiteConfig::default(),
        )
    }

    #[test]
    fn render_wraps_only_cards() {
        let router = router();
        let hero = router.render(Route::Hero, &ViewParams::new());
        assert!(!hero.contains("class=\"wrapper\""));

        let card_a = router.render(Route::CardA, &ViewParams::active_card(Route::CardA));
        assert!(card_a.starts_with("<div class=\"wrapper\">"));
        assert!(card_a.contains("<div class=\"card-wrapper light\">"));

        let card_b = router.render(Route::CardB, &ViewParams::active_card(Route::CardB));
        assert!(card_b.contains("<div class=\"card-wrapper\">"));
        assert!(!card_b.contains("light"));
    }

    #[test]
    fn params_only_for_cards() {
        assert!(Router::<Sink>::params_for(Route::Hero).is_empty());
        assert_eq!(
            Router::<Sink>::params_for(Route::CardA).get("activeCard"),
            Some("cardA")
        );
    }

    #[test]
    fn empty_fragment_uses_default() {
        let mut router = router();
        assert_eq!(router.config().default_fragment, "/hero");
        let nav = router.navigate("").unwrap();
        assert_eq!(nav.route, Route::Hero);
        assert!(!nav.animated());
        assert_eq!(router.current_route(), Some(Route::Hero));
    }

    #[test]
    fn only_one_hash_is_stripped() {
        let mut router = router();
        assert_eq!(router.navigate("#/cards/cardA").unwrap().route, Route::CardA);
        assert_eq!(router.navigate("/cards/cardA").unwrap().route, Route::CardA);
        assert_eq!(router.navigate("##/cards/cardA").unwrap().route, Route::Hero);
        assert_eq!(router.navigate("##/cards/cardB").unwrap().route, Route::Hero);
    }

    #[test]
    fn navigate_writes_rendered_markup() {
        let mut router = router();
        router.navigate("#/cards/cardB").unwrap();
        let expected = router.render(Route::CardB, &ViewParams::active_card(Route::CardB));
        assert_eq!(router.target().markup.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn missing_mount_is_reported_not_raised() {
        let mut router = Router::new(Sink::default(), SiteConfig::default());
        assert!(matches!(
            router.navigate("/cards/cardA"),
            Err(RouterError::MountMissing { ref id }) if id == "app"
        ));
        assert_eq!(router.handle_navigation("/cards/cardA"), None);
        assert_eq!(router.current_route(), None);
    }

    #[test]
    fn custom_views_are_used() {
        let mut router = Router::with_views(
            Sink {
                mounted: true,
                markup: None,
            },
            SiteConfig::default(),
            |route: Route, _: &ViewParams| format!("<p>{route}</p>"),
        );
        router.navigate("/cards/cardA").unwrap();
        assert_eq!(
            router.target().markup.as_deref(),
            Some("<div class=\"wrapper\">\n  <div class=\"card-wrapper light\">\n    <p>cardA</p>\n  </div>\n</div>")
        );
    }
}
