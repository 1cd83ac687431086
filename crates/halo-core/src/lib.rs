#![forbid(unsafe_code)]

//! `halo-core` holds everything the Halo site does that does not touch a
//! live document.
//!
//! - [`route`]: hash fragment to [`Route`] classification.
//! - [`view`]: the view registry that turns a route into markup.
//! - [`arc`]: scroll-to-angle interpolation for the decorative dot.
//! - [`router`]: the router state machine, driven through a [`RenderTarget`].
//!
//! The browser binding lives in `halo-web`; tests drive the router through an
//! in-memory target instead.

pub mod arc;
pub mod config;
pub mod error;
pub mod route;
pub mod router;
pub mod view;

pub use arc::{
    AnimationScene, ArcPath, DotAnimator, DotPosition, DotStyle, ScrollMetrics, TrackGeometry,
    animate_frame, compute_dot_position, resting_position, scroll_percent, settle_scene,
};
pub use config::{SceneSelectors, SiteConfig};
pub use error::{Result, RouterError};
pub use route::Route;
pub use router::{AnimationHandle, Navigation, RenderTarget, Router, ScrollSubscription};
pub use view::{BuiltinViews, ViewParams, ViewSource, wrap_card};
