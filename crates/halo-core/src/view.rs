//! View registry: route plus parameters in, markup out.
//!
//! Views are pure. They never see the document, and the router only ever
//! hands them one of the three known routes, so there is no error path.

use std::collections::BTreeMap;

use crate::route::Route;

/// Parameter key naming the card that should render as selected.
pub const ACTIVE_CARD: &str = "activeCard";

/// Named string parameters passed to a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    values: BTreeMap<String, String>,
}

impl ViewParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a card view: `activeCard = <route key>`.
    #[must_use]
    pub fn active_card(route: Route) -> Self {
        let mut params = Self::new();
        params.insert(ACTIVE_CARD, route.key());
        params
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Source of markup for each route.
pub trait ViewSource {
    fn render(&self, route: Route, params: &ViewParams) -> String;
}

impl<F> ViewSource for F
where
    F: Fn(Route, &ViewParams) -> String,
{
    fn render(&self, route: Route, params: &ViewParams) -> String {
        self(route, params)
    }
}

/// Stock markup for the three pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinViews;

impl ViewSource for BuiltinViews {
    fn render(&self, route: Route, params: &ViewParams) -> String {
        match route {
            Route::Hero => hero(),
            Route::CardA => card(
                params,
                "Orbit",
                "Plan launches around the people who actually ship them.",
            ),
            Route::CardB => card(
                params,
                "Drift",
                "Keep every handoff moving without chasing status updates.",
            ),
        }
    }
}

/// Wrap card markup in the two-level decorative container.
///
/// Hero markup is returned unchanged.
#[must_use]
pub fn wrap_card(route: Route, inner: &str) -> String {
    let variant = match route {
        Route::Hero => return inner.to_owned(),
        Route::CardA => "card-wrapper light",
        Route::CardB => "card-wrapper",
    };
    format!(
        "<div class=\"wrapper\">\n  <div class=\"{variant}\">\n    {inner}\n  </div>\n</div>"
    )
}

fn hero() -> String {
    concat!(
        "<section class=\"hero\">",
        "<div class=\"circle-hero\"><span class=\"dot-hero\"></span></div>",
        "<div class=\"dot-scroll\">",
        "<article class=\"hero-panel\"><h1>Work that moves in orbit</h1>",
        "<p>Scroll to follow the signal.</p></article>",
        "<article class=\"hero-panel\"><h2>Plan</h2>",
        "<p>Line up the next launch window.</p></article>",
        "<article class=\"hero-panel\"><h2>Ship</h2>",
        "<p>Hand off without losing momentum.</p></article>",
        "</div>",
        "<nav class=\"hero-cta\"><a href=\"#/cards/cardA\">Explore the cards</a></nav>",
        "</section>",
    )
    .to_owned()
}

fn card(params: &ViewParams, title: &str, body: &str) -> String {
    let active = params.get(ACTIVE_CARD).unwrap_or_default();
    let mut out = String::with_capacity(512);
    out.push_str("<article class=\"card\">");
    out.push_str(&card_selector(active));
    out.push_str("<h2 class=\"card-title\">");
    out.push_str(&v_htmlescape::escape(title).to_string());
    out.push_str("</h2><p class=\"card-body\">");
    out.push_str(&v_htmlescape::escape(body).to_string());
    out.push_str("</p><a class=\"card-back\" href=\"#/\">Back</a></article>");
    out
}

fn card_selector(active: &str) -> String {
    let mut out = String::from("<nav class=\"card-selector\" data-active=\"");
    out.push_str(&v_htmlescape::escape(active).to_string());
    out.push_str("\">");
    for route in [Route::CardA, Route::CardB] {
        let class = if route.key() == active {
            "selector-item active"
        } else {
            "selector-item"
        };
        out.push_str(&format!(
            "<a class=\"{class}\" href=\"#{}\">{}</a>",
            route.fragment(),
            route.key()
        ));
    }
    out.push_str("</nav>");
    out
}
