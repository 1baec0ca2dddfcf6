mod animation;
mod blog;
mod contact;
mod overlay;
mod sections;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use blog::{BlogPostPage, NotFound};
use contact::Contact;
use overlay::OverlayHost;
use sections::{About, BlogFeed, CustomCursor, Experience, Footer, Hero, Navbar, Tech, Works};

const VIEWPORT_GUTTER: f64 = 14.0;
const HASH_SCROLL_DELAY_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::info!("rendering route {route:?}");

    match route {
        Route::Home => html! { <MainLayout /> },
        Route::BlogPost { slug } => html! { <BlogPostPage slug={slug} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// Keeps a `size`-wide square fully inside the viewport.
pub(crate) fn clamp_to_viewport(x: f64, y: f64, size: f64) -> (f64, f64) {
    let (viewport_width, viewport_height) = viewport_size();
    let min = -VIEWPORT_GUTTER;
    let max_x = (viewport_width - size + VIEWPORT_GUTTER).max(min);
    let max_y = (viewport_height - size + VIEWPORT_GUTTER).max(min);

    (x.clamp(min, max_x), y.clamp(min, max_y))
}

#[hook]
pub(crate) fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_else(|| Rc::new(SiteConfig::from_build_env()))
}

#[derive(Properties, PartialEq)]
pub(crate) struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
}

/// Opens in a new tab and never lets the click reach an enclosing card.
#[function_component(ExternalLink)]
pub(crate) fn external_link(props: &ExternalLinkProps) -> Html {
    let onclick = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <a
            class="link"
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            onclick={onclick}
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

fn scroll_to_section(id: &str) {
    let section = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match section {
        Some(section) => section.scroll_into_view(),
        None => log::debug!("no section #{id} to scroll to"),
    }
}

/// Every navigation starts at the top; a `#section` hash then scrolls that
/// section into view once the page has rendered.
#[function_component(ScrollToHash)]
fn scroll_to_hash() -> Html {
    let location = use_location();

    use_effect_with(location, |location| {
        if let Some(win) = window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }

        let pending = location
            .as_ref()
            .map(|location| location.hash().trim_start_matches('#').to_string())
            .filter(|id| !id.is_empty())
            .map(|id| Timeout::new(HASH_SCROLL_DELAY_MS, move || scroll_to_section(&id)));

        move || drop(pending)
    });

    html! {}
}

#[function_component(MainLayout)]
fn main_layout() -> Html {
    html! {
        <OverlayHost>
            <Navbar />
            <main id="content">
                <Hero />
                <About />
                <Experience />
                <Tech />
                <Works />
                <BlogFeed />
                <Contact />
            </main>
            <Footer />
            <CustomCursor />
        </OverlayHost>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <ScrollToHash />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!(
        "starting portfolio, email relay {}",
        if config.relay.is_some() { "configured" } else { "not configured" }
    );

    let props = AppProps {
        config: Rc::new(config),
    };
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match root {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => {
            log::warn!("missing #app mount point, rendering into <body>");
            yew::Renderer::<App>::with_props(props).render()
        }
    };
}
