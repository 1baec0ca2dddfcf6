use chrono::Datelike;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent, WheelEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{
    animation::{use_motion, use_scroll_progress, ElementStyle, FrameLoop, RevealBox},
    clamp_to_viewport,
    overlay::use_project_overlay,
    prefers_reduced_motion, use_site_config, ExternalLink, Route,
};
use crate::{
    content::{
        technology_columns, Project, AVAILABILITY, BLOG_POSTS, EXPERIENCES, NAV_LINKS, OWNER_NAME,
        PROJECTS, SERVICES, SOCIALS,
    },
    driver::{Property, StyleSink},
    motion::{stagger, Direction, Easing, Mapping, Reveal},
    overlay::OverlayEvent,
    scroll::{ProgressSignal, ScrollRange},
};

const SCROLLED_OFFSET_PX: f64 = 100.0;

const QUOTE_CHUNKS: [&str; 6] = [
    "The impediment",
    "to action",
    "advances action.",
    "What stands",
    "in the way",
    "becomes the way.",
];
const QUOTE_AUTHOR: &str = "— Marcus Aurelius";
const QUOTE_ILLUMINATION: (f64, f64) = (0.35, 0.75);
const QUOTE_DIM: &str = "#333333";

const TECH_COLUMNS: usize = 4;
const TECH_PARALLAX_PX: [f64; TECH_COLUMNS] = [80.0, 120.0, 100.0, 140.0];

const CURSOR_SIZE: f64 = 40.0;
const BLOG_CARD_STEP_PX: f64 = 340.0;
const BLOG_CARD_GAP_PX: f64 = 20.0;

const STAR_COUNT: usize = 1_500;
const STAR_RADIUS: f64 = 1.2;
const STAR_COLOR: &str = "#f272c8";

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let active = use_state_eq(|| None::<&'static str>);
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let target = win.clone();
                EventListener::new(&target, "scroll", move |_| {
                    let offset = win.scroll_y().unwrap_or(0.0);
                    scrolled.set(offset > SCROLLED_OFFSET_PX);
                })
            });
            move || drop(listener)
        });
    }

    let links = |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let onclick = {
                    let active = active.clone();
                    let menu_open = menu_open.clone();
                    Callback::from(move |_: MouseEvent| {
                        active.set(Some(link.title));
                        if mobile {
                            menu_open.set(false);
                        }
                    })
                };
                let is_active = *active == Some(link.title);

                html! {
                    <li key={link.id} class={classes!(is_active.then_some("is-active"))} onclick={onclick}>
                        <a href={format!("#{}", link.id)}>{link.title}</a>
                    </li>
                }
            })
            .collect::<Html>()
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("is-scrolled"))}>
            <div class="navbar-inner">
                <div class="availability">
                    <span class="availability-dot" aria-hidden="true"></span>
                    <div class="availability-copy">
                        <span>{"Available for project"}</span>
                        <span class="muted">{AVAILABILITY}</span>
                    </div>
                </div>

                <ul class="nav-links">{links(false)}</ul>

                <div class="nav-mobile">
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label="Menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <img src={if *menu_open { "/assets/close.svg" } else { "/assets/menu.svg" }} alt="Menu" />
                    </button>
                    <ul class={classes!("nav-mobile-links", menu_open.then_some("is-open"))}>{links(true)}</ul>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct QuoteChunkProps {
    signal: ProgressSignal,
    index: usize,
    text: &'static str,
}

/// One line of the hero quote, lit up during its own slice of the scroll.
#[function_component(QuoteChunk)]
fn quote_chunk(props: &QuoteChunkProps) -> Html {
    let node = use_node_ref();
    let (from, to) = QUOTE_ILLUMINATION;
    let span = (to - from) / QUOTE_CHUNKS.len() as f64;
    let start = from + props.index as f64 * span;

    use_motion(
        &props.signal,
        &node,
        Property::Color,
        move || Mapping::new([(start, QUOTE_DIM), (start + span, "#ffffff")]),
    );

    html! {
        <span ref={node} class="quote-chunk">{props.text}</span>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let portrait = use_node_ref();
    let panel = use_node_ref();
    let opening_mark = use_node_ref();
    let quote = use_node_ref();
    let author = use_node_ref();
    let closing_mark = use_node_ref();
    let hint = use_node_ref();

    let progress = use_scroll_progress(&section, ScrollRange::PINNED);

    use_motion(&progress, &portrait, Property::Opacity, move || Mapping::new([(0.0, 1.0), (0.25, 0.0)]));
    use_motion(&progress, &panel, Property::TranslateY, move || Mapping::new([(0.0, "100%"), (0.25, "0%")]));
    use_motion(&progress, &opening_mark, Property::Opacity, move || Mapping::new([(0.15, 0.0), (0.3, 1.0)]));
    use_motion(&progress, &quote, Property::Opacity, move || Mapping::new([(0.15, 0.0), (0.3, 1.0)]));
    use_motion(&progress, &author, Property::Opacity, move || Mapping::new([(0.15, 0.0), (0.3, 1.0)]));
    use_motion(&progress, &author, Property::Color, move || Mapping::new([(0.75, QUOTE_DIM), (0.85, "#915eff")]));
    use_motion(&progress, &closing_mark, Property::Opacity, move || Mapping::new([(0.15, 0.0), (0.3, 1.0)]));
    use_motion(&progress, &hint, Property::Opacity, move || Mapping::new([(0.0, 1.0), (0.1, 0.0)]));

    html! {
        <section ref={section} class="hero">
            <div class="hero-sticky">
                <div ref={portrait} class="hero-portrait">
                    <img src="/assets/vincenzo.png" alt={OWNER_NAME} />
                </div>

                <div ref={panel} class="hero-panel">
                    <div class="hero-quote">
                        <div ref={opening_mark} class="quote-mark">{"\""}</div>
                        <h1 ref={quote} class="quote-text">
                            { for QUOTE_CHUNKS.iter().enumerate().map(|(index, text)| html! {
                                <QuoteChunk key={index} signal={progress.clone()} index={index} text={*text} />
                            }) }
                        </h1>
                        <p ref={author} class="quote-author">{QUOTE_AUTHOR}</p>
                        <div ref={closing_mark} class="quote-mark is-closing">{"\""}</div>
                    </div>
                </div>

                <div ref={hint} class="scroll-hint" aria-hidden="true">
                    <div class="scroll-hint-frame">
                        <span class="scroll-hint-dot"></span>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn service_icon(index: usize) -> Html {
    match index % 4 {
        0 => html! {
            <svg width="28" height="28" viewBox="0 0 28 28" fill="none">
                <rect x="2" y="8" width="6" height="12" fill="#1a1a1a" opacity="0.8" />
                <rect x="11" y="6" width="6" height="16" fill="#1a1a1a" opacity="0.6" />
                <rect x="20" y="10" width="6" height="8" fill="#1a1a1a" opacity="0.4" />
            </svg>
        },
        1 => html! {
            <svg width="28" height="28" viewBox="0 0 28 28" fill="none">
                <path d="M14 2 L26 8 L26 20 L14 26 L2 20 L2 8 Z" stroke="#1a1a1a" stroke-width="2" opacity="0.7" />
                <circle cx="14" cy="14" r="4" fill="#1a1a1a" opacity="0.5" />
            </svg>
        },
        2 => html! {
            <svg width="28" height="28" viewBox="0 0 28 28" fill="none">
                <circle cx="14" cy="14" r="3" fill="#1a1a1a" opacity="0.7" />
                <ellipse cx="14" cy="14" rx="12" ry="5" stroke="#1a1a1a" stroke-width="1.5" opacity="0.5" />
                <ellipse cx="14" cy="14" rx="5" ry="12" stroke="#1a1a1a" stroke-width="1.5" opacity="0.5" transform="rotate(60 14 14)" />
            </svg>
        },
        _ => html! {
            <svg width="28" height="28" viewBox="0 0 28 28" fill="none">
                <rect x="4" y="8" width="20" height="12" stroke="#1a1a1a" stroke-width="2" opacity="0.7" />
                <path d="M11 14 L17 14" stroke="#1a1a1a" stroke-width="2" opacity="0.5" />
            </svg>
        },
    }
}

fn service_row(reversed: bool) -> Html {
    let count = SERVICES.len();
    // Four copies so the loop can wrap without a visible seam.
    let items = (0..count * 4).map(|slot| {
        let index = if reversed { count - 1 - slot % count } else { slot % count };
        let service = &SERVICES[slot % count];
        html! {
            <div key={slot} class="service-item">
                <div class="service-icon">{service_icon(index)}</div>
                <h3>{service.title}</h3>
                <span class="service-separator"></span>
            </div>
        }
    });

    html! {
        <div class="carousel-track">
            <div class={classes!("carousel-row", reversed.then_some("is-reversed"))}>
                { for items }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let aurora = use_node_ref();
    let backdrop = use_node_ref();

    let progress = use_scroll_progress(&section, ScrollRange::THROUGH_VIEWPORT);

    use_motion(&progress, &aurora, Property::Scale, move || Mapping::new([(0.0, 0.0), (0.3, 2.5)]));
    use_motion(
        &progress,
        &aurora,
        Property::Opacity,
        move || Mapping::new([(0.0, 0.0), (0.2, 1.0), (0.3, 0.8)]),
    );
    use_motion(&progress, &backdrop, Property::Opacity, move || Mapping::new([(0.0, 0.0), (0.3, 1.0)]));

    html! {
        <div ref={section} class="about-wrapper">
            <div class="aurora-clip" aria-hidden="true">
                <div ref={aurora} class="aurora"></div>
            </div>
            <div ref={backdrop} class="about-backdrop" aria-hidden="true"></div>

            <section id="about" class="section-inner on-light">
                <RevealBox reveal={Reveal::text(0.0)}>
                    <p class="section-subtext">{"Professional Profile"}</p>
                    <h2 class="section-headtext">{"About."}</h2>
                </RevealBox>

                <RevealBox reveal={Reveal::fade_in(None, Easing::EaseOut, 0.1, 1.0)} class="about-copy">
                    <p>
                        {"I'm a Senior Full Stack Developer with deep expertise in backend \
                          architectures and DevSecOps practices. My approach to complex problem-solving \
                          emphasizes elegant, maintainable solutions over unnecessary over-engineering."}
                    </p>
                    <p class="muted">
                        {"With extensive experience in PHP/Laravel ecosystem, modern JavaScript frameworks \
                          like React and Vue.js, and containerization technologies including Docker and \
                          Kubernetes, I deliver scalable enterprise solutions."}
                    </p>
                </RevealBox>

                <div class="carousel">
                    {service_row(false)}
                    {service_row(true)}
                </div>

                <div class="divider"></div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceCardProps {
    index: usize,
    active: bool,
    on_select: Callback<usize>,
}

#[function_component(ExperienceCard)]
fn experience_card(props: &ExperienceCardProps) -> Html {
    let Some(experience) = EXPERIENCES.get(props.index) else {
        return html! {};
    };

    let onclick = {
        let on_select = props.on_select.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_select.emit(index))
    };

    html! {
        <div
            class={classes!("experience-card", props.active.then_some("is-active"))}
            style={format!("animation-delay: {}s;", stagger(props.index, 0.1))}
            onclick={onclick}
        >
            <div class="experience-logo" style={format!("background-color: {};", experience.icon_bg)}>
                <img src={experience.icon} alt={experience.company_name} />
            </div>
            <h3>{experience.title}</h3>
            <p class="experience-company">{experience.company_name}</p>
            <span class="date-badge">{experience.date}</span>
            if props.active {
                <ul class="experience-points">
                    { for experience.points.iter().enumerate().map(|(index, point)| html! {
                        <li key={index} style={format!("animation-delay: {}s;", stagger(index, 0.1))}>{*point}</li>
                    }) }
                </ul>
            }
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    let active = use_state_eq(|| 0usize);
    let section = use_node_ref();
    let blob_up = use_node_ref();
    let blob_down = use_node_ref();
    let rule = use_node_ref();

    let progress = use_scroll_progress(&section, ScrollRange::THROUGH_VIEWPORT);

    use_motion(&progress, &blob_up, Property::TranslateY, move || Mapping::new([(0.0, 0.0), (1.0, -100.0)]));
    use_motion(&progress, &blob_down, Property::TranslateY, move || Mapping::new([(0.0, 0.0), (1.0, 100.0)]));
    use_motion(&progress, &rule, Property::Rotate, move || Mapping::new([(0.0, 0.0), (1.0, 15.0)]));

    let on_select = {
        let active = active.clone();
        Callback::from(move |index: usize| active.set(index))
    };

    let year = EXPERIENCES
        .get(*active)
        .map(|experience| experience.start_year())
        .unwrap_or_default();
    let completion = (*active + 1) as f64 / EXPERIENCES.len().max(1) as f64 * 100.0;

    html! {
        <div ref={section} class="experience-wrapper">
            <div ref={blob_up} class="blob blob-violet" aria-hidden="true"></div>
            <div ref={blob_down} class="blob blob-teal" aria-hidden="true"></div>
            <div ref={rule} class="experience-rule" aria-hidden="true"></div>

            <section id="work" class="section-inner on-light">
                <RevealBox reveal={Reveal::text(0.0)}>
                    <p class="section-subtext">{"What I have done so far"}</p>
                    <h2 class="section-headtext">{"Work Experience."}</h2>
                </RevealBox>

                <div class="timeline" role="tablist">
                    { for (0..EXPERIENCES.len()).map(|index| {
                        let on_select = on_select.clone();
                        html! {
                            <button
                                key={index}
                                type="button"
                                role="tab"
                                aria-selected={(*active == index).to_string()}
                                aria-label={format!("Show experience {}", index + 1)}
                                class={classes!("timeline-step", (*active == index).then_some("is-active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(index))}
                            />
                        }
                    }) }
                </div>

                <div class="experience-grid">
                    { for (0..EXPERIENCES.len()).map(|index| html! {
                        <ExperienceCard
                            key={index}
                            index={index}
                            active={*active == index}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>

                <div key={*active} class="floating-year" aria-hidden="true">{year}</div>

                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {completion}%;")}></div>
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TechColumnProps {
    signal: ProgressSignal,
    column: usize,
}

#[function_component(TechColumn)]
fn tech_column(props: &TechColumnProps) -> Html {
    let node = use_node_ref();
    let distance = TECH_PARALLAX_PX.get(props.column).copied().unwrap_or_default();

    use_motion(
        &props.signal,
        &node,
        Property::TranslateY,
        move || Mapping::new([(0.0, distance), (1.0, -distance)]),
    );

    let technologies = technology_columns(TECH_COLUMNS)
        .into_iter()
        .nth(props.column)
        .unwrap_or_default();

    html! {
        <div ref={node} class={classes!("tech-column", (props.column % 2 == 1).then_some("is-offset"))}>
            { for technologies.into_iter().enumerate().map(|(index, technology)| html! {
                <RevealBox
                    key={technology.name}
                    reveal={Reveal::zoom_in(stagger(index, 0.1) + stagger(props.column, 0.05), 0.5)}
                    class="tech-card"
                >
                    <img src={technology.icon} alt={technology.name} />
                    <p>{technology.name}</p>
                </RevealBox>
            }) }
        </div>
    }
}

fn random_percent() -> f64 {
    js_sys::Math::random() * 100.0
}

#[function_component(Tech)]
pub fn tech() -> Html {
    let config = use_site_config();
    let spotlight = use_state_eq(|| (50.0, 50.0));
    let section = use_node_ref();
    let stage = use_node_ref();
    let content = use_node_ref();
    let grid = use_node_ref();
    let accents = use_node_ref();

    {
        let spotlight = spotlight.clone();
        let interval_ms = config.spotlight_interval_ms;
        use_effect_with(interval_ms, move |interval_ms| {
            let interval = (!prefers_reduced_motion()).then(|| {
                Interval::new(*interval_ms, move || spotlight.set((random_percent(), random_percent())))
            });
            move || drop(interval)
        });
    }

    let progress = use_scroll_progress(&section, ScrollRange::THROUGH_VIEWPORT);
    let visibility = || Mapping::new([(0.15, 0.0), (0.4, 1.0), (0.6, 1.0), (0.85, 0.0)]);
    let line_glow = || Mapping::new([(0.0, 0.3), (0.2, 1.0), (0.8, 1.0), (1.0, 0.3)]);

    use_motion(&progress, &stage, Property::Opacity, visibility);
    use_motion(&progress, &content, Property::Opacity, visibility);
    use_motion(&progress, &grid, Property::Opacity, line_glow);
    use_motion(&progress, &accents, Property::Opacity, line_glow);
    use_motion(&progress, &accents, Property::Rotate, move || Mapping::new([(0.0, 0.0), (1.0, 15.0)]));

    let (x, y) = *spotlight;

    html! {
        <div ref={section} class="tech-wrapper">
            <div ref={stage} class="tech-stage" aria-hidden="true">
                <div class="spotlight" style={format!("left: {x:.2}%; top: {y:.2}%;")}></div>
                <div
                    class="spotlight is-secondary"
                    style={format!("left: {:.2}%; top: {:.2}%;", 100.0 - x, 100.0 - y)}
                ></div>
                <div ref={grid} class="tech-grid">
                    { for (1..=8).map(|line| html! {
                        <div key={line} class="grid-line is-vertical" style={format!("left: {}%;", 12.5 * line as f64)}></div>
                    }) }
                    { for (1..=6).map(|line| html! {
                        <div key={line + 100} class="grid-line is-horizontal" style={format!("top: {:.2}%;", 16.66 * line as f64)}></div>
                    }) }
                    { for (0..16).map(|node| html! {
                        <div
                            key={node + 200}
                            class="grid-node"
                            style={format!(
                                "left: {}%; top: {}%; animation-delay: {}s;",
                                25 * (node % 4 + 1),
                                25 * (node / 4 + 1),
                                stagger(node / 4, 0.2) + stagger(node % 4, 0.1),
                            )}
                        ></div>
                    }) }
                </div>
                <div ref={accents} class="tech-accents">
                    <div class="accent-line is-violet"></div>
                    <div class="accent-line is-teal"></div>
                </div>
            </div>

            <section ref={content} class="section-inner tech-content">
                <RevealBox reveal={Reveal::fade_in(Some(Direction::Up), Easing::EaseOut, 0.0, 0.8)} class="centered">
                    <p class="section-subtext">{"My technical arsenal"}</p>
                    <h2 class="section-headtext">{"Technologies."}</h2>
                </RevealBox>

                <div class="tech-columns">
                    { for (0..TECH_COLUMNS).map(|column| html! {
                        <TechColumn key={column} signal={progress.clone()} column={column} />
                    }) }
                </div>
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let overlay = use_project_overlay();
    let project = props.project;

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(overlay) = overlay.as_ref() {
            overlay.dispatch(OverlayEvent::Open(project));
        }
    });

    html! {
        <RevealBox reveal={Reveal::fade_in(Some(Direction::Up), Easing::Spring, stagger(props.index, 0.5), 0.75)}>
            <article class="project-card" data-cursor-project="true" onclick={onclick}>
                <div class="project-media">
                    <img src={project.image} alt={project.name} />
                    <div class="project-actions">
                        <ExternalLink href={project.live_site_link} label="Live Site" />
                        <ExternalLink href={project.source_code_link} label="Github" />
                    </div>
                </div>
                <h3>{project.name}</h3>
                <p class="muted">{project.description}</p>
                <ul class="tag-list">
                    { for project.tags.iter().map(|tag| html! {
                        <li key={tag.name} class={tag.color}>{format!("#{}", tag.name)}</li>
                    }) }
                </ul>
            </article>
        </RevealBox>
    }
}

#[function_component(Works)]
pub fn works() -> Html {
    html! {
        <section id="projects" class="section-inner">
            <RevealBox reveal={Reveal::text(0.0)}>
                <p class="section-subtext">{"My Work"}</p>
                <h2 class="section-headtext">{"Projects."}</h2>
            </RevealBox>

            <RevealBox reveal={Reveal::fade_in(None, Easing::EaseOut, 0.1, 1.0)} class="section-lead">
                <p>
                    {"Following projects showcases my skills and experience through \
                      real-world examples of my work. Each project is briefly described \
                      with links to code repositories and live demos in it. It reflects my \
                      ability to solve complex problems, work with different technologies, \
                      and manage projects effectively."}
                </p>
            </RevealBox>

            <div class="project-grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={project.name} index={index} project={project} />
                }) }
            </div>
        </section>
    }
}

fn hovers_project(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("[data-cursor-project]").ok().flatten())
        .is_some()
}

/// Ring that follows the pointer and grows over project cards. Hidden while
/// the project overlay is up.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let ring = use_node_ref();
    let visible = use_state_eq(|| false);
    let hovering = use_state_eq(|| false);
    let suspended = use_project_overlay().is_some_and(|overlay| overlay.suspends_background());

    {
        let ring = ring.clone();
        let visible = visible.clone();
        let hovering = hovering.clone();
        use_effect_with((), move |_| {
            let listeners = window().zip(window().and_then(|w| w.document())).map(|(win, document)| {
                let sink = ElementStyle::new(ring);
                let on_move = {
                    let visible = visible.clone();
                    EventListener::new(&win, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let (x, y) = clamp_to_viewport(
                            f64::from(event.client_x()) - CURSOR_SIZE / 2.0,
                            f64::from(event.client_y()) - CURSOR_SIZE / 2.0,
                            CURSOR_SIZE,
                        );
                        sink.set_property("translate", &format!("{x:.1}px {y:.1}px"));
                        visible.set(true);
                    })
                };
                let on_over = {
                    let hovering = hovering.clone();
                    EventListener::new(&win, "mouseover", move |event| {
                        if hovers_project(event) {
                            hovering.set(true);
                        }
                    })
                };
                let on_out = EventListener::new(&win, "mouseout", move |event| {
                    if hovers_project(event) {
                        hovering.set(false);
                    }
                });
                let on_leave = EventListener::new(&document, "mouseleave", move |_| visible.set(false));

                [on_move, on_over, on_out, on_leave]
            });

            move || drop(listeners)
        });
    }

    html! {
        <div
            ref={ring}
            class={classes!(
                "cursor",
                (*visible && !suspended).then_some("is-visible"),
                hovering.then_some("is-hovering"),
            )}
            aria-hidden="true"
        >
            <span class="cursor-ring"></span>
            <span class="cursor-dot"></span>
            <span class="cursor-label">{"VIEW PROJECT"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    index: usize,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let Some(post) = BLOG_POSTS.get(props.index) else {
        return html! {};
    };

    html! {
        <RevealBox reveal={Reveal::fade_in(None, Easing::Spring, stagger(props.index, 0.25), 0.6)}>
            <article class="blog-card" role="listitem">
                <div class="blog-card-media">
                    <img src={post.image} alt={post.title} />
                </div>
                <div class="blog-card-body">
                    <h3>{post.title}</h3>
                    <p class="muted">{post.excerpt}</p>
                    <div class="blog-card-meta">
                        <span>{post.short_date()}</span>
                        <span>{format!("{} min read", post.read_time_min)}</span>
                    </div>
                    <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="read-more">
                        {"Read article →"}
                    </Link<Route>>
                </div>
            </article>
        </RevealBox>
    }
}

fn scroll_extent(list: &Element) -> (bool, bool) {
    let left = f64::from(list.scroll_left());
    let width = f64::from(list.scroll_width());
    let visible = f64::from(list.client_width());
    (left > 0.0, left + visible < width - 1.0)
}

#[function_component(BlogFeed)]
pub fn blog_feed() -> Html {
    let list = use_node_ref();
    let can_scroll = use_state_eq(|| (false, true));

    {
        let list = list.clone();
        let can_scroll = can_scroll.clone();
        use_effect_with((), move |_| {
            let listeners = list.cast::<Element>().map(|element| {
                let update = {
                    let element = element.clone();
                    let can_scroll = can_scroll.clone();
                    move || can_scroll.set(scroll_extent(&element))
                };
                update();

                let on_scroll = {
                    let update = update.clone();
                    EventListener::new(&element, "scroll", move |_| update())
                };
                let on_resize = window().map(|win| {
                    let update = update.clone();
                    EventListener::new(&win, "resize", move |_| update())
                });
                let on_wheel = {
                    let target = element.clone();
                    EventListener::new_with_options(
                        &target,
                        "wheel",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                                return;
                            };
                            if wheel.delta_y().abs() > wheel.delta_x().abs() {
                                element.set_scroll_left(element.scroll_left() + wheel.delta_y() as i32);
                                wheel.prevent_default();
                            }
                        },
                    )
                };

                (on_scroll, on_resize, on_wheel)
            });

            move || drop(listeners)
        });
    }

    let scroll_by_card = |direction: f64| {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(element) = list.cast::<Element>() else {
                return;
            };
            let step = element
                .query_selector("article")
                .ok()
                .flatten()
                .map(|card| card.get_bounding_client_rect().width() + BLOG_CARD_GAP_PX)
                .unwrap_or(BLOG_CARD_STEP_PX);
            element.scroll_by_with_x_and_y(direction * step, 0.0);
        })
    };

    let (can_left, can_right) = *can_scroll;

    html! {
        <section id="blog" class="section-inner blog-feed">
            <div class="blog-heading">
                <RevealBox reveal={Reveal::text(0.0)}>
                    <p class="section-subtext">{"Latest posts"}</p>
                    <h2 class="section-headtext">{"Blog."}</h2>
                </RevealBox>
            </div>

            <div class="blog-rail">
                <button
                    type="button"
                    class="rail-button is-left"
                    aria-label="Scroll left"
                    disabled={!can_left}
                    onclick={scroll_by_card(-1.0)}
                >
                    {"‹"}
                </button>
                <button
                    type="button"
                    class="rail-button is-right"
                    aria-label="Scroll right"
                    disabled={!can_right}
                    onclick={scroll_by_card(1.0)}
                >
                    {"›"}
                </button>
                <div ref={list} class="blog-list" role="list">
                    { for (0..BLOG_POSTS.len()).map(|index| html! {
                        <BlogCard key={index} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    z: f64,
}

fn random_star() -> Star {
    loop {
        let coordinate = || (js_sys::Math::random() * 2.0 - 1.0) * STAR_RADIUS;
        let star = Star {
            x: coordinate(),
            y: coordinate(),
            z: coordinate(),
        };
        if star.x * star.x + star.y * star.y + star.z * star.z <= STAR_RADIUS * STAR_RADIUS {
            return star;
        }
    }
}

fn draw_stars(canvas: &HtmlCanvasElement, context: &CanvasRenderingContext2d, stars: &[Star], angle: (f64, f64)) {
    let (width, height) = (canvas.client_width().max(1) as u32, canvas.client_height().max(1) as u32);
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }

    let (width, height) = (f64::from(width), f64::from(height));
    let scale = width.min(height) / 2.0;
    let (sin_x, cos_x) = angle.0.sin_cos();
    let (sin_y, cos_y) = angle.1.sin_cos();

    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(STAR_COLOR);

    for star in stars {
        let y = star.y * cos_x - star.z * sin_x;
        let z = star.y * sin_x + star.z * cos_x;
        let x = star.x * cos_y + z * sin_y;
        let z = -star.x * sin_y + z * cos_y;

        let depth = 2.0 / (2.0 + z + STAR_RADIUS);
        let size = 1.6 * depth;
        context.fill_rect(
            width / 2.0 + x * scale * depth,
            height / 2.0 + y * scale * depth,
            size,
            size,
        );
    }
}

/// Slowly turning point cloud drawn behind the contact section.
#[function_component(Starfield)]
pub fn starfield() -> Html {
    let canvas = use_node_ref();

    {
        let canvas = canvas.clone();
        use_effect_with((), move |_| {
            let surface = canvas.cast::<HtmlCanvasElement>().and_then(|canvas| {
                let context = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()?
                    .dyn_into::<CanvasRenderingContext2d>()
                    .ok()?;
                Some((canvas, context))
            });

            let frame_loop = surface.and_then(|(canvas, context)| {
                let stars = (0..STAR_COUNT).map(|_| random_star()).collect::<Vec<_>>();
                if prefers_reduced_motion() {
                    draw_stars(&canvas, &context, &stars, (0.0, 0.0));
                    return None;
                }

                let mut last = None::<f64>;
                let mut angle = (0.0, 0.0);
                Some(FrameLoop::start(move |timestamp| {
                    let delta = last.map_or(0.0, |last| (timestamp - last) / 1_000.0);
                    last = Some(timestamp);
                    angle.0 -= delta / 10.0;
                    angle.1 -= delta / 15.0;
                    draw_stars(&canvas, &context, &stars, angle);
                }))
            });

            if frame_loop.is_none() {
                log::debug!("starfield running without an animation loop");
            }

            move || drop(frame_loop)
        });
    }

    html! {
        <canvas ref={canvas} class="starfield" aria-hidden="true"></canvas>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p class="muted">{format!("© {OWNER_NAME} {year}. All rights reserved.")}</p>
                <ul class="socials">
                    { for SOCIALS.iter().map(|social| html! {
                        <li key={social.name}>
                            <a href={social.link} target="_blank" rel="noreferrer noopener" aria-label={social.name}>
                                <img src={social.icon} alt={social.name} />
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </footer>
    }
}
