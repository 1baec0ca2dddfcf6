use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::{prefers_reduced_motion, ExternalLink};
use crate::{
    content::Project,
    overlay::{CloseReason, Overlay, OverlayEvent, Phase},
};

/// Matches the modal keyframes in styles.css.
const TRANSITION_MS: u32 = 300;

#[derive(Clone, Default, PartialEq)]
pub struct ProjectOverlay(Overlay<&'static Project>);

impl ProjectOverlay {
    pub fn phase(&self) -> Phase {
        self.0.phase()
    }

    pub fn project(&self) -> Option<&'static Project> {
        self.0.content().copied()
    }

    pub fn suspends_background(&self) -> bool {
        self.0.suspends_background()
    }
}

impl Reducible for ProjectOverlay {
    type Action = OverlayEvent<&'static Project>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let label = match &action {
            OverlayEvent::Open(project) => format!("open {}", project.name),
            OverlayEvent::Entered => "entered".to_string(),
            OverlayEvent::Close(reason) => format!("close via {}", reason.as_str()),
            OverlayEvent::Exited => "exited".to_string(),
        };

        let mut next = (*self).clone();
        if next.0.handle(action) {
            log::debug!("project overlay {label}: now {}", next.phase().as_str());
            Rc::new(next)
        } else {
            log::debug!("project overlay ignored {label} while {}", self.phase().as_str());
            self
        }
    }
}

pub type OverlayHandle = UseReducerHandle<ProjectOverlay>;

#[hook]
pub fn use_project_overlay() -> Option<OverlayHandle> {
    use_context::<OverlayHandle>()
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

#[derive(Properties, PartialEq)]
pub struct OverlayHostProps {
    #[prop_or_default]
    pub children: Html,
}

/// Sole owner of the overlay state and of the background suspension.
#[function_component(OverlayHost)]
pub fn overlay_host(props: &OverlayHostProps) -> Html {
    let overlay = use_reducer(ProjectOverlay::default);
    let phase = overlay.phase();
    let suspended = overlay.suspends_background();

    use_effect_with(suspended, |suspended| {
        lock_body_scroll(*suspended);
        || lock_body_scroll(false)
    });

    {
        let overlay = overlay.clone();
        use_effect_with(phase, move |phase| {
            let completion = match phase {
                Phase::Opening => Some(OverlayEvent::Entered),
                Phase::Closing => Some(OverlayEvent::Exited),
                Phase::Closed | Phase::Open => None,
            };
            let delay = if prefers_reduced_motion() { 0 } else { TRANSITION_MS };
            let timer = completion.map(|event| Timeout::new(delay, move || overlay.dispatch(event)));

            move || drop(timer)
        });
    }

    {
        let overlay = overlay.clone();
        use_effect_with(suspended, move |suspended| {
            let listener = suspended
                .then(|| window().and_then(|w| w.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if escape {
                            overlay.dispatch(OverlayEvent::Close(CloseReason::Escape));
                        }
                    })
                });

            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<OverlayHandle> context={overlay.clone()}>
            <div
                class={classes!("page-shell", suspended.then_some("is-suspended"))}
                aria-hidden={suspended.then_some("true")}
            >
                {props.children.clone()}
            </div>
            <ProjectModal overlay={overlay} />
        </ContextProvider<OverlayHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    overlay: OverlayHandle,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let Some(project) = props.overlay.project() else {
        return html! {};
    };

    let close = |reason: CloseReason| {
        let overlay = props.overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.dispatch(OverlayEvent::Close(reason)))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class={classes!("modal", format!("phase-{}", props.overlay.phase().as_str()))}
            role="dialog"
            aria-modal="true"
            aria-label={format!("{} details", project.name)}
        >
            <div class="modal-backdrop" onclick={close(CloseReason::Backdrop)}>
                <img src={project.image} alt="Background preview" />
            </div>
            <div class="modal-frame" onclick={close(CloseReason::Backdrop)}>
                <div class="modal-card" onclick={keep_open}>
                    <header class="modal-header">
                        <div>
                            <h3>{project.name}</h3>
                            <p class="muted">{"Project details"}</p>
                        </div>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Close dialog"
                            onclick={close(CloseReason::Button)}
                        >
                            {"✕"}
                        </button>
                    </header>
                    <img class="modal-media" src={project.modal_image} alt={format!("{} preview", project.name)} />
                    <div class="modal-body">
                        <p>{project.description}</p>
                        <ul class="tag-list">
                            { for project.tags.iter().map(|tag| html! {
                                <li class={tag.color}>{format!("#{}", tag.name)}</li>
                            }) }
                        </ul>
                        <p class="modal-links">
                            <ExternalLink href={project.live_site_link} label="Live site" />
                            <ExternalLink href={project.source_code_link} label="Source code" />
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
