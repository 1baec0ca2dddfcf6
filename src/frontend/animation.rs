use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use super::{prefers_reduced_motion, viewport_size};
use crate::{
    driver::{try_bind, Property, StyleSink},
    motion::{Mapping, MappingError, Reveal},
    scroll::{progress, FrameGate, Geometry, ProgressSignal, ScrollRange},
};

/// Fraction of the viewport height a block must cross before it reveals.
const REVEAL_THRESHOLD: f64 = 0.85;

/// Writes straight into the inline style of whatever element the ref points
/// at. Writes to an unmounted ref are dropped.
#[derive(Clone)]
pub struct ElementStyle {
    node: NodeRef,
}

impl ElementStyle {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl StyleSink for ElementStyle {
    fn set_property(&self, name: &str, value: &str) {
        if let Some(element) = self.node.cast::<HtmlElement>() {
            let _ = element.style().set_property(name, value);
        }
    }
}

struct FrameSlot {
    gate: FrameGate,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Measures one element against the viewport and publishes its progress,
/// at most once per animation frame.
struct ScrollTracker {
    _scroll: Option<EventListener>,
    _resize: Option<EventListener>,
    slot: Rc<FrameSlot>,
}

impl ScrollTracker {
    fn attach(node: NodeRef, range: ScrollRange, signal: ProgressSignal) -> Self {
        let slot = Rc::new(FrameSlot {
            gate: FrameGate::default(),
            frame: RefCell::new(None),
        });

        let on_change = {
            let slot = slot.clone();
            Rc::new(move || schedule_measure(&slot, &node, range, &signal))
        };
        on_change();

        let listen = |event: &'static str| {
            let on_change = on_change.clone();
            window().map(|win| EventListener::new(&win, event, move |_| on_change()))
        };

        Self {
            _scroll: listen("scroll"),
            _resize: listen("resize"),
            slot,
        }
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.slot.frame.borrow_mut().take();
        self.slot.gate.complete();
    }
}

fn schedule_measure(slot: &Rc<FrameSlot>, node: &NodeRef, range: ScrollRange, signal: &ProgressSignal) {
    if !slot.gate.request() {
        return;
    }

    let handle = {
        let slot = slot.clone();
        let node = node.clone();
        let signal = signal.clone();
        request_animation_frame(move |_| {
            slot.frame.borrow_mut().take();
            slot.gate.complete();
            measure(&node, range, &signal);
        })
    };
    *slot.frame.borrow_mut() = Some(handle);
}

fn measure(node: &NodeRef, range: ScrollRange, signal: &ProgressSignal) {
    let Some(element) = node.cast::<Element>() else {
        return;
    };

    let rect = element.get_bounding_client_rect();
    let (_, viewport_height) = viewport_size();
    signal.publish(progress(
        range,
        Geometry {
            top: rect.top(),
            height: rect.height(),
            viewport_height,
        },
    ));
}

/// Scroll progress of `node` through `range`. The signal lives as long as the
/// calling component and is disposed when it unmounts.
#[hook]
pub fn use_scroll_progress(node: &NodeRef, range: ScrollRange) -> ProgressSignal {
    let signal = use_memo((), |_| ProgressSignal::new());

    {
        let signal = (*signal).clone();
        use_effect_with((), move |_| {
            let signal_on_drop = signal.clone();
            move || signal_on_drop.dispose()
        });
    }

    {
        let signal = (*signal).clone();
        use_effect_with((node.clone(), range), move |(node, range)| {
            let tracker = ScrollTracker::attach(node.clone(), *range, signal);
            move || drop(tracker)
        });
    }

    (*signal).clone()
}

/// Drives one style property of `node` from `signal` for as long as the
/// component stays mounted. `mapping` runs once, on mount; a broken mapping
/// is logged and skipped.
#[hook]
pub fn use_motion<F>(signal: &ProgressSignal, node: &NodeRef, property: Property, mapping: F)
where
    F: FnOnce() -> Result<Mapping, MappingError> + 'static,
{
    let signal = signal.clone();
    let node = node.clone();

    use_effect_with((), move |_| {
        let subscription = match try_bind(&signal, property, mapping, ElementStyle::new(node)) {
            Ok(subscription) => Some(subscription),
            Err(error) => {
                log::error!("skipping {} animation: {error}", property.css_name());
                None
            }
        };

        move || drop(subscription)
    });
}

fn in_view(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };

    let rect = element.get_bounding_client_rect();
    let (_, viewport_height) = viewport_size();
    rect.top() < viewport_height * REVEAL_THRESHOLD && rect.bottom() > 0.0
}

/// True once `node` has been scrolled into view. Never flips back.
#[hook]
pub fn use_reveal(node: &NodeRef) -> bool {
    let shown = use_state_eq(prefers_reduced_motion);

    {
        let shown = shown.clone();
        let node = node.clone();
        use_effect_with(*shown, move |already_shown| {
            let listener = if *already_shown {
                None
            } else if in_view(&node) {
                shown.set(true);
                None
            } else {
                window().map(|win| {
                    EventListener::new(&win, "scroll", move |_| {
                        if in_view(&node) {
                            shown.set(true);
                        }
                    })
                })
            };

            move || drop(listener)
        });
    }

    *shown
}

#[derive(Properties, PartialEq)]
pub struct RevealBoxProps {
    pub reveal: Reveal,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RevealBox)]
pub fn reveal_box(props: &RevealBoxProps) -> Html {
    let node = use_node_ref();
    let shown = use_reveal(&node);

    html! {
        <div ref={node} class={props.class.clone()} style={props.reveal.style(shown)}>
            {props.children.clone()}
        </div>
    }
}

/// Repeats `tick` on every animation frame until the returned handle is
/// dropped.
pub struct FrameLoop {
    slot: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start(tick: impl FnMut(f64) + 'static) -> Self {
        let slot = Rc::new(RefCell::new(None));
        let tick: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(tick));
        request_next_frame(&slot, &tick);
        Self { slot }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

fn request_next_frame(slot: &Rc<RefCell<Option<AnimationFrame>>>, tick: &Rc<RefCell<dyn FnMut(f64)>>) {
    let handle = {
        let slot = Rc::downgrade(slot);
        let tick = tick.clone();
        request_animation_frame(move |timestamp| {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            slot.borrow_mut().take();
            (*tick.borrow_mut())(timestamp);
            request_next_frame(&slot, &tick);
        })
    };
    *slot.borrow_mut() = Some(handle);
}
