#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Button,
    Backdrop,
    Escape,
}

impl CloseReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Backdrop => "backdrop",
            Self::Escape => "escape",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayEvent<T> {
    Open(T),
    Entered,
    Close(CloseReason),
    Exited,
}

/// Modal overlay lifecycle. While in any phase but `Closed` the page behind
/// it must not take pointer input or scroll.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay<T> {
    phase: Phase,
    content: Option<T>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Closed,
            content: None,
        }
    }
}

impl<T> Overlay<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn suspends_background(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Opening while already visible swaps the content in place. Opening
    /// during the exit animation reverses it.
    pub fn open(&mut self, content: T) -> bool {
        self.content = Some(content);
        match self.phase {
            Phase::Closed | Phase::Closing => self.phase = Phase::Opening,
            Phase::Opening | Phase::Open => {}
        }
        true
    }

    pub fn entered(&mut self) -> bool {
        self.transition(Phase::Opening, Phase::Open)
    }

    pub fn close(&mut self) -> bool {
        match self.phase {
            Phase::Opening | Phase::Open => {
                self.phase = Phase::Closing;
                true
            }
            Phase::Closed | Phase::Closing => false,
        }
    }

    pub fn exited(&mut self) -> bool {
        if self.transition(Phase::Closing, Phase::Closed) {
            self.content = None;
            true
        } else {
            false
        }
    }

    /// Applies `event` and reports whether anything changed.
    pub fn handle(&mut self, event: OverlayEvent<T>) -> bool {
        match event {
            OverlayEvent::Open(content) => self.open(content),
            OverlayEvent::Entered => self.entered(),
            OverlayEvent::Close(_) => self.close(),
            OverlayEvent::Exited => self.exited(),
        }
    }

    fn transition(&mut self, from: Phase, to: Phase) -> bool {
        if self.phase == from {
            self.phase = to;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(content: &'static str) -> Overlay<&'static str> {
        let mut overlay = Overlay::default();
        overlay.open(content);
        overlay.entered();
        overlay
    }

    #[test]
    fn full_cycle_returns_to_closed_without_content() {
        let mut overlay = Overlay::default();
        let mut phases = vec![overlay.phase()];

        for event in [
            OverlayEvent::Open("first"),
            OverlayEvent::Entered,
            OverlayEvent::Close(CloseReason::Escape),
            OverlayEvent::Exited,
        ] {
            assert!(overlay.handle(event));
            phases.push(overlay.phase());
        }

        assert_eq!(
            phases,
            vec![Phase::Closed, Phase::Opening, Phase::Open, Phase::Closing, Phase::Closed]
        );
        assert_eq!(overlay.content(), None);
        assert!(!overlay.suspends_background());
    }

    #[test]
    fn second_open_swaps_content_without_closing() {
        let mut overlay = opened("first");

        assert!(overlay.open("second"));

        assert_eq!(overlay.phase(), Phase::Open);
        assert_eq!(overlay.content(), Some(&"second"));
        assert!(overlay.suspends_background());
    }

    #[test]
    fn open_during_entry_keeps_entry_animation_running() {
        let mut overlay = Overlay::default();
        overlay.open("first");
        overlay.open("second");

        assert_eq!(overlay.phase(), Phase::Opening);
        assert!(overlay.entered());
        assert_eq!(overlay.content(), Some(&"second"));
    }

    #[test]
    fn open_during_exit_reverses_it() {
        let mut overlay = opened("first");
        overlay.close();

        overlay.open("second");

        assert_eq!(overlay.phase(), Phase::Opening);
        assert!(!overlay.exited());
        assert_eq!(overlay.content(), Some(&"second"));
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        let mut overlay: Overlay<&str> = Overlay::default();

        assert!(!overlay.entered());
        assert!(!overlay.close());
        assert!(!overlay.exited());
        assert_eq!(overlay.phase(), Phase::Closed);

        let mut overlay = opened("first");
        assert!(!overlay.entered());
        assert!(overlay.close());
        assert!(!overlay.close());
        assert!(overlay.suspends_background());
    }

    #[test]
    fn every_close_reason_starts_the_exit() {
        for reason in [CloseReason::Button, CloseReason::Backdrop, CloseReason::Escape] {
            let mut overlay = opened("first");
            assert!(overlay.handle(OverlayEvent::Close(reason)));
            assert_eq!(overlay.phase(), Phase::Closing);
        }
    }
}
