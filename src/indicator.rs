//! Connected / timeout indicator pair

use crate::probe::Outcome;

/// A UI element that can be shown or hidden
pub trait Element {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Connected,
    Disconnected,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Status::Connected,
            Outcome::Failure => Status::Disconnected,
        }
    }
}

/// Shows exactly one of two elements once a status is known; both stay hidden before that.
#[derive(Debug)]
pub struct Indicator<E> {
    connected: E,
    timeout: E,
}

impl<E: Element> Indicator<E> {
    pub fn new(mut connected: E, mut timeout: E) -> Self {
        connected.set_visible(false);
        timeout.set_visible(false);
        Self { connected, timeout }
    }

    pub fn show(&mut self, status: Status) {
        // Hide before show so the two are never visible together.
        match status {
            Status::Connected => {
                self.timeout.set_visible(false);
                self.connected.set_visible(true);
            }
            Status::Disconnected => {
                self.connected.set_visible(false);
                self.timeout.set_visible(true);
            }
        }
    }

    /// Status currently on display, if any
    #[cfg(test)]
    pub fn status(&self) -> Option<Status> {
        match (self.connected.is_visible(), self.timeout.is_visible()) {
            (true, false) => Some(Status::Connected),
            (false, true) => Some(Status::Disconnected),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn elements(&self) -> (&E, &E) {
        (&self.connected, &self.timeout)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Element;

    /// Element that records every visibility change
    #[derive(Debug, Default)]
    pub struct RecordingElement {
        visible: bool,
        pub shows: usize,
        pub hides: usize,
    }

    impl RecordingElement {
        pub fn visible() -> Self {
            Self {
                visible: true,
                ..Self::default()
            }
        }
    }

    impl Element for RecordingElement {
        fn set_visible(&mut self, visible: bool) {
            if visible {
                self.shows += 1;
            } else {
                self.hides += 1;
            }
            self.visible = visible;
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingElement;
    use super::*;

    #[test]
    fn starts_with_nothing_shown() {
        let indicator = Indicator::new(RecordingElement::visible(), RecordingElement::visible());
        assert_eq!(indicator.status(), None);
        let (connected, timeout) = indicator.elements();
        assert!(!connected.is_visible());
        assert!(!timeout.is_visible());
    }

    #[test]
    fn states_are_mutually_exclusive() {
        let mut indicator = Indicator::new(RecordingElement::default(), RecordingElement::default());
        for status in [
            Status::Connected,
            Status::Disconnected,
            Status::Disconnected,
            Status::Connected,
            Status::Connected,
        ] {
            indicator.show(status);
            assert_eq!(indicator.status(), Some(status));
            let (connected, timeout) = indicator.elements();
            assert_ne!(connected.is_visible(), timeout.is_visible());
        }
    }

    #[test]
    fn outcome_maps_to_status() {
        assert_eq!(Status::from(Outcome::Success), Status::Connected);
        assert_eq!(Status::from(Outcome::Failure), Status::Disconnected);
    }
}
