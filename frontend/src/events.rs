//! DOM event helpers.
//!
//! Icon buttons sit inside the clickable card. Their clicks must not reach
//! the card's own handler, so they cancel the event before acting.

use web_sys::MouseEvent;

/// The subset of DOM event control the card uses.
pub trait EventControl {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

impl EventControl for MouseEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }
}

/// Handle a click on a nested button: cancel the event, then run `action`.
pub fn icon_click<E: EventControl + ?Sized>(ev: &E, action: impl FnOnce()) {
    ev.prevent_default();
    ev.stop_propagation();
    action();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeClick {
        prevented: Cell<bool>,
        stopped: Cell<bool>,
    }

    impl EventControl for FakeClick {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn stop_propagation(&self) {
            self.stopped.set(true);
        }
    }

    /// Bubble a click from a button to the card, honouring stop_propagation.
    fn bubble(ev: &FakeClick, button: impl FnOnce(&FakeClick), card: impl FnOnce()) {
        button(ev);
        if !ev.stopped.get() {
            card();
        }
    }

    #[test]
    fn test_icon_click_cancels_then_acts() {
        let ev = FakeClick::default();
        let acted = Cell::new(false);

        icon_click(&ev, || {
            assert!(ev.stopped.get());
            acted.set(true);
        });

        assert!(ev.prevented.get());
        assert!(acted.get());
    }

    #[test]
    fn test_icon_click_does_not_reach_card() {
        let ev = FakeClick::default();
        let history = Cell::new(0);
        let card = Cell::new(0);

        bubble(
            &ev,
            |ev| icon_click(ev, || history.set(history.get() + 1)),
            || card.set(card.get() + 1),
        );

        assert_eq!(history.get(), 1);
        assert_eq!(card.get(), 0);
    }

    #[test]
    fn test_plain_click_reaches_card() {
        let ev = FakeClick::default();
        let card = Cell::new(0);

        bubble(&ev, |_| {}, || card.set(card.get() + 1));

        assert_eq!(card.get(), 1);
    }
}
