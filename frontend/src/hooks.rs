//! Payment progress hook.
//!
//! Payment figures come from whatever [`PaymentTracker`] the app installs in
//! the Leptos context. Cards read it with [`use_client_payments`].

use std::rc::Rc;

use clientcard::{Client, PaymentProgress, PaymentTracker};
use leptos::*;

/// Context handle to the installed payment tracker.
#[derive(Clone)]
pub struct Payments(Rc<dyn PaymentTracker>);

impl Payments {
    pub fn new(tracker: impl PaymentTracker + 'static) -> Self {
        Self(Rc::new(tracker))
    }

    pub fn progress(&self, client: &Client) -> PaymentProgress {
        self.0.progress(client)
    }
}

/// Install a payment tracker for every card below the current owner.
pub fn provide_payments(tracker: impl PaymentTracker + 'static) {
    provide_context(Payments::new(tracker));
}

/// Progress and remaining amount for `client`.
///
/// Without a provider the card still renders, showing no progress.
pub fn use_client_payments(client: &Client) -> PaymentProgress {
    match use_context::<Payments>() {
        Some(payments) => payments.progress(client),
        None => {
            log::warn!("⚠️ No payment tracker provided, showing empty progress");
            PaymentProgress::default()
        }
    }
}
