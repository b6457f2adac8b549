//! User-facing notices and a small publish/subscribe bus for them.
//!
//! Front-ends subscribe handlers per [`NoticeKind`]; the comparison flow
//! publishes form errors, submissions and "data received" notices without
//! knowing how (or whether) they are displayed.

use std::fmt;

use crate::TravelMode;

/// The category of a [`Notice`], used to route it to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Input validation failed.
    FormError,
    /// A comparison was started.
    FormSubmitted,
    /// A comparison finished and its report was delivered.
    TravelDataReceived,
}

/// A message intended for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Input validation failed for `field`.
    FormError {
        /// Name of the offending input.
        field: String,
        /// Explanation shown to the user.
        message: String,
    },
    /// A comparison was started.
    FormSubmitted {
        /// Confirmation shown to the user.
        message: String,
    },
    /// A comparison finished.
    TravelDataReceived {
        /// Number of modes with a route.
        routes_found: usize,
    },
}

impl Notice {
    /// The kind used for subscription matching.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        match self {
            Self::FormError { .. } => NoticeKind::FormError,
            Self::FormSubmitted { .. } => NoticeKind::FormSubmitted,
            Self::TravelDataReceived { .. } => NoticeKind::TravelDataReceived,
        }
    }

    /// Whether the notice reports a problem.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::FormError { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormError { message, .. } | Self::FormSubmitted { message } => {
                f.write_str(message)
            }
            Self::TravelDataReceived { routes_found } => {
                write!(
                    f,
                    "routes found for {routes_found} of {} travel modes",
                    TravelMode::ALL.len()
                )
            }
        }
    }
}

/// Handle returned by [`NoticeBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&Notice) + Send>;

struct Subscription {
    id: SubscriptionId,
    kind: NoticeKind,
    handler: Handler,
}

/// Synchronous publish/subscribe bus for [`Notice`] values.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use travelcompare_core::{Notice, NoticeBus, NoticeKind};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let mut bus = NoticeBus::default();
/// let sink = Arc::clone(&seen);
/// let id = bus.subscribe(NoticeKind::FormSubmitted, move |notice| {
///     sink.lock().unwrap().push(notice.to_string());
/// });
///
/// bus.publish(&Notice::FormSubmitted { message: "Comparing routes".into() });
/// assert!(bus.unsubscribe(id));
/// bus.publish(&Notice::FormSubmitted { message: "ignored".into() });
///
/// assert_eq!(*seen.lock().unwrap(), vec!["Comparing routes".to_owned()]);
/// ```
#[derive(Default)]
pub struct NoticeBus {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl fmt::Debug for NoticeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoticeBus")
            .field("next_id", &self.next_id)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl NoticeBus {
    /// Register `handler` for notices of `kind`.
    pub fn subscribe(
        &mut self,
        kind: NoticeKind,
        handler: impl FnMut(&Notice) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.subscriptions.push(Subscription {
            id,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `notice` to every matching subscriber, in subscription order.
    ///
    /// Returns the number of handlers invoked.
    pub fn publish(&mut self, notice: &Notice) -> usize {
        let kind = notice.kind();
        let mut delivered = 0;
        for subscription in &mut self.subscriptions {
            if subscription.kind == kind {
                (subscription.handler)(notice);
                delivered += 1;
            }
        }
        if delivered == 0 {
            log::debug!("no subscribers for {kind:?} notice");
        }
        delivered
    }
}
