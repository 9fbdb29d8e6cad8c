//! Session state machine
//!
//! `DessertSession` is the single owner of the sale counters. Every click
//! goes through [`DessertSession::advance`], which books the sale of the
//! current dessert, moves on to the next one and publishes the new snapshot
//! to every observer.
//!
//! # Transition
//!
//! ```text
//! (sold, revenue, index)
//!     ↓ advance()
//! (sold + 1, revenue + price[index], policy(index + 1))
//! ```
//!
//! Past the last dessert the [`EndPolicy`] decides where to go, so the
//! machine never looks up an index outside the catalog.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, info};

use crate::catalog::{Catalog, Dessert, DessertImage};

/// What happens after the last dessert in the catalog is sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EndPolicy {
    /// Start over from the first dessert
    #[default]
    Wrap,
    /// Keep offering the last dessert
    Clamp,
}

impl EndPolicy {
    /// Map a candidate index onto `[0, len)`.
    ///
    /// `len` must be non-zero, which `Catalog` guarantees.
    pub const fn resolve(self, index: usize, len: usize) -> usize {
        if index < len {
            return index;
        }
        match self {
            Self::Wrap => 0,
            Self::Clamp => len - 1,
        }
    }
}

/// Immutable snapshot of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Number of desserts sold so far
    pub desserts_sold: u64,
    /// Sum of the prices of every dessert sold so far
    pub revenue: u64,
    /// Catalog index of the dessert currently on offer
    pub current_index: usize,
    /// Price of the dessert currently on offer
    pub current_price: u64,
    /// Image of the dessert currently on offer
    pub current_image: DessertImage,
}

impl SessionState {
    fn offering(desserts_sold: u64, revenue: u64, index: usize, dessert: &Dessert) -> Self {
        Self {
            desserts_sold,
            revenue,
            current_index: index,
            current_price: dessert.price,
            current_image: dessert.image,
        }
    }
}

/// Handle returned by [`DessertSession::subscribe`] and
/// [`DessertSession::subscribe_channel`].
///
/// Pass it back to [`DessertSession::unsubscribe`] to stop receiving snapshots.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the handle makes the subscription impossible to cancel"]
pub struct Subscription {
    id: u64,
}

enum Observer {
    Callback(Box<dyn FnMut(&SessionState)>),
    Channel(Sender<SessionState>),
}

impl Observer {
    /// Hand a snapshot to the observer; false once it can no longer receive.
    fn deliver(&mut self, snapshot: &SessionState) -> bool {
        match self {
            Self::Callback(callback) => {
                callback(snapshot);
                true
            }
            Self::Channel(tx) => tx.send(*snapshot).is_ok(),
        }
    }
}

struct Registered {
    id: u64,
    observer: Observer,
}

/// One run of the clicker, from launch to close.
///
/// # Example
///
/// ```
/// use dessert_clicker::catalog::Catalog;
/// use dessert_clicker::session::{DessertSession, EndPolicy};
///
/// let mut session = DessertSession::new(Catalog::builtin(), EndPolicy::Wrap);
/// assert_eq!(session.current_state().desserts_sold, 0);
///
/// let state = session.advance();
/// assert_eq!(state.desserts_sold, 1);
/// assert_eq!(state.revenue, 5);
/// assert_eq!(state.current_index, 1);
/// ```
pub struct DessertSession {
    catalog: Catalog,
    policy: EndPolicy,
    state: SessionState,
    observers: Vec<Registered>,
    next_subscription: u64,
}

impl fmt::Debug for DessertSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DessertSession")
            .field("catalog_len", &self.catalog.len())
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DessertSession {
    /// Start a session on the first dessert of `catalog` with zeroed counters.
    pub fn new(catalog: Catalog, policy: EndPolicy) -> Self {
        let first = catalog.desserts()[0];
        let state = SessionState::offering(0, 0, 0, &first);
        info!(
            desserts = catalog.len(),
            policy = %policy,
            "Starting dessert session"
        );
        Self {
            catalog,
            policy,
            state,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot; no side effects
    #[inline]
    pub fn current_state(&self) -> SessionState {
        self.state
    }

    /// Dessert currently on offer
    pub fn current_dessert(&self) -> &Dessert {
        &self.catalog.desserts()[self.state.current_index]
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn end_policy(&self) -> EndPolicy {
        self.policy
    }

    /// Sell the current dessert and move on to the next one.
    ///
    /// Publishes the new snapshot to every observer and returns it.
    pub fn advance(&mut self) -> SessionState {
        let current = self.state;
        let next_index = self
            .policy
            .resolve(current.current_index + 1, self.catalog.len());
        // resolve() keeps next_index inside the non-empty catalog
        let next = self.catalog.desserts()[next_index];

        self.state = SessionState::offering(
            current.desserts_sold.saturating_add(1),
            current.revenue.saturating_add(current.current_price),
            next_index,
            &next,
        );

        debug!(
            sold = self.state.desserts_sold,
            revenue = self.state.revenue,
            from = current.current_index,
            to = next_index,
            "Dessert sold"
        );

        self.publish();
        self.state
    }

    /// Register a callback for every new snapshot.
    ///
    /// The callback is invoked immediately with the current snapshot.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&SessionState) + 'static,
    {
        self.register(Observer::Callback(Box::new(callback)))
    }

    /// Register a channel observer.
    ///
    /// The receiver holds the current snapshot right away. Stop it with
    /// [`DessertSession::unsubscribe`], or drop the receiver: the observer
    /// is then removed on the next publish.
    pub fn subscribe_channel(&mut self) -> (Subscription, Receiver<SessionState>) {
        let (tx, rx) = mpsc::channel();
        let subscription = self.register(Observer::Channel(tx));
        (subscription, rx)
    }

    /// Stop delivering snapshots to a subscriber.
    ///
    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|r| r.id != subscription.id);
        let removed = self.observers.len() != before;
        debug!(id = subscription.id, removed, "Unsubscribed observer");
        removed
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn register(&mut self, mut observer: Observer) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;

        if observer.deliver(&self.state) {
            self.observers.push(Registered { id, observer });
            debug!(id, observers = self.observers.len(), "Subscribed observer");
        }
        Subscription { id }
    }

    fn publish(&mut self) {
        let snapshot = self.state;
        self.observers
            .retain_mut(|registered| registered.observer.deliver(&snapshot));
    }
}
