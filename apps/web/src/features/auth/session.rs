//! Session Controller: the one owner of loading/auth/role state.
//!
//! ```text
//!   Initializing ──(no token)──────────────→ Anonymous
//!        │                                     ↑   │
//!        └──(token)──→ Resolving ──(failure)───┘   │ login
//!                         │  ↑                     │
//!                (success)│  └─────────────────────┘
//!                         ↓
//!                      Resolved ──(logout / 401)──→ Anonymous
//! ```
//!
//! Every operation mutates state synchronously when it is called; the returned
//! [`PendingPhase`] only awaits the network. Each token mutation bumps an epoch
//! and a resolution result is applied only if its epoch and token are still
//! current, so a `logout()` issued mid-flight can never be undone by a late
//! answer. Concurrent refreshes share one in-flight request. A token replaced
//! outside the controller mid-flight is resolved in place of the old one.
//!
//! Readers never mutate the session. They take a [`SessionSnapshot`] or
//! subscribe to changes.

use crate::app_lib::{ApiClient, navigation::Navigator, paths, storage::TokenStore};
use crate::features::auth::{
    identity::{IdentityError, IdentityResolver},
    policy::landing_route,
    types::{Role, User},
};
use futures_util::future::{self, FutureExt, LocalBoxFuture, Shared};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Resolving,
    Resolved,
    Anonymous,
}

/// Immutable view of the session handed to guards and views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub user: Option<User>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Initializing,
            user: None,
        }
    }
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self {
            phase: Phase::Anonymous,
            user: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Initializing | Phase::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == Phase::Resolved && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        if self.phase == Phase::Resolved {
            self.user.as_ref().map(|user| user.role)
        } else {
            None
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }
}

/// Outcome of a resolution. Clones all observe the same single request.
pub type PendingPhase = Shared<LocalBoxFuture<'static, Phase>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&SessionSnapshot)>;

/// Process-wide session. Clones share state.
#[derive(Clone)]
pub struct SessionController {
    inner: Rc<Inner>,
}

struct Inner {
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    resolver: IdentityResolver,
    state: RefCell<SessionSnapshot>,
    epoch: Cell<u64>,
    tickets: Cell<u64>,
    in_flight: RefCell<Option<InFlight>>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_observer: Cell<u64>,
}

enum Settlement {
    Done(Phase),
    /// The stored token was replaced mid-flight; follow the new resolution.
    Retry(PendingPhase),
}

struct InFlight {
    ticket: u64,
    epoch: u64,
    outcome: PendingPhase,
}

impl SessionController {
    /// Builds the controller around the client's token store and navigator.
    /// Global 401 recovery in the client drops the session here as well.
    pub fn new(client: ApiClient) -> Self {
        let inner = Rc::new(Inner {
            tokens: client.tokens(),
            navigator: client.navigator(),
            resolver: IdentityResolver::new(client.clone()),
            state: RefCell::new(SessionSnapshot::default()),
            epoch: Cell::new(0),
            tickets: Cell::new(0),
            in_flight: RefCell::new(None),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
        });

        let weak = Rc::downgrade(&inner);
        client.on_credentials_rejected(move || {
            if let Some(inner) = weak.upgrade() {
                inner.drop_session();
            }
        });

        Self { inner }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    /// Calls `observer` with every new snapshot. Unchanged state is not re-sent.
    pub fn subscribe(&self, observer: impl Fn(&SessionSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_observer.get());
        self.inner.next_observer.set(id.0 + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(observer_id, _)| *observer_id != id);
    }

    /// Mount-time hydration. Only acts while `Initializing`; later calls join
    /// whatever is in flight or report the current phase.
    pub fn start(&self) -> PendingPhase {
        let phase = self.phase();
        if phase != Phase::Initializing {
            return self.inner.current_flight().unwrap_or_else(|| settled(phase));
        }

        if self.inner.tokens.read().is_none() {
            debug!("no stored token, session starts anonymous");
            self.inner.set_state(SessionSnapshot::anonymous());
            return settled(Phase::Anonymous);
        }

        self.inner.begin_resolution()
    }

    /// Stores `token` and resolves it. Navigation to the role's landing page
    /// happens when the resolution lands, not here.
    pub fn login(&self, token: &str) -> PendingPhase {
        let token = token.trim();
        if token.is_empty() {
            warn!("blank token offered to login, staying anonymous");
            self.inner.reset();
            return settled(Phase::Anonymous);
        }

        info!("login, resolving new credential");
        self.inner.tokens.write(token);
        self.inner.bump_epoch();
        self.inner.set_state(SessionSnapshot {
            phase: Phase::Resolving,
            user: None,
        });
        self.inner.begin_resolution()
    }

    /// Clears the credential and the user, then goes to the login page. No
    /// network round-trip; safe to call repeatedly.
    pub fn logout(&self) {
        info!("logout");
        self.inner.reset();
        self.inner.navigator.navigate(paths::LOGIN);
    }

    /// Re-resolves the current token, e.g. after a profile edit. A resolution
    /// already in flight for the same token is joined rather than repeated.
    pub fn refetch(&self) -> PendingPhase {
        if self.inner.tokens.read().is_none() {
            debug!("refetch without a token");
            self.inner.drop_session();
            return settled(Phase::Anonymous);
        }

        self.inner.begin_resolution()
    }
}

impl Inner {
    fn bump_epoch(&self) {
        self.epoch.set(self.epoch.get() + 1);
    }

    fn current_flight(&self) -> Option<PendingPhase> {
        let epoch = self.epoch.get();
        self.in_flight
            .borrow()
            .as_ref()
            .filter(|flight| flight.epoch == epoch)
            .map(|flight| flight.outcome.clone())
    }

    fn begin_resolution(self: &Rc<Self>) -> PendingPhase {
        if let Some(outcome) = self.current_flight() {
            debug!("joining in-flight identity resolution");
            return outcome;
        }

        let ticket = self.tickets.get() + 1;
        self.tickets.set(ticket);
        let epoch = self.epoch.get();
        let token = self.tokens.read();

        // A known user stays visible while a refresh runs in the background.
        if self.state.borrow().user.is_none() {
            self.set_state(SessionSnapshot {
                phase: Phase::Resolving,
                user: None,
            });
        }

        let weak = Rc::downgrade(self);
        let outcome = async move {
            let Some(inner) = weak.upgrade() else {
                return Phase::Anonymous;
            };
            let result = inner.resolver.resolve().await;
            match inner.settle(ticket, epoch, token, result) {
                Settlement::Done(phase) => phase,
                Settlement::Retry(next) => {
                    drop(inner);
                    next.await
                }
            }
        }
        .boxed_local()
        .shared();

        *self.in_flight.borrow_mut() = Some(InFlight {
            ticket,
            epoch,
            outcome: outcome.clone(),
        });
        outcome
    }

    fn settle(
        self: &Rc<Self>,
        ticket: u64,
        epoch: u64,
        token: Option<String>,
        result: Result<User, IdentityError>,
    ) -> Settlement {
        {
            let mut in_flight = self.in_flight.borrow_mut();
            if in_flight.as_ref().is_some_and(|flight| flight.ticket == ticket) {
                *in_flight = None;
            }
        }

        if epoch != self.epoch.get() {
            debug!(ticket, "discarding stale identity resolution");
            return Settlement::Done(self.state.borrow().phase);
        }

        // The slot changed outside this controller, e.g. in another tab.
        let current = self.tokens.read();
        if current != token {
            if current.is_none() {
                debug!(ticket, "token removed during resolution");
                self.drop_session();
                return Settlement::Done(Phase::Anonymous);
            }

            debug!(ticket, "token replaced during resolution, resolving the new one");
            self.bump_epoch();
            self.in_flight.borrow_mut().take();
            self.set_state(SessionSnapshot {
                phase: Phase::Resolving,
                user: None,
            });
            return Settlement::Retry(self.begin_resolution());
        }

        let phase = match result {
            Ok(user) => self.apply_user(user),
            Err(IdentityError::NoToken) => {
                self.drop_session();
                Phase::Anonymous
            }
            Err(err) => {
                warn!(error = %err, "identity resolution failed, continuing anonymously");
                self.reset();
                Phase::Anonymous
            }
        };
        Settlement::Done(phase)
    }

    /// Stores the resolved user. The landing redirect fires only when the
    /// identity is new, so a refetch that re-confirms the same user stays put.
    fn apply_user(&self, user: User) -> Phase {
        let fresh = self
            .state
            .borrow()
            .user
            .as_ref()
            .map_or(true, |current| current.id != user.id);
        let role = user.role;

        self.set_state(SessionSnapshot {
            phase: Phase::Resolved,
            user: Some(user),
        });

        if fresh {
            let target = landing_route(role);
            info!(role = role.label(), target, "session resolved");
            self.navigator.navigate(target);
        }

        Phase::Resolved
    }

    /// Clears the credential and the session.
    fn reset(&self) {
        self.tokens.clear();
        self.drop_session();
    }

    /// Forgets the user and invalidates pending resolutions. The token slot is
    /// left to the caller.
    fn drop_session(&self) {
        self.bump_epoch();
        self.in_flight.borrow_mut().take();
        self.set_state(SessionSnapshot::anonymous());
    }

    fn set_state(&self, next: SessionSnapshot) {
        {
            let mut state = self.state.borrow_mut();
            if *state == next {
                return;
            }
            debug!(from = ?state.phase, to = ?next.phase, "session transition");
            *state = next.clone();
        }

        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&next);
        }
    }
}

fn settled(phase: Phase) -> PendingPhase {
    future::ready(phase).boxed_local().shared()
}
