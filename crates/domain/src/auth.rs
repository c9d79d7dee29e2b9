use std::{cell::RefCell, rc::Rc};

use log::{debug, error, warn};

use crate::User;

pub type AuthListener = Box<dyn Fn(Option<&User>)>;

/// Identity provider handling accounts and the current session.
///
/// Implementations must notify subscribers about every change of the current
/// user, including the initial state once it is known.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn create_account(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn send_email_verification(&self, user: &User) -> Result<(), AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
    fn subscribe(&self, listener: AuthListener) -> Subscription;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already in use")]
    EmailExists,
    #[error("password too weak")]
    WeakPassword,
    #[error("no session")]
    NoSession,
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Handle of a registered listener.
///
/// The listener is removed when the handle is dropped.
#[must_use]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Registry of auth state listeners for use by [`AuthProvider`] implementations.
#[derive(Clone, Default)]
pub struct AuthListeners {
    inner: Rc<RefCell<Listeners>>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Rc<dyn Fn(Option<&User>)>)>,
}

impl AuthListeners {
    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push((id, Rc::from(listener)));
            id
        };
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().entries.retain(|(i, _)| *i != id);
            }
        })
    }

    pub fn notify(&self, user: Option<&User>) {
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(user);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub error: Option<AuthError>,
    pub confirm_email: bool,
}

struct SessionState {
    user: Option<User>,
    loading: bool,
}

/// Current session of an identity provider.
///
/// The session is loading until the provider reports the initial state.
pub struct AuthSession<P> {
    provider: P,
    state: Rc<RefCell<SessionState>>,
    _subscription: Subscription,
}

impl<P: AuthProvider> AuthSession<P> {
    pub fn new(provider: P) -> Self {
        let state = Rc::new(RefCell::new(SessionState {
            user: None,
            loading: true,
        }));
        let subscription = provider.subscribe({
            let state = Rc::clone(&state);
            Box::new(move |user: Option<&User>| {
                debug!("auth state changed: signed in={}", user.is_some());
                let mut state = state.borrow_mut();
                state.user = user.cloned();
                state.loading = false;
            })
        });
        Self {
            provider,
            state,
            _subscription: subscription,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().user.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.provider.sign_in(email, password).await {
            Ok(_) => Ok(()),
            Err(err) => {
                error!("sign in error: {err}");
                Err(err)
            }
        }
    }

    /// Create an account and request the verification email.
    ///
    /// Errors are returned as part of the result. A failure to send the
    /// verification email does not affect the created account.
    pub async fn sign_up(&self, email: &str, password: &str) -> SignUpResult {
        match self.provider.create_account(email, password).await {
            Ok(user) => {
                if let Err(err) = self.provider.send_email_verification(&user).await {
                    warn!("failed to send verification email: {err}");
                }
                SignUpResult {
                    error: None,
                    confirm_email: true,
                }
            }
            Err(err) => {
                error!("sign up error: {err}");
                SignUpResult {
                    error: Some(err),
                    confirm_email: false,
                }
            }
        }
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        match self.provider.sign_out().await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("sign out error: {err}");
                Err(err)
            }
        }
    }

    pub fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription {
        self.provider.subscribe(listener)
    }
}
