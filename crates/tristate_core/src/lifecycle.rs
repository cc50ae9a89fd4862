//! Component lifecycle base
//!
//! Components are built in two phases so wiring can be adjusted between
//! construction and the point where subscriptions go live:
//!
//! ```text
//! Constructed --attach--> Attached --destroy--> Destroyed
//!      └──────────────destroy─────────────────────┘
//! ```
//!
//! [`ComponentLifecycle`] enforces those transitions and keeps the listeners
//! registered through [`listen`](ComponentLifecycle::listen) so `destroy` can
//! release anything the component forgot to unlisten.

use std::fmt;

use smallvec::SmallVec;

use crate::element::{ElementRef, ListenerId};
use crate::error::{LifecycleError, Result};
use crate::events::EventCallback;

/// Lifecycle phase of a component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Constructed,
    Attached,
    Destroyed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constructed => "constructed",
            Self::Attached => "attached",
            Self::Destroyed => "destroyed",
        })
    }
}

/// Lifecycle operation being requested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleOp {
    Attach,
    Destroy,
}

impl fmt::Display for LifecycleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Attach => "attach",
            Self::Destroy => "destroy",
        })
    }
}

/// Root element, lifecycle phase and root-scoped subscriptions
#[derive(Debug)]
pub struct ComponentLifecycle {
    root: ElementRef,
    state: LifecycleState,
    subscriptions: SmallVec<[(String, ListenerId); 4]>,
}

impl ComponentLifecycle {
    pub fn new(root: ElementRef) -> Self {
        Self {
            root,
            state: LifecycleState::Constructed,
            subscriptions: SmallVec::new(),
        }
    }

    pub fn root(&self) -> &ElementRef {
        &self.root
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Check that `op` is defined for the current state
    pub fn check(&self, op: LifecycleOp) -> Result<()> {
        let allowed = match op {
            LifecycleOp::Attach => self.state == LifecycleState::Constructed,
            LifecycleOp::Destroy => self.state != LifecycleState::Destroyed,
        };
        if allowed {
            Ok(())
        } else {
            Err(LifecycleError::InvalidTransition {
                op,
                state: self.state,
            })
        }
    }

    /// Move from `Constructed` to `Attached`
    pub fn attach(&mut self) -> Result<()> {
        self.check(LifecycleOp::Attach)?;
        self.state = LifecycleState::Attached;
        tracing::debug!("component attached");
        Ok(())
    }

    /// Subscribe to an event on the root
    pub fn listen(&mut self, event: &str, callback: EventCallback) -> ListenerId {
        let id = self.root.add_event_listener(event, callback);
        self.subscriptions.push((event.to_string(), id));
        id
    }

    /// Remove a subscription made with [`listen`](Self::listen)
    pub fn unlisten(&mut self, event: &str, id: ListenerId) -> bool {
        self.subscriptions
            .retain(|(name, sub)| !(name.as_str() == event && *sub == id));
        self.root.remove_event_listener(event, id)
    }

    /// Number of root subscriptions still live
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Release remaining subscriptions and move to `Destroyed`
    pub fn destroy(&mut self) -> Result<()> {
        self.check(LifecycleOp::Destroy)?;
        for (event, id) in self.subscriptions.drain(..) {
            self.root.remove_event_listener(&event, id);
        }
        self.state = LifecycleState::Destroyed;
        tracing::debug!("component destroyed");
        Ok(())
    }
}
