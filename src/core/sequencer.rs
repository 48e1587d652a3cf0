//! Load sequencing for dashboard activations
//!
//! Every "screen became active" event starts a new load. Loads can overlap
//! and finish out of order, so each one carries a generation number taken
//! when it starts. A finished load is published only if its generation is
//! newer than the last published one; older results are dropped.
//!
//! # Thread Safety
//!
//! `LoadSequencer` is shared behind an `Arc` by the async session. The
//! generation counter is atomic and the published slot sits behind a mutex.
//! The publish notification runs under that mutex, so observers never see an
//! older dashboard after a newer one.

use crate::types::Dashboard;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Generation tag of one in-flight load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result became the current dashboard
    Published { generation: u64 },
    /// A newer result was already published; this one was dropped
    Stale { generation: u64 },
}

#[derive(Debug, Default)]
struct Published {
    generation: u64,
    dashboard: Option<Arc<Dashboard>>,
}

/// Generation counter plus the latest published dashboard
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: AtomicU64,
    published: Mutex<Published>,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load
    ///
    /// Generations start at 1 and increase by one per call.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket { generation }
    }

    /// Latest published dashboard
    pub fn current(&self) -> Option<Arc<Dashboard>> {
        self.lock().dashboard.clone()
    }

    /// Publish a finished load
    ///
    /// Equivalent to [`publish_with`](Self::publish_with) with no observer.
    pub fn publish(&self, ticket: LoadTicket, dashboard: Dashboard) -> LoadOutcome {
        self.publish_with(ticket, dashboard, |_| {})
    }

    /// Publish a finished load and notify an observer if it was accepted
    ///
    /// `notify` runs while the published slot is locked.
    pub fn publish_with<F>(&self, ticket: LoadTicket, dashboard: Dashboard, notify: F) -> LoadOutcome
    where
        F: FnOnce(&Arc<Dashboard>),
    {
        let mut published = self.lock();

        if ticket.generation <= published.generation {
            tracing::info!(
                generation = ticket.generation,
                published = published.generation,
                "dropping stale dashboard load"
            );
            return LoadOutcome::Stale {
                generation: ticket.generation,
            };
        }

        let dashboard = Arc::new(dashboard);
        notify(&dashboard);
        published.generation = ticket.generation;
        published.dashboard = Some(dashboard);

        LoadOutcome::Published {
            generation: ticket.generation,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Published> {
        // The slot is always left consistent, so a poisoned lock is still usable.
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
