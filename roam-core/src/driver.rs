use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::lifecycle::{Completion, FetchTicket, PackageDetailView, ViewState};
use crate::source::{PackageId, PackageSource};

/// Point-in-time copy of what the view is showing.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub id: Option<PackageId>,
    pub state: ViewState,
}

impl ViewSnapshot {
    fn of(view: &PackageDetailView) -> Self {
        Self {
            id: view.id().cloned(),
            state: view.state().clone(),
        }
    }
}

/// Runs a [`PackageDetailView`] against a [`PackageSource`].
///
/// Each fetch runs on its own task; results pass through the view's ticket
/// guard before they are published to subscribers.
pub struct ViewDriver {
    source: Arc<dyn PackageSource>,
    view: Arc<Mutex<PackageDetailView>>,
    tx: watch::Sender<ViewSnapshot>,
}

impl ViewDriver {
    pub fn new(source: Arc<dyn PackageSource>) -> Self {
        let view = PackageDetailView::new();
        let (tx, _) = watch::channel(ViewSnapshot::of(&view));
        Self {
            source,
            view: Arc::new(Mutex::new(view)),
            tx,
        }
    }

    /// Receive every visible state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.tx.subscribe()
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::of(&*self.view.lock().await)
    }

    /// Switch to `id`. Returns the fetch task, or `None` if `id` is already active.
    pub async fn navigate(&self, id: PackageId) -> Option<JoinHandle<Completion>> {
        let ticket = {
            let mut view = self.view.lock().await;
            let ticket = view.navigate(id)?;
            self.tx.send_replace(ViewSnapshot::of(&view));
            ticket
        };
        Some(self.spawn_fetch(ticket))
    }

    /// Re-fetch the active identifier.
    pub async fn refresh(&self) -> Option<JoinHandle<Completion>> {
        let ticket = {
            let mut view = self.view.lock().await;
            let ticket = view.refresh()?;
            self.tx.send_replace(ViewSnapshot::of(&view));
            ticket
        };
        Some(self.spawn_fetch(ticket))
    }

    pub async fn teardown(&self) {
        let mut view = self.view.lock().await;
        view.teardown();
        self.tx.send_replace(ViewSnapshot::of(&view));
    }

    /// Navigate to `id` and wait for its outcome.
    pub async fn load(&self, id: PackageId) -> ViewSnapshot {
        if let Some(task) = self.navigate(id).await {
            if let Err(e) = task.await {
                tracing::error!("Package fetch task failed: {}", e);
            }
        }
        self.snapshot().await
    }

    fn spawn_fetch(&self, ticket: FetchTicket) -> JoinHandle<Completion> {
        let source = self.source.clone();
        let view = self.view.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tracing::debug!("Fetching package {}", ticket.id());
            let outcome = source.fetch_package(ticket.id()).await;

            let mut view = view.lock().await;
            let completion = view.complete(&ticket, outcome);
            if completion == Completion::Applied {
                tx.send_replace(ViewSnapshot::of(&view));
            }
            completion
        })
    }
}
