use std::sync::Arc;

use tokio::sync::{broadcast, oneshot};

struct RawContext {
    // Dropping the last clone of this sender resolves `Handler::done`.
    _sender: oneshot::Sender<()>,
    cancel_receiver: broadcast::Receiver<()>,
}

/// Cancellation signal shared by every task tied to the process
/// lifetime.
///
/// Each clone observes the same cancellation; the owning [`Handler`]
/// triggers it and can wait until every clone has been dropped.
#[derive(Clone)]
pub struct Context(Arc<RawContext>);

pub struct Handler {
    recv: oneshot::Receiver<()>,
    cancel_sender: broadcast::Sender<()>,
}

impl Context {
    #[must_use]
    pub fn new() -> (Self, Handler) {
        let (sender, recv) = oneshot::channel();
        let (cancel_sender, cancel_receiver) = broadcast::channel(1);

        (
            Self(Arc::new(RawContext {
                _sender: sender,
                cancel_receiver,
            })),
            Handler {
                recv,
                cancel_sender,
            },
        )
    }

    /// Resolves once the owning handler cancels.
    pub async fn done(&self) {
        let mut recv = self.0.cancel_receiver.resubscribe();
        let _ = recv.recv().await;
    }
}

impl Handler {
    /// Resolves once every context clone has been dropped.
    pub async fn done(&mut self) {
        let _ = (&mut self.recv).await;
    }

    /// Cancels all contexts, then waits for them to be dropped.
    pub async fn cancel(self) {
        drop(self.cancel_sender);

        let _ = self.recv.await;
    }
}
