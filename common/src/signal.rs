use std::future::poll_fn;
use std::task::Poll;

use tokio::signal::unix::{signal, Signal, SignalKind};

/// Listens on any number of unix signals and resolves when one fires, so
/// shutdown paths can select on a single `recv` future.
#[derive(Default)]
pub struct SignalHandler {
    signals: Vec<(SignalKind, Signal)>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to a signal. Subscribing to the same kind twice is a
    /// no-op.
    pub fn with_signal(mut self, kind: SignalKind) -> Self {
        if self.signals.iter().any(|(k, _)| *k == kind) {
            return self;
        }

        let signal = signal(kind).expect("failed to register signal");
        self.signals.push((kind, signal));

        self
    }

    /// Resolves with the kind of the next subscribed signal to arrive.
    /// With no subscriptions this never resolves.
    pub async fn recv(&mut self) -> SignalKind {
        poll_fn(|cx| {
            for (kind, signal) in &mut self.signals {
                if signal.poll_recv(cx).is_ready() {
                    return Poll::Ready(*kind);
                }
            }

            Poll::Pending
        })
        .await
    }
}
