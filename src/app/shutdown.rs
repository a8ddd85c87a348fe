//! Interrupt handling.

use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on the first Ctrl-C.
///
/// In-flight lookups fail with `Cancelled`, so the run finishes with the
/// results gathered so far. The returned task ends when the token is
/// cancelled by anyone.
pub fn cancel_on_interrupt(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                match result {
                    Ok(()) => log::warn!("Interrupted, finishing with partial results"),
                    Err(e) => {
                        log::warn!("Failed to listen for Ctrl-C: {e}");
                        return;
                    }
                }
                cancel.cancel();
            }
            _ = cancel.cancelled() => {}
        }
    })
}
