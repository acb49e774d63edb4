//! Forward-deadline enforcement.
//!
//! # Responsibilities
//! - Wrap the upstream call with a total deadline
//! - Map an elapsed deadline to a transport failure
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - A timed-out forward is indistinguishable from any other transport
//!   failure to the client: it yields the fixed fallback response

use std::future::Future;
use std::time::Duration;

use crate::error::TransportFailure;

/// Await an upstream call, bounding it to `deadline`.
///
/// Transport errors and elapsed deadlines both surface as
/// [`TransportFailure`]; the pending call is dropped on timeout, releasing
/// its connection.
pub async fn with_deadline<F, T>(deadline: Duration, call: F) -> Result<T, TransportFailure>
where
    F: Future<Output = Result<T, hyper_util::client::legacy::Error>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(TransportFailure::Upstream(e)),
        Err(_) => Err(TransportFailure::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn elapsed_deadline_becomes_timeout_failure() {
        let result = with_deadline(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(TransportFailure::Timeout(_))));
    }

    #[tokio::test]
    async fn completed_call_passes_through() {
        let result = with_deadline(Duration::from_secs(1), async { Ok(42u16) }).await;
        assert_eq!(result.unwrap(), 42);
    }
}
