//! Correlation id for one HTTP request.
//!
//! The `Trace` middleware generates an id per request and runs the handler
//! inside [`TraceId::scope`]. Anything on that task, such as the ordering
//! service building an [`Error`](crate::domain::Error), reads it back with
//! [`TraceId::current`] and stamps it on the response envelope and logs.
//!
//! The id does not follow work onto freshly spawned tasks; wrap such work in
//! `scope` again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    pub(crate) static TRACE_ID: TraceId;
}

/// UUID naming a single request, surfaced as `traceId` in error bodies and as
/// the `trace-id` response header.
///
/// # Examples
/// ```
/// use togohub::TraceId;
///
/// async fn log_order_lookup(order_id: i32) {
///     match TraceId::current() {
///         Some(trace) => println!("[{trace}] fetching order {order_id}"),
///         None => println!("fetching order {order_id} outside a request"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(pub(crate) Uuid);

impl TraceId {
    /// Fresh random id for an incoming request.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The id of the request being served on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current request id.
    ///
    /// # Examples
    /// ```
    /// use togohub::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let trace: TraceId = "7f3c2a9e-0b1d-4c55-9e21-5a8d6f4b0c11"
    ///     .parse()
    ///     .expect("valid UUID");
    /// let seen = TraceId::scope(trace, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(trace));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;

    #[tokio::test]
    async fn errors_built_inside_a_request_carry_its_id() {
        let trace = TraceId::generate();
        let err = TraceId::scope(trace, async { Error::not_found("order 9 not found") }).await;
        assert_eq!(err.trace_id(), Some(trace.to_string().as_str()));
    }

    #[tokio::test]
    async fn errors_built_outside_a_request_have_no_id() {
        assert!(TraceId::current().is_none());
        assert_eq!(Error::not_found("order 9 not found").trace_id(), None);
    }

    #[tokio::test]
    async fn nested_scopes_restore_the_outer_request() {
        let outer = TraceId::generate();
        let inner = TraceId::generate();
        let (during, after) = TraceId::scope(outer, async move {
            let during = TraceId::scope(inner, async { TraceId::current() }).await;
            (during, TraceId::current())
        })
        .await;
        assert_eq!(during, Some(inner));
        assert_eq!(after, Some(outer));
    }

    #[test]
    fn header_value_parses_back() {
        let trace = TraceId::generate();
        let parsed: TraceId = trace.to_string().parse().expect("header value is a UUID");
        assert_eq!(parsed, trace);
        assert!("not-a-uuid".parse::<TraceId>().is_err());
    }
}
