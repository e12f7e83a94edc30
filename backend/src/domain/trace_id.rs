//! Per-request correlation identifier.
//!
//! The HTTP edge opens a scope for each request; anything running inside
//! that future (handlers, the inventory service, error constructors) can read
//! the identifier back with [`TraceId::current`]. Task-locals do not cross
//! `tokio::spawn`, so spawned work must be wrapped in [`TraceId::scope`]
//! again.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Identifier echoed in the `trace-id` header and in error bodies.
///
/// # Examples
/// ```
/// use car_inventory::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let id: TraceId = "00000000-0000-0000-0000-000000000000"
///     .parse()
///     .expect("valid UUID");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// assert_eq!(TraceId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier for a new request.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    pub async fn scope<F: Future>(trace_id: Self, fut: F) -> F::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn nested_scopes_shadow_outer_identifier() {
        let outer = TraceId::generate();
        let inner = TraceId::generate();

        let (before, during, after) = TraceId::scope(outer, async move {
            let before = TraceId::current();
            let during = TraceId::scope(inner, async { TraceId::current() }).await;
            (before, during, TraceId::current())
        })
        .await;

        assert_eq!(before, Some(outer));
        assert_eq!(during, Some(inner));
        assert_eq!(after, Some(outer));
    }

    #[rstest]
    #[tokio::test]
    async fn spawned_tasks_do_not_inherit_the_scope() {
        let seen = TraceId::scope(TraceId::generate(), async {
            tokio::spawn(async { TraceId::current() })
                .await
                .expect("task completes")
        })
        .await;
        assert_eq!(seen, None);
    }

    #[rstest]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
    #[case("3FA85F64-5717-4562-B3FC-2C963F66AFA6", true)]
    #[case("not-a-trace", false)]
    fn parses_uuid_text(#[case] raw: &str, #[case] valid: bool) {
        let parsed = raw.parse::<TraceId>();
        assert_eq!(parsed.is_ok(), valid);
        if let Ok(id) = parsed {
            assert_eq!(id.to_string(), raw.to_ascii_lowercase());
        }
    }
}
