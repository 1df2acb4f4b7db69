//! Upstream trace context from inbound request headers.

use opentelemetry::{
    Context, global,
    propagation::{Extractor, TextMapPropagator},
    trace::TraceContextExt as _,
};
use salvo::http::{HeaderMap, HeaderName};

pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    global::get_text_map_propagator(|propagator| upstream_context(propagator, headers))
}

/// Remote span context carried by `headers`, if any.
///
/// Extraction starts from an empty context so a request without trace headers never
/// attaches to whatever span happens to be active in-process.
fn upstream_context<P>(propagator: &P, headers: &HeaderMap) -> Option<Context>
where
    P: TextMapPropagator + ?Sized,
{
    let context = propagator.extract_with_context(&Context::new(), &RequestHeaders(headers));
    let valid = context.span().span_context().is_valid();

    valid.then_some(context)
}

struct RequestHeaders<'a>(&'a HeaderMap);

impl Extractor for RequestHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
