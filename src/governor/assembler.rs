//! Text assembly from complete strings or live fragment streams

use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

/// Source of the text for one pipeline turn
///
/// Upstream generators hand the governor either a complete string or a
/// live sequence of fragments still being produced. Duration cannot be
/// known from a prefix alone, so streamed sources are always drained to
/// completion before any estimation happens.
pub enum TextSource {
    /// Text that is already fully materialized
    Complete(String),
    /// Fragments emitted incrementally by an upstream producer
    Stream(BoxStream<'static, String>),
}

impl TextSource {
    /// Wrap a live fragment stream
    pub fn from_stream<S>(fragments: S) -> Self
    where
        S: Stream<Item = String> + Send + 'static,
    {
        Self::Stream(fragments.boxed())
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        Self::Complete(text)
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        Self::Complete(text.to_string())
    }
}

/// Materialize the full text for a source
///
/// Complete strings return without suspending. Streams are consumed to
/// completion with fragments concatenated in arrival order. Dropping the
/// returned future abandons the stream; no partial text escapes.
pub async fn assemble(source: TextSource) -> String {
    match source {
        TextSource::Complete(text) => text,
        TextSource::Stream(mut fragments) => {
            let mut text = String::new();
            while let Some(fragment) = fragments.next().await {
                text.push_str(&fragment);
            }
            text
        }
    }
}
