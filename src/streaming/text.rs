//! Text stream adapter and deferred terminal values.

use std::future::Future;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;
use futures_util::StreamExt;

use crate::error::ModelError;
use crate::traits::LanguageModel;
use crate::types::{FinishReason, GenerationRequest, StreamEvent, Usage};

use super::types::{EventStream, TextStream};

/// Outcome of a finished generation, written once by the terminal handler.
type Terminal = Result<(FinishReason, Usage), ModelError>;

/// Cloneable handle onto the shared completion cell.
///
/// Resolving through a `Shared` one-shot receiver guarantees that usage and
/// finish reason are settled by the same internal event; there is no window
/// where one has resolved and the other has not.
#[derive(Clone)]
struct Completion {
    shared: Shared<oneshot::Receiver<Terminal>>,
}

impl Completion {
    async fn terminal(self) -> Terminal {
        match self.shared.await {
            Ok(terminal) => terminal,
            // The producing stream was dropped before its terminal event
            // (caller stopped consuming). The deferred values stay
            // unresolved; cancellation must not look like a rejection.
            Err(oneshot::Canceled) => std::future::pending().await,
        }
    }
}

/// Result of a streaming text generation call.
///
/// The incremental sequence is owned by this struct; consuming it is the
/// only way to observe generated content, and ownership makes a second
/// independent consumption impossible. The deferred accessors can be taken
/// at any time and awaited concurrently with the stream.
///
/// # Examples
///
/// ```rust,no_run
/// # use futures_util::StreamExt;
/// # use switchboard::streaming::stream_text;
/// # use switchboard::types::GenerationRequest;
/// # async fn example(model: &dyn switchboard::traits::LanguageModel) -> Result<(), switchboard::error::ModelError> {
/// let mut result = stream_text(model, GenerationRequest::new("Hello, test!")).await?;
///
/// while let Some(fragment) = result.stream.next().await {
///     print!("{}", fragment?);
/// }
///
/// println!("Token usage: {:?}", result.usage().await?);
/// println!("Finish reason: {:?}", result.finish_reason().await?);
/// # Ok(())
/// # }
/// ```
pub struct StreamTextResult {
    /// The incremental text sequence.
    pub stream: TextStream,
    completion: Completion,
}

impl StreamTextResult {
    /// Adapt a raw event source into the three-view streaming response.
    ///
    /// The source is only polled while the text stream is consumed; the
    /// deferred values resolve once the terminal event has been observed.
    pub fn from_events(source: EventStream) -> Self {
        let (tx, rx) = oneshot::channel::<Terminal>();

        let stream: TextStream = Box::pin(async_stream::stream! {
            let mut source = source;
            let mut tx = Some(tx);
            while let Some(event) = source.next().await {
                match event {
                    Ok(StreamEvent::TextDelta { delta }) => yield Ok(delta),
                    Ok(StreamEvent::Finish { reason, usage }) => {
                        tracing::debug!(?reason, ?usage, "text stream finished");
                        if let Some(tx) = tx.take() {
                            let _ = tx.send(Ok((reason, usage)));
                        }
                        // Nothing may follow the terminal event.
                        break;
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "text stream failed");
                        if let Some(tx) = tx.take() {
                            let _ = tx.send(Err(err.clone()));
                        }
                        yield Err(err);
                        break;
                    }
                }
            }
        });

        Self {
            stream,
            completion: Completion {
                shared: rx.shared(),
            },
        }
    }

    /// Deferred total token usage.
    ///
    /// Resolves after the generation's terminal event; rejects with the
    /// stream's cause if the source failed. The returned future is `'static`
    /// and can be held or awaited independently of the text stream.
    pub fn usage(&self) -> impl Future<Output = Result<Usage, ModelError>> + Send + 'static {
        let completion = self.completion.clone();
        async move { completion.terminal().await.map(|(_, usage)| usage) }
    }

    /// Deferred finish reason.
    ///
    /// Settled by the same internal completion event as [`Self::usage`].
    pub fn finish_reason(
        &self,
    ) -> impl Future<Output = Result<FinishReason, ModelError>> + Send + 'static {
        let completion = self.completion.clone();
        async move { completion.terminal().await.map(|(reason, _)| reason) }
    }
}

/// Start a streaming text generation against a resolved language model.
///
/// Resolution-time errors from the model handle (`generate_stream` failing
/// outright) are returned directly; failures after streaming began surface
/// through the returned [`StreamTextResult`].
pub async fn stream_text(
    model: &dyn LanguageModel,
    request: GenerationRequest,
) -> Result<StreamTextResult, ModelError> {
    let events = model.generate_stream(request).await?;
    Ok(StreamTextResult::from_events(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn source_of(events: Vec<Result<StreamEvent, ModelError>>) -> EventStream {
        Box::pin(stream::iter(events))
    }

    #[tokio::test]
    async fn empty_source_yields_nothing() {
        let mut result = StreamTextResult::from_events(source_of(vec![]));
        assert!(result.stream.next().await.is_none());
    }

    #[test]
    fn usage_is_pending_until_the_stream_is_drained() {
        let result = StreamTextResult::from_events(source_of(vec![Ok(StreamEvent::Finish {
            reason: FinishReason::Stop,
            usage: Usage::new(3, 10),
        })]));
        let mut task = tokio_test::task::spawn(result.usage());
        // The terminal event exists in the source, but nothing has polled
        // the stream yet.
        tokio_test::assert_pending!(task.poll());
    }

    #[tokio::test]
    async fn finish_only_source_resolves_deferred_values() {
        let mut result = StreamTextResult::from_events(source_of(vec![Ok(StreamEvent::Finish {
            reason: FinishReason::Stop,
            usage: Usage::new(1, 0),
        })]));
        let usage = result.usage();
        assert!(result.stream.next().await.is_none());
        assert_eq!(usage.await.unwrap(), Usage::new(1, 0));
    }
}
