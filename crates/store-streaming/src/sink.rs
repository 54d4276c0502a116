//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use store_core::{LifecyclePhase, RenderError, TimingContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, so the same code drives Spin's
/// `OutgoingBody` in production and an in-memory channel in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell opening. Must be the first write.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), RenderError> {
        if self.state != SinkState::Initial {
            return Err(RenderError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. The shell must already be sent.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), RenderError> {
        match self.state {
            SinkState::Initial => return Err(RenderError::ShellNotSent),
            SinkState::Completed => {
                return Err(RenderError::StreamError("Sink already completed".to_string()))
            }
            SinkState::ShellSent => {}
        }

        self.timing.mark_section_start(name);
        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the shell closing and mark the response complete.
    pub async fn complete(&mut self, closing_html: &str) -> Result<(), RenderError> {
        match self.state {
            SinkState::Initial => return Err(RenderError::ShellNotSent),
            SinkState::Completed => {
                return Err(RenderError::StreamError("Sink already completed".to_string()))
            }
            SinkState::ShellSent => {}
        }

        self.write(closing_html).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| RenderError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");

        Ok(())
    }

    async fn write(&mut self, html: &str) -> Result<(), RenderError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| RenderError::StreamError(e.to_string()))?;
        self.bytes_sent += html.len();
        Ok(())
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    #[test]
    fn test_section_before_shell_is_rejected() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let err = block_on(sink.send_section("header", "<header></header>")).unwrap_err();
        assert!(matches!(err, RenderError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_streams_in_order() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
            sink.send_section("header", "<header/>").await.unwrap();
            sink.send_section("shoe-grid", "<div/>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::SectionSent("shoe-grid".to_string()));
            sink.complete("</html>").await.unwrap();
        });

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert_eq!(sink.sections_sent(), ["header", "shoe-grid"]);
        assert_eq!(sink.bytes_sent(), "<html><header/><div/></html>".len());
        assert!(sink.timing().section_timing("shoe-grid").is_some());

        drop(sink);
        let chunks: Vec<Vec<u8>> = block_on(rx.collect());
        let body = String::from_utf8(chunks.concat()).unwrap();
        assert_eq!(body, "<html><header/><div/></html>");
    }

    #[test]
    fn test_shell_only_once() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(sink.send_shell("<html>")).unwrap();
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }

    #[test]
    fn test_complete_twice_reports_completed_sink() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.complete("</html>").await.unwrap();
        });
        assert!(sink.timing().has_mark("complete"));

        let err = block_on(sink.complete("</html>")).unwrap_err();
        assert!(matches!(err, RenderError::StreamError(ref m) if m == "Sink already completed"));
        assert_eq!(sink.bytes_sent(), "<html></html>".len());
    }

    #[test]
    fn test_complete_before_shell_is_rejected() {
        let (tx, _rx) = mpsc::unbounded::<Vec<u8>>();
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let err = block_on(sink.complete("</html>")).unwrap_err();
        assert!(matches!(err, RenderError::ShellNotSent));
    }

    #[test]
    fn test_closed_receiver_surfaces_stream_error() {
        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        drop(rx);
        let mut sink = StreamingSink::new(tx, TimingContext::new());

        let err = block_on(sink.send_shell("<html>")).unwrap_err();
        assert!(matches!(err, RenderError::StreamError(_)));
    }
}
