//! Progress captions shown while a scan is in flight.

use std::future::{poll_fn, Future};
use std::pin::pin;
use std::task::Poll;
use std::time::Duration;

use crate::timer;

pub const INITIAL_CAPTION: &str = "Initializing Cognitive Audit...";
pub const CAPTION_INTERVAL: Duration = Duration::from_secs(2);

pub const PHASE_CAPTIONS: [&str; 9] = [
    "Building Topical Knowledge Graph...",
    "Mapping Entity-Subject relationships...",
    "Analyzing Intent-Content alignment...",
    "Evaluating NLP Sentiment & Tone consistency...",
    "Executing JS Rendering Pipeline Simulation...",
    "Checking Googlebot-Smartphone traversal...",
    "Calculating SGE Information Gain...",
    "Scanning Security Integrity (CSP/HSTS)...",
    "Finalizing Cognitive Audit roadmap...",
];

pub fn caption_at(tick: usize) -> &'static str {
    PHASE_CAPTIONS[tick % PHASE_CAPTIONS.len()]
}

/// Emits the next caption every `interval`, forever. Callers own the
/// lifetime: drop or cancel the task running this future to stop it.
pub async fn cycle_captions(interval: Duration, mut on_caption: impl FnMut(&'static str)) {
    let mut tick = 0usize;
    loop {
        timer::sleep(interval).await;
        on_caption(caption_at(tick));
        tick = tick.wrapping_add(1);
    }
}

/// Awaits `work` while cycling captions, and stops the ticker the moment
/// `work` resolves.
pub async fn with_captions<T>(
    interval: Duration,
    on_caption: impl FnMut(&'static str),
    work: impl Future<Output = T>,
) -> T {
    let mut ticker = pin!(cycle_captions(interval, on_caption));
    let mut work = pin!(work);
    poll_fn(|cx| {
        if let Poll::Ready(out) = work.as_mut().poll(cx) {
            return Poll::Ready(out);
        }
        let _ = ticker.as_mut().poll(cx);
        Poll::Pending
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_wrap_around() {
        assert_eq!(caption_at(0), PHASE_CAPTIONS[0]);
        assert_eq!(caption_at(PHASE_CAPTIONS.len()), PHASE_CAPTIONS[0]);
        assert_eq!(caption_at(PHASE_CAPTIONS.len() + 2), PHASE_CAPTIONS[2]);
    }

    #[tokio::test(start_paused = true)]
    async fn emits_one_caption_per_interval() {
        let mut seen = Vec::new();
        let _ = tokio::time::timeout(
            Duration::from_secs(7),
            cycle_captions(CAPTION_INTERVAL, |c| seen.push(c)),
        )
        .await;
        assert_eq!(seen, PHASE_CAPTIONS[..3]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_future_stops_the_ticker() {
        let mut count = 0;
        let _ = tokio::time::timeout(
            Duration::from_secs(3),
            cycle_captions(CAPTION_INTERVAL, |_| count += 1),
        )
        .await;
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn captions_stop_when_the_work_resolves() {
        let mut seen = Vec::new();
        let out = with_captions(
            CAPTION_INTERVAL,
            |c| seen.push(c),
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            },
        )
        .await;
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(out, "done");
        assert_eq!(seen, PHASE_CAPTIONS[..2]);
    }

    #[tokio::test(start_paused = true)]
    async fn instant_work_emits_no_captions() {
        let mut count = 0;
        let out = with_captions(CAPTION_INTERVAL, |_| count += 1, async { 7 }).await;
        assert_eq!(out, 7);
        assert_eq!(count, 0);
    }
}
