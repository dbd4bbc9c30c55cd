//! Server-sent event streams backing the live views.
//!
//! Each stream is fed by a spawned task that owns its timer and change
//! subscription. The task exits as soon as the client goes away and the
//! receiving half of its channel is dropped.

use axum::response::sse::{Event, KeepAlive, Sse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{convert::Infallible, future::Future, time::Duration};
use storage::{repository::lift::LiftRepository, services::countdown::TimeRemaining};
use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tokio_stream::wrappers::ReceiverStream;

const EVENT_BUFFER: usize = 8;

pub type EventStream = Sse<ReceiverStream<Result<Event, Infallible>>>;

/// Stream `snapshot` once on connect, after every append, and at least every
/// `refresh` so writes from other processes show up within one interval.
pub fn on_change<F, Fut, T>(repo: LiftRepository, refresh: Duration, snapshot: F) -> EventStream
where
    F: Fn(LiftRepository) -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let mut changes = repo.subscribe();
    tracing::debug!(subscribers = repo.subscriber_count(), "Live view opened");

    tokio::spawn(async move {
        let mut ticker = time::interval(refresh);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = tx.closed() => break,
                _ = ticker.tick() => {}
                changed = changes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    ticker.reset();
                }
            }

            let Some(event) = to_event(&snapshot(repo.clone()).await) else {
                continue;
            };
            if tx.send(Ok(event)).await.is_err() {
                break;
            }
        }

        tracing::debug!("Live view closed");
    });

    Sse::new(ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

/// Stream the countdown every `tick` until nothing is left. The final event
/// is the all-zero state, after which the stream ends.
pub fn countdown(target: DateTime<Utc>, tick: Duration) -> EventStream {
    let (tx, rx) = mpsc::channel(EVENT_BUFFER);

    tokio::spawn(async move {
        let mut ticker = time::interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tx.closed() => break,
                _ = ticker.tick() => {}
            }

            let remaining = TimeRemaining::until(target, Utc::now());
            if let Some(event) = to_event(&remaining)
                && tx.send(Ok(event)).await.is_err()
            {
                break;
            }
            if remaining.is_zero() {
                break;
            }
        }

        tracing::debug!("Countdown stream closed");
    });

    Sse::new(ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

fn to_event<T: Serialize>(payload: &T) -> Option<Event> {
    match Event::default().json_data(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::error!("Failed to encode live event: {}", e);
            None
        }
    }
}
