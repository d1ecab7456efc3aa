//! Server-sent-events endpoint relaying database change notifications

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

/// Stream database change notifications to the client.
///
/// Each client gets its own broadcast subscription, torn down when the
/// connection closes. The first event confirms the connection; everything
/// after relays trigger payloads verbatim. Missed events are not replayed.
#[utoipa::path(
    get,
    path = "/live-updates",
    tag = "live-updates",
    responses(
        (status = 200, description = "SSE stream of change notifications")
    )
)]
pub async fn live_updates(
    State(state): State<crate::AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.services.changes.subscribe();

    let connected =
        tokio_stream::once(Ok::<_, Infallible>(Event::default().data("{\"type\":\"connected\"}")));

    let updates = BroadcastStream::new(receiver)
        .filter_map(|message| message.ok())
        .map(|payload| Ok::<_, Infallible>(Event::default().data(payload)));

    Sse::new(connected.chain(updates)).keep_alive(KeepAlive::default())
}
