//! Replay Front End
//!
//! Reads JSON-line requests, applies them to a `SharedCache`, and writes one
//! JSON-line reply per request. Evictions triggered by a request are written
//! as discard notices just before that request's reply.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::cache::DiscardEvent;
use crate::error::Result;
use crate::models::{
    DeleteResponse, DiscardNotice, ErrorResponse, GetResponse, PutResponse, Reply, Request,
    StatsResponse,
};
use crate::shared::SharedCache;

/// Counters for one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Requests applied to the cache
    pub requests: usize,
    /// Lines that could not be parsed
    pub errors: usize,
    /// Discard notices written
    pub discards: usize,
}

/// Applies a single request to the cache and builds its reply.
pub async fn handle_request(cache: &SharedCache, request: Request) -> Reply {
    match request {
        Request::Put { key, value } => {
            let stored = cache.put(key.clone(), value).await;
            Reply::Put(PutResponse::new(key, stored))
        }
        Request::Get { key } => {
            let value = cache.get(key.as_deref()).await;
            Reply::Get(GetResponse::new(key, value))
        }
        Request::Delete { key } => {
            let deleted = cache.delete(&key).await;
            Reply::Delete(DeleteResponse::new(key, deleted))
        }
        Request::Print => Reply::Snapshot(cache.snapshot().await),
        Request::Stats => Reply::Stats(StatsResponse::from(cache.stats().await)),
    }
}

/// Replays every line of `reader` against `cache`, writing replies to `writer`.
///
/// Blank lines are skipped. Unparsable lines produce an error reply and the
/// replay continues. Fails only on I/O errors.
pub async fn replay<R, W>(
    cache: &SharedCache,
    discards: &mut UnboundedReceiver<DiscardEvent<String>>,
    reader: R,
    mut writer: W,
) -> Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = ReplaySummary::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match Request::parse(line) {
            Ok(request) => {
                debug!(?request, "Applying request");
                summary.requests += 1;
                handle_request(cache, request).await
            }
            Err(err) => {
                warn!(%err, line, "Skipping malformed request");
                summary.errors += 1;
                Reply::Error(ErrorResponse::new(err.to_string()))
            }
        };

        while let Ok(event) = discards.try_recv() {
            summary.discards += 1;
            write_reply(&mut writer, &Reply::Discard(DiscardNotice::from(event))).await?;
        }
        write_reply(&mut writer, &reply).await?;
    }

    writer.flush().await?;
    Ok(summary)
}

async fn write_reply<W>(writer: &mut W, reply: &Reply) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(reply)?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PolicyKind;
    use crate::config::Config;

    #[tokio::test]
    async fn test_handle_put_then_get() {
        let config = Config {
            max_items: 2,
            policy: PolicyKind::Fifo,
        };
        let (cache, _rx) = SharedCache::from_config(&config).unwrap();

        let reply = handle_request(
            &cache,
            Request::Put {
                key: Some("A".into()),
                value: Some("a".into()),
            },
        )
        .await;
        assert!(matches!(reply, Reply::Put(PutResponse { stored: true, .. })));

        let reply = handle_request(&cache, Request::Get { key: Some("A".into()) }).await;
        match reply {
            Reply::Get(resp) => assert_eq!(resp.value.as_deref(), Some("a")),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_delete_missing() {
        let (cache, _rx) = SharedCache::from_config(&Config::default()).unwrap();

        let reply = handle_request(&cache, Request::Delete { key: "A".into() }).await;
        assert!(matches!(reply, Reply::Delete(DeleteResponse { deleted: false, .. })));
    }
}
