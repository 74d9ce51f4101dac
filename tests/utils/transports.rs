/// Request transports with scripted behaviour for driving the fetcher
use async_trait::async_trait;
use reelchain_lib::modules::retrieval::domain::{FetchErrorKind, HttpRequest, HttpResponse};
use reelchain_lib::modules::retrieval::infrastructure::RequestTransport;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Reply = Result<HttpResponse, FetchErrorKind>;

/// Replays queued replies in order, repeating the fallback once the queue
/// runs dry. Counts every send.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    calls: AtomicU32,
    urls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Reply>, fallback: Reply) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback,
            calls: AtomicU32::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(Vec::new(), reply)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestTransport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchErrorKind> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(request.url.clone());

        let next = self.replies.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

/// Answers only after `latency`; records whether an in-flight send was
/// dropped before it completed
pub struct SlowTransport {
    latency: Duration,
    started: AtomicU32,
    completed: AtomicU32,
    abandoned: Arc<AtomicBool>,
}

struct InFlight {
    abandoned: Arc<AtomicBool>,
    done: bool,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.done {
            self.abandoned.store(true, Ordering::SeqCst);
        }
    }
}

impl SlowTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            started: AtomicU32::new(0),
            completed: AtomicU32::new(0),
            abandoned: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn started(&self) -> u32 {
        self.started.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> u32 {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn was_abandoned(&self) -> bool {
        self.abandoned.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RequestTransport for SlowTransport {
    async fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, FetchErrorKind> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let mut guard = InFlight {
            abandoned: Arc::clone(&self.abandoned),
            done: false,
        };

        tokio::time::sleep(self.latency).await;

        guard.done = true;
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse::ok(r#"{"late": true}"#))
    }
}
