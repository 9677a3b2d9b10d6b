use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

#[derive(Debug)]
struct Window {
    opened: Instant,
    served: u32,
}

/// Fixed-window throttle shared across all requests of a router group.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    max_per_window: u32,
    window: Duration,
    state: Arc<Mutex<Window>>,
}

impl RateLimiter {
    pub fn per_second(max: u32) -> Self {
        Self {
            max_per_window: max.max(1),
            window: Duration::from_secs(1),
            state: Arc::new(Mutex::new(Window {
                opened: Instant::now(),
                served: 0,
            })),
        }
    }

    fn try_acquire(&self) -> bool {
        let mut window = self.state.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        if now.duration_since(window.opened) >= self.window {
            window.opened = now;
            window.served = 0;
        }
        if window.served < self.max_per_window {
            window.served += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limiter.try_acquire() {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "rate_limit_exceeded" })),
        )
            .into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_caps_the_request_count() {
        let limiter = RateLimiter::per_second(2);
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }

    #[test]
    fn zero_rps_still_admits_one_request() {
        let limiter = RateLimiter::per_second(0);
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
    }
}
