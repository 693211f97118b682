use super::*;

#[test]
fn check_status_accepts_every_2xx() {
    for status in [200, 201, 202, 204, 299] {
        assert_eq!(check_status(status), Ok(()), "status {status}");
    }
}

#[test]
fn check_status_rejects_non_2xx() {
    for status in [199, 301, 400, 422, 500, 503] {
        assert_eq!(check_status(status), Err(SubmitError::Status(status)), "status {status}");
    }
}

#[test]
fn status_error_message_includes_code() {
    assert_eq!(SubmitError::Status(500).to_string(), "form endpoint responded with status 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn post_json_is_unavailable_outside_the_browser() {
    let body = serde_json::json!({ "name": "Ada" });
    let outcome = poll_ready(post_json("https://formspree.io/f/test", &body));
    assert_eq!(outcome, Err(SubmitError::Unavailable));
}

/// Poll a future that never pends (the SSR stub resolves immediately).
#[cfg(not(feature = "hydrate"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
