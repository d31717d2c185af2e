//! Tests for the FutureWrapExt trait.

use causeway::async_ext::{FutureWrapExt, WrapFuture};
use causeway::{Arg, Failure};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

#[test]
fn wrap_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<WrapFuture<std::future::Ready<Result<(), Failure>>, fn() -> [&'static str; 1]>>();
    assert_sync::<WrapFuture<std::future::Ready<Result<(), Failure>>, fn() -> [&'static str; 1]>>();
}

#[tokio::test]
async fn wrap_err_with_does_not_evaluate_on_success() {
    let call_count = AtomicU32::new(0);

    let fut = async { Ok::<_, Failure>(42) };
    let result = fut
        .wrap_err_with(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            ["should not be called"]
        })
        .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn wrap_err_with_evaluates_once_on_error() {
    let call_count = AtomicU32::new(0);

    let fut = async { Err::<i32, _>(Failure::new("connection reset")) };
    let err = fut
        .wrap_err_with(|| {
            call_count.fetch_add(1, Ordering::SeqCst);
            [Arg::from("fetching user"), "id".into(), 7.into()]
        })
        .await
        .unwrap_err();

    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert_eq!(err.to_string(), "fetching user: connection reset");
    assert_eq!(err.lookup_value("id"), Some("7"));
}

#[tokio::test]
async fn wrap_err_converts_foreign_errors() {
    let fut = async { Err::<(), _>(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow")) };
    let err = fut.wrap_err(["reading socket"]).await.unwrap_err();

    assert_eq!(err.to_string(), "reading socket: slow");
    assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
}

#[tokio::test]
async fn wrap_err_records_creation_site_not_poll_site() {
    let line = line!() + 1;
    let fut = async { Err::<(), _>(Failure::new("late")) }.wrap_err(["deferred"]);

    tokio::time::sleep(Duration::from_millis(1)).await;
    let err = fut.await.unwrap_err();

    let location = err.trace().frames()[0].location.clone().unwrap();
    assert_eq!(location.line, line);
    assert!(location.file.ends_with("future_ext_tests.rs"));
}

#[tokio::test]
async fn wrap_err_across_pending_polls() {
    let fut = async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Err::<(), _>(Failure::new("after sleep"))
    };

    let err = fut.wrap_err(["waiting"]).await.unwrap_err();
    assert_eq!(err.to_string(), "waiting: after sleep");
    assert_eq!(err.depth(), 1);
}

#[tokio::test]
async fn nested_async_wraps_build_chain() {
    async fn fetch_row() -> Result<String, Failure> {
        Err(Failure::new("row missing"))
    }

    async fn load() -> Result<String, Failure> {
        fetch_row().wrap_err(["loading row", "id", "7"]).await
    }

    let err = load().wrap_err(["rendering page"]).await.unwrap_err();

    assert_eq!(err.depth(), 2);
    assert_eq!(err.to_string(), "rendering page: row missing");
    assert_eq!(err.proper_cause().lookup_value("id"), Some("7"));
}
