#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::{Duration, Instant};

use redis::{ErrorKind, RedisError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use hitcounter_core::{CounterStore, HitError, HITS_KEY};
use hitcounter_server::app_state::AppState;
use hitcounter_server::config::{Config, RedisSection};
use hitcounter_server::infra::redis_store::map_redis_err;
use hitcounter_server::infra::RedisStore;
use hitcounter_server::router;

// Nothing listens on port 1; connects are refused immediately.
fn closed_port() -> RedisSection {
    RedisSection {
        port: 1,
        host: "127.0.0.1".into(),
        ..RedisSection::default()
    }
}

#[test]
fn construction_does_not_connect() {
    let store = RedisStore::new(&closed_port()).unwrap();
    assert_eq!(store.endpoint(), "redis://127.0.0.1:1/");
}

#[test]
fn app_state_from_default_config() {
    let state = AppState::from_config(Config::default()).unwrap();
    assert_eq!(state.cfg().redis.port, 6379);
}

#[tokio::test]
async fn unreachable_store_fails_fast_on_every_call() {
    let store = RedisStore::new(&closed_port()).unwrap();

    let started = Instant::now();
    assert!(matches!(store.incr(HITS_KEY).await, Err(HitError::Unavailable(_))));
    assert!(matches!(store.get(HITS_KEY).await, Err(HitError::Unavailable(_))));
    assert!(matches!(store.ping().await, Err(HitError::Unavailable(_))));

    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[tokio::test]
async fn readyz_reports_unreachable_redis() {
    let cfg = Config {
        redis: closed_port(),
        ..Config::default()
    };
    let app = router::build_router(AppState::from_config(cfg).unwrap());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let started = Instant::now();
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /readyz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut res = String::new();
    stream.read_to_string(&mut res).await.unwrap();

    assert!(res.starts_with("HTTP/1.1 503"), "{res}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn only_integer_failures_are_malformed() {
    let not_int = RedisError::from((
        ErrorKind::ResponseError,
        "An error was signalled by the server",
        "value is not an integer or out of range".to_string(),
    ));
    assert!(matches!(map_redis_err(not_int), HitError::Malformed(_)));

    let parse = RedisError::from((ErrorKind::TypeError, "Response was of incompatible type"));
    assert!(matches!(map_redis_err(parse), HitError::Malformed(_)));

    let other = RedisError::from((
        ErrorKind::ResponseError,
        "An error was signalled by the server",
        "unknown command 'INCR'".to_string(),
    ));
    assert!(matches!(map_redis_err(other), HitError::Internal(_)));

    let io = RedisError::from(std::io::Error::from(std::io::ErrorKind::ConnectionRefused));
    assert!(matches!(map_redis_err(io), HitError::Unavailable(_)));
}
