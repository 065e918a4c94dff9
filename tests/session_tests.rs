//! End-to-end tests wiring the full wallet session

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use wallet_session::{
    Account, AssetKind, DestinationResolver, LifecycleChannel, LinkPayload, LockSink, LockState,
    MemoryStateSource, RouteResult, Token, WalletSession,
};

struct RecordingResolver {
    calls: Mutex<Vec<String>>,
}

impl RecordingResolver {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DestinationResolver for RecordingResolver {
    async fn parse(&self, raw_link: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(raw_link.to_string());
        Ok(())
    }
}

struct CountingSink {
    count: AtomicUsize,
}

impl CountingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
        })
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LockSink for CountingSink {
    async fn lock_wallet(&self) -> anyhow::Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct Harness {
    state: Arc<MemoryStateSource>,
    lifecycle: Arc<LifecycleChannel>,
    resolver: Arc<RecordingResolver>,
    sink: Arc<CountingSink>,
    session: WalletSession,
}

fn harness(lock_timeout_ms: i64) -> Harness {
    let state = Arc::new(MemoryStateSource::new());
    state.put_account(Account::new("0xabc", "2000000000000000000"));
    state.set_tokens(vec![Token::new(
        "0x6b175474e89094c44da98b954eedeac495271d0f",
        "DAI",
        "100",
    )
    .with_fiat("100.00 USD")]);
    state.set_conversion_rate(1800.0);
    state.set_currency("usd");
    state.set_lock_timeout_ms(lock_timeout_ms);

    let lifecycle = Arc::new(LifecycleChannel::new());
    let resolver = RecordingResolver::new();
    let sink = CountingSink::new();
    let session = WalletSession::new(
        state.clone(),
        lifecycle.clone(),
        resolver.clone(),
        sink.clone(),
    );

    Harness {
        state,
        lifecycle,
        resolver,
        sink,
        session,
    }
}

async fn wait_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test]
async fn display_assets_puts_the_native_entry_first() {
    let h = harness(0);

    let assets = h.session.display_assets().unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].kind, AssetKind::Native);
    assert_eq!(assets[0].symbol, "ETH");
    assert_eq!(assets[0].balance, "2");
    assert_eq!(assets[0].balance_fiat.as_deref(), Some("3600.00 USD"));
    assert_eq!(assets[1].kind, AssetKind::Token);
    assert_eq!(assets[1].symbol, "DAI");
    assert_eq!(assets[1].balance, "100");
    assert_eq!(assets[1].balance_fiat.as_deref(), Some("100.00 USD"));
}

#[tokio::test]
async fn display_assets_tracks_account_resolution() {
    let h = harness(0);

    h.state.set_selected_address(None);
    let assets = h.session.display_assets().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].kind, AssetKind::Token);

    h.state.set_selected_address(Some("0xabc".to_string()));
    let assets = h.session.display_assets().unwrap();
    assert_eq!(assets.len(), 2);
    assert!(assets[0].is_native());
}

#[tokio::test]
async fn backgrounding_locks_after_the_configured_timeout() {
    let h = harness(50);
    h.session.start();

    h.lifecycle.background();
    wait_ms(250).await;

    assert_eq!(h.sink.count(), 1);
    assert_eq!(h.session.lock().state(), LockState::Locked);
    h.session.stop();
}

#[tokio::test]
async fn foregrounding_in_time_prevents_the_lock() {
    let h = harness(300);
    h.session.start();

    h.lifecycle.background();
    wait_ms(50).await;
    h.lifecycle.foreground();
    wait_ms(500).await;

    assert_eq!(h.sink.count(), 0);
    assert_eq!(h.session.lock().state(), LockState::Unlocked);
    h.session.stop();
}

#[tokio::test]
async fn deep_link_payload_reaches_the_resolver_once() {
    let h = harness(0);

    let route = h
        .session
        .handle_deep_link(LinkPayload::non_canonical_link("wallet://send?to=0x1"))
        .await;

    assert_eq!(route, RouteResult::Dispatched);
    assert_eq!(h.resolver.calls(), vec!["wallet://send?to=0x1".to_string()]);
}

#[tokio::test]
async fn failed_delivery_and_attribution_events_do_not_route() {
    let h = harness(0);

    let failed = h
        .session
        .handle_deep_link(LinkPayload::failure("session timeout"))
        .await;
    let attribution = h.session.handle_deep_link(LinkPayload::default()).await;

    assert_eq!(failed, RouteResult::NoRoute);
    assert_eq!(attribution, RouteResult::NoRoute);
    assert!(h.resolver.calls().is_empty());
}

#[tokio::test]
async fn refresh_lock_timeout_applies_the_snapshot_value() {
    let h = harness(0);
    h.session.start();

    // auto-lock disabled: backgrounding never locks
    h.lifecycle.background();
    wait_ms(150).await;
    assert_eq!(h.sink.count(), 0);
    h.lifecycle.foreground();
    wait_ms(50).await;

    // enable a short timeout through the state source
    h.state.set_lock_timeout_ms(50);
    h.session.refresh_lock_timeout();
    h.lifecycle.background();
    wait_ms(250).await;

    assert_eq!(h.sink.count(), 1);
    h.session.stop();
}

#[tokio::test]
async fn stop_releases_the_lifecycle_subscription() {
    let h = harness(50);
    h.session.start();
    h.session.stop();

    h.lifecycle.background();
    wait_ms(250).await;
    assert_eq!(h.sink.count(), 0);

    // by now the aborted task has dropped its receiver; the next emit prunes it
    h.lifecycle.foreground();
    assert_eq!(h.lifecycle.subscriber_count(), 0);
}

#[tokio::test]
async fn lock_fire_and_link_dispatch_are_independent() {
    let h = harness(50);
    h.session.start();

    h.lifecycle.background();
    let route = h
        .session
        .handle_deep_link(LinkPayload::non_canonical_link("wallet://browse"))
        .await;
    wait_ms(250).await;

    // neither cancels the other, in either ordering
    assert_eq!(route, RouteResult::Dispatched);
    assert_eq!(h.resolver.calls().len(), 1);
    assert_eq!(h.sink.count(), 1);
    h.session.stop();
}

#[tokio::test]
async fn asset_selection_toggles_the_modal_state() {
    let h = harness(0);
    let assets = h.session.display_assets().unwrap();

    assert!(h.session.selected_asset().is_none());
    h.session.on_asset_selected(assets[1].clone());
    assert_eq!(
        h.session.selected_asset().map(|a| a.symbol),
        Some("DAI".to_string())
    );
    h.session.on_asset_dismissed();
    assert!(h.session.selected_asset().is_none());
}
