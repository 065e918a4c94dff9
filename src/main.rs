use std::sync::Arc;

use tracing::info;
use tracing::level_filters::LevelFilter;

use wallet_session::{
    Account, ConsoleLockSink, LifecycleChannel, LinkPayload, LoggingResolver, MemoryStateSource,
    SessionConfig, Token, WalletSession,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::DEBUG)
        .with_file(true)
        .with_line_number(true)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = SessionConfig::from_env()?;

        info!("Initializing wallet session...");
        info!("Wallet Address: {}", config.wallet_address);
        info!("Lock timeout: {}ms", config.lock_timeout_ms);

        let state = Arc::new(MemoryStateSource::new());
        state.put_account(Account::new(
            config.wallet_address.clone(),
            config.account_balance.clone(),
        ));
        state.set_tokens(vec![Token::new(
            "0x6b175474e89094c44da98b954eedeac495271d0f",
            "DAI",
            "100",
        )
        .with_name("Dai Stablecoin")
        .with_fiat("100.00 USD")
        .with_exchange_rate(1.0)]);
        state.set_conversion_rate(config.conversion_rate);
        state.set_currency(config.currency.clone());
        state.set_lock_timeout_ms(config.lock_timeout_ms);

        let lifecycle = Arc::new(LifecycleChannel::new());
        let session = WalletSession::new(
            state.clone(),
            lifecycle.clone(),
            Arc::new(LoggingResolver::new()),
            Arc::new(ConsoleLockSink::new()),
        );
        session.start();

        for asset in session.display_assets()? {
            info!(
                "{} ({}): {} [{}]",
                asset.name,
                asset.symbol,
                asset.balance,
                asset.balance_fiat.as_deref().unwrap_or("no fiat value")
            );
        }

        // Simulate an inbound deep link and a background transition
        let route = session
            .handle_deep_link(LinkPayload::non_canonical_link("wallet://send"))
            .await;
        info!("Deep link routed: {:?}", route);
        lifecycle.background();

        info!("Wallet session is running. Press Ctrl+C to stop.");

        tokio::signal::ctrl_c().await?;

        session.stop();
        info!("Shutting down...");

        Ok(())
    })
}
