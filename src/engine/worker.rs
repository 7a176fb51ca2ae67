use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinSet;
use tokio::time::{MissedTickBehavior, interval};

use super::messages::{FetchCommand, FetchEvent, FetchSource, PollSettings};

use crate::config::DF;
use crate::data::MarketDataProvider;
use crate::domain::Currency;

/// UI-side ends of the worker channels. Dropping it stops the worker.
pub struct FetchHandle {
    commands: UnboundedSender<FetchCommand>,
    events: Receiver<FetchEvent>,
}

impl FetchHandle {
    pub fn send(&self, command: FetchCommand) {
        if DF.log_commands {
            log::info!("Fetch command: {:?}", command);
        }
        if self.commands.send(command).is_err() {
            log::warn!("Fetch worker is gone, dropped command {:?}", command);
        }
    }

    /// Everything the worker has produced since the last call, without blocking.
    pub fn drain(&self) -> Vec<FetchEvent> {
        self.events.try_iter().collect()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        let _ = self.commands.send(FetchCommand::Shutdown);
    }
}

/// Spawns a dedicated thread with its own runtime that polls `provider`.
pub fn spawn_fetch_worker<P>(provider: P, settings: PollSettings) -> FetchHandle
where
    P: MarketDataProvider + 'static,
{
    let (cmd_tx, cmd_rx) = unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel();

    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create fetch worker runtime: {}", e);
                return;
            }
        };
        rt.block_on(run_fetch_loop(Arc::new(provider), settings, cmd_rx, event_tx));
        // Dropping the runtime also drops any request still in flight.
        drop(rt);
        log::info!("Fetch worker stopped");
    });

    FetchHandle {
        commands: cmd_tx,
        events: event_rx,
    }
}

/// Schedules fetches: history once up front, live data on every timer tick (the first
/// tick fires immediately). Each fetch runs as its own task, so a request that never
/// answers holds up neither the timer nor the commands.
/// Returns on `Shutdown`, when the command channel closes, or when nobody listens for events.
pub async fn run_fetch_loop<P: MarketDataProvider + 'static>(
    provider: Arc<P>,
    settings: PollSettings,
    mut commands: UnboundedReceiver<FetchCommand>,
    events: Sender<FetchEvent>,
) {
    let mut currency = settings.currency;
    let mut ticker = interval(settings.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut tasks = JoinSet::new();
    let spawn_live = |tasks: &mut JoinSet<bool>, currency: Currency| {
        let (provider, events) = (provider.clone(), events.clone());
        tasks.spawn(async move { fetch_live(provider.as_ref(), currency, &events).await });
    };
    let spawn_history = |tasks: &mut JoinSet<bool>, currency: Currency| {
        let (provider, events) = (provider.clone(), events.clone());
        let days = settings.history_days;
        tasks.spawn(async move { fetch_history(provider.as_ref(), currency, days, &events).await });
    };

    spawn_history(&mut tasks, currency);

    loop {
        let keep_going = tokio::select! {
            _ = ticker.tick() => {
                spawn_live(&mut tasks, currency);
                true
            }
            command = commands.recv() => match command {
                Some(FetchCommand::SetCurrency(next)) => {
                    currency = next;
                    ticker.reset();
                    spawn_live(&mut tasks, currency);
                    spawn_history(&mut tasks, currency);
                    true
                }
                Some(FetchCommand::RefreshNow) => {
                    spawn_live(&mut tasks, currency);
                    true
                }
                Some(FetchCommand::Shutdown) | None => false,
            },
            Some(joined) = tasks.join_next() => match joined {
                Ok(delivered) => delivered,
                Err(e) => {
                    log::warn!("Fetch task ended abnormally: {}", e);
                    true
                }
            },
        };
        if !keep_going {
            break;
        }
    }
    tasks.abort_all();
}

fn failure(source: FetchSource, err: anyhow::Error) -> FetchEvent {
    log::warn!("Error fetching {}: {:#}", source, err);
    FetchEvent::FetchFailed {
        source,
        message: format!("{:#}", err),
    }
}

/// Block height and spot price, concurrently. False once the event receiver is gone.
async fn fetch_live<P: MarketDataProvider>(
    provider: &P,
    currency: Currency,
    events: &Sender<FetchEvent>,
) -> bool {
    let (height, price) = futures::join!(
        provider.fetch_block_height(),
        provider.fetch_spot_price(currency)
    );

    let height_event = match height {
        Ok(h) => {
            if DF.log_fetch_cycle {
                log::info!("Block height {} / {} price {:?}", h, currency, price.as_ref().ok().map(|p| p.price));
            }
            FetchEvent::BlockHeight(h)
        }
        Err(e) => failure(FetchSource::BlockHeight, e),
    };
    let price_event = match price {
        Ok(p) => FetchEvent::SpotPrice(p),
        Err(e) => failure(FetchSource::SpotPrice, e),
    };

    [height_event, price_event, FetchEvent::CycleComplete]
        .into_iter()
        .all(|event| events.send(event).is_ok())
}

async fn fetch_history<P: MarketDataProvider>(
    provider: &P,
    currency: Currency,
    days: u32,
    events: &Sender<FetchEvent>,
) -> bool {
    let event = match provider.fetch_price_history(currency, days).await {
        Ok(series) => {
            if DF.log_fetch_cycle {
                log::info!("{} day {} history: {} points", days, currency, series.points.len());
            }
            FetchEvent::PriceHistory(series)
        }
        Err(e) => failure(FetchSource::PriceHistory, e),
    };
    events.send(event).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::sync::mpsc::RecvTimeoutError;
    use std::time::{Duration, Instant};

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use crate::domain::{BlockHeight, PricePoint, PriceSeries, SpotPrice};

    const WAIT: Duration = Duration::from_secs(5);

    #[derive(Default)]
    struct Counters {
        height_calls: AtomicUsize,
        history_calls: AtomicUsize,
    }

    struct FakeProvider {
        next_height: AtomicU64,
        fail_height: bool,
        hang_history: bool,
        /// 1-based `fetch_block_height` call that never answers.
        hang_height_call: Option<usize>,
        on_drop: Option<Sender<()>>,
        counters: Arc<Counters>,
    }

    impl FakeProvider {
        fn new(start_height: u64) -> (Self, Arc<Counters>) {
            let counters = Arc::new(Counters::default());
            let provider = Self {
                next_height: AtomicU64::new(start_height),
                fail_height: false,
                hang_history: false,
                hang_height_call: None,
                on_drop: None,
                counters: counters.clone(),
            };
            (provider, counters)
        }

        fn failing_height() -> Self {
            let (mut provider, _) = Self::new(0);
            provider.fail_height = true;
            provider
        }
    }

    impl Drop for FakeProvider {
        fn drop(&mut self) {
            if let Some(tx) = self.on_drop.take() {
                let _ = tx.send(());
            }
        }
    }

    fn price_for(currency: Currency) -> f64 {
        match currency {
            Currency::Usd => 60_000.0,
            Currency::Eur => 55_000.0,
            Currency::Gbp => 47_000.0,
        }
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn fetch_block_height(&self) -> Result<BlockHeight> {
            let call = self.counters.height_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.hang_height_call == Some(call) {
                futures::future::pending::<()>().await;
            }
            if self.fail_height {
                bail!("connection refused");
            }
            Ok(BlockHeight(self.next_height.fetch_add(1, Ordering::SeqCst)))
        }

        async fn fetch_spot_price(&self, currency: Currency) -> Result<SpotPrice> {
            Ok(SpotPrice { currency, price: price_for(currency) })
        }

        async fn fetch_price_history(&self, currency: Currency, days: u32) -> Result<PriceSeries> {
            self.counters.history_calls.fetch_add(1, Ordering::SeqCst);
            if self.hang_history {
                futures::future::pending::<()>().await;
            }
            let points = (0..days as i64)
                .map(|d| PricePoint { timestamp_ms: d * 86_400_000, price: price_for(currency) })
                .collect();
            Ok(PriceSeries::new(currency, points))
        }
    }

    fn settings(refresh_interval: Duration) -> PollSettings {
        PollSettings {
            currency: Currency::Usd,
            refresh_interval,
            history_days: 3,
        }
    }

    /// Collects events until `done` accepts everything seen so far.
    fn collect_until(handle: &FetchHandle, done: impl Fn(&[FetchEvent]) -> bool) -> Vec<FetchEvent> {
        let deadline = Instant::now() + WAIT;
        let mut seen = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let event = handle
                .events
                .recv_timeout(remaining)
                .unwrap_or_else(|e| panic!("no matching event before timeout ({:?}), got {:?}", e, seen));
            seen.push(event);
            if done(&seen) {
                return seen;
            }
        }
    }

    fn count_cycles(events: &[FetchEvent]) -> usize {
        events.iter().filter(|e| matches!(e, FetchEvent::CycleComplete)).count()
    }

    fn cycle_done(seen: &[FetchEvent]) -> bool {
        matches!(seen.last(), Some(FetchEvent::CycleComplete))
    }

    fn has_history(seen: &[FetchEvent], currency: Currency) -> bool {
        seen.iter().any(|e| matches!(e, FetchEvent::PriceHistory(s) if s.currency == currency))
    }

    fn has_spot(seen: &[FetchEvent], currency: Currency) -> bool {
        seen.iter().any(|e| matches!(e, FetchEvent::SpotPrice(p) if p.currency == currency))
    }

    fn wait_for_disconnect(handle: &FetchHandle) {
        let deadline = Instant::now() + WAIT;
        loop {
            match handle.events.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => panic!("worker did not stop"),
            }
        }
    }

    #[test]
    fn first_cycle_delivers_history_height_and_price() {
        let (provider, _) = FakeProvider::new(840_000);
        let handle = spawn_fetch_worker(provider, settings(Duration::from_secs(3600)));

        let events = collect_until(&handle, |seen| {
            count_cycles(seen) == 1 && has_history(seen, Currency::Usd)
        });

        assert!(events.iter().any(|e| matches!(e, FetchEvent::PriceHistory(s) if s.points.len() == 3)));
        assert!(events.contains(&FetchEvent::BlockHeight(BlockHeight(840_000))));
        assert!(events.contains(&FetchEvent::SpotPrice(SpotPrice {
            currency: Currency::Usd,
            price: 60_000.0
        })));
    }

    #[test]
    fn failures_are_reported_and_do_not_stop_the_cycle() {
        let handle = spawn_fetch_worker(FakeProvider::failing_height(), settings(Duration::from_secs(3600)));

        let events = collect_until(&handle, cycle_done);

        assert!(events.iter().any(|e| matches!(
            e,
            FetchEvent::FetchFailed { source: FetchSource::BlockHeight, message } if message.contains("connection refused")
        )));
        assert!(has_spot(&events, Currency::Usd));
        assert!(!events.iter().any(|e| matches!(e, FetchEvent::BlockHeight(_))));

        // the worker is still alive
        handle.send(FetchCommand::RefreshNow);
        let again = collect_until(&handle, cycle_done);
        assert_eq!(count_cycles(&again), 1);
    }

    #[test]
    fn timer_refetches_live_data_but_not_history() {
        let (provider, counters) = FakeProvider::new(1);
        let handle = spawn_fetch_worker(provider, settings(Duration::from_millis(20)));

        let events = collect_until(&handle, |seen| count_cycles(seen) >= 3);

        let mut heights: Vec<u64> = events
            .iter()
            .filter_map(|e| match e {
                FetchEvent::BlockHeight(h) => Some(h.0),
                _ => None,
            })
            .collect();
        heights.sort_unstable();
        heights.dedup();
        assert!(heights.len() >= 3, "heights {:?}", heights);
        assert!(counters.height_calls.load(Ordering::SeqCst) >= 3);
        assert_eq!(counters.history_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pending_history_does_not_hold_back_live_data() {
        let (mut provider, _) = FakeProvider::new(850_000);
        provider.hang_history = true;
        let handle = spawn_fetch_worker(provider, settings(Duration::from_millis(20)));

        let events = collect_until(&handle, |seen| count_cycles(seen) >= 3);

        assert!(events.contains(&FetchEvent::BlockHeight(BlockHeight(850_000))));
        assert!(!events.iter().any(|e| matches!(e, FetchEvent::PriceHistory(_))));

        // the stuck request is dropped with the worker
        handle.send(FetchCommand::Shutdown);
        wait_for_disconnect(&handle);
    }

    #[test]
    fn stuck_live_request_does_not_stop_the_timer() {
        let (mut provider, counters) = FakeProvider::new(1);
        provider.hang_height_call = Some(2);
        let handle = spawn_fetch_worker(provider, settings(Duration::from_millis(20)));

        let events = collect_until(&handle, |seen| count_cycles(seen) >= 3);

        assert!(count_cycles(&events) >= 3);
        assert!(counters.height_calls.load(Ordering::SeqCst) >= 4);
    }

    #[test]
    fn currency_switch_refetches_price_and_history() {
        let (provider, counters) = FakeProvider::new(700_000);
        let handle = spawn_fetch_worker(provider, settings(Duration::from_secs(3600)));
        collect_until(&handle, |seen| count_cycles(seen) == 1 && has_history(seen, Currency::Usd));

        handle.send(FetchCommand::SetCurrency(Currency::Gbp));
        let events = collect_until(&handle, |seen| {
            has_spot(seen, Currency::Gbp) && has_history(seen, Currency::Gbp)
        });

        assert!(events.contains(&FetchEvent::SpotPrice(SpotPrice {
            currency: Currency::Gbp,
            price: 47_000.0
        })));
        assert!(!has_spot(&events, Currency::Usd));
        assert_eq!(counters.history_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn shutdown_closes_the_event_channel() {
        let (provider, _) = FakeProvider::new(0);
        let handle = spawn_fetch_worker(provider, settings(Duration::from_secs(3600)));
        collect_until(&handle, cycle_done);

        handle.send(FetchCommand::Shutdown);
        wait_for_disconnect(&handle);
    }

    #[test]
    fn dropping_the_handle_stops_the_worker() {
        let (dropped_tx, dropped_rx) = mpsc::channel();
        let (mut provider, _) = FakeProvider::new(0);
        provider.on_drop = Some(dropped_tx);
        let handle = spawn_fetch_worker(provider, settings(Duration::from_secs(3600)));
        collect_until(&handle, cycle_done);

        drop(handle);

        // the provider only goes away once the loop and all its tasks are gone
        assert_eq!(dropped_rx.recv_timeout(WAIT), Ok(()));
    }
}
