use {
    chrono::Local,
    eframe::{
        Frame, Storage,
        egui::{Context, Key},
    },
    serde::{Deserialize, Serialize},
    std::mem,
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, DashboardState, PhaseView, RunningState},
    config::{CLOCK, DF},
    data::PublicApiProvider,
    domain::Currency,
    engine::{FetchCommand, FetchHandle, spawn_fetch_worker},
    ui::{Theme, render_bootstrap},
    utils::{AppInstant, now_utc},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Preferences, persisted across sessions.
    pub(crate) currency: Currency,
    pub(crate) theme: Theme,
    pub(crate) show_chart: bool,
    #[serde(skip)]
    pub(crate) dashboard: DashboardState,
    #[serde(skip)]
    pub(crate) history_days: u32,
    #[serde(skip)]
    fetcher: Option<FetchHandle>,
    #[serde(skip)]
    last_clock_tick: Option<AppInstant>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            theme: Theme::default(),
            show_chart: true,
            dashboard: DashboardState::default(),
            history_days: CLOCK.history_days,
            fetcher: None,
            last_clock_tick: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };
        if DF.log_preferences {
            log::info!(
                "Restored preferences: currency {}, theme {}, chart {}",
                app.currency,
                app.theme,
                app.show_chart
            );
        }

        if let Some(currency) = args.currency {
            app.currency = currency;
        }
        app.history_days = args.history_days;
        app.dashboard = DashboardState::new(app.currency);
        app.state = AppState::Bootstrapping(BootstrapState::default());
        app.tick_local_clock();

        match PublicApiProvider::new(args.api_settings()) {
            Ok(provider) => {
                app.fetcher = Some(spawn_fetch_worker(provider, args.poll_settings(app.currency)));
            }
            Err(e) => {
                log::error!("{:#}. Running without live data.", e);
                app.state = AppState::Running(RunningState);
            }
        }

        app
    }

    fn send_command(&self, command: FetchCommand) {
        if let Some(fetcher) = &self.fetcher {
            fetcher.send(command);
        }
    }

    pub(crate) fn select_currency(&mut self, currency: Currency) {
        if self.dashboard.set_currency(currency) {
            self.currency = currency;
            self.send_command(FetchCommand::SetCurrency(currency));
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub(crate) fn toggle_chart(&mut self) {
        self.show_chart = !self.show_chart;
    }

    pub(crate) fn refresh_now(&self) {
        self.send_command(FetchCommand::RefreshNow);
    }

    fn drain_fetch_events(&mut self) {
        let Some(fetcher) = &self.fetcher else {
            return;
        };
        let events = fetcher.drain();
        if events.is_empty() {
            return;
        }
        let now = now_utc();
        for event in events {
            self.dashboard.apply(event, now);
        }
    }

    /// The one-second local time timer, driven from the frame loop.
    fn tick_local_clock(&mut self) {
        let due = self
            .last_clock_tick
            .is_none_or(|last| last.elapsed() >= CLOCK.clock_tick);
        if due {
            self.dashboard.refresh_local_time(Local::now());
            self.last_clock_tick = Some(AppInstant::now());
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user typing intext box, don't trigger global hotkeys.
            return;
        }

        let mut picked = None;
        ctx.input(|i| {
            if i.key_pressed(Key::T) {
                self.toggle_theme();
            }
            if i.key_pressed(Key::C) {
                self.toggle_chart();
            }
            if i.key_pressed(Key::R) {
                self.refresh_now();
            }
            for (idx, key) in [Key::Num1, Key::Num2, Key::Num3].into_iter().enumerate() {
                if i.key_pressed(key) {
                    picked = Currency::iter().nth(idx);
                }
            }
        });
        if let Some(currency) = picked {
            self.select_currency(currency);
        }
    }

    pub(crate) fn render_bootstrap_screen(&self, ctx: &Context, state: &BootstrapState) {
        render_bootstrap(ctx, state, self.theme.colors());
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.render_header_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let start = AppInstant::now();
        ctx.set_visuals(self.theme.colors().visuals(self.theme));

        self.drain_fetch_events();
        self.tick_local_clock();
        self.handle_global_shortcuts(ctx);

        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };

        // Keeps the clock ticking and picks up worker events without user input.
        ctx.request_repaint_after(CLOCK.clock_tick);

        let frame_time = start.elapsed().as_micros();
        if DF.log_performance && frame_time > DF.slow_frame_micros {
            log::warn!("🐢 SLOW FRAME: {}us", frame_time);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_preferences {
            log::info!(
                "💾 SAVE [App]: currency {}, theme {}, chart {}",
                self.currency,
                self.theme,
                self.show_chart
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip_through_storage_format() {
        let app = App {
            currency: Currency::Gbp,
            theme: Theme::Light,
            show_chart: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&app).unwrap();
        let restored: App = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.currency, Currency::Gbp);
        assert_eq!(restored.theme, Theme::Light);
        assert!(!restored.show_chart);
        assert_eq!(restored.history_days, CLOCK.history_days);
    }

    #[test]
    fn missing_preferences_fall_back_to_defaults() {
        let restored: App = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.currency, Currency::Usd);
        assert_eq!(restored.theme, Theme::Dark);
        assert!(restored.show_chart);
    }

    #[test]
    fn currency_switch_without_worker_updates_state() {
        let mut app = App::default();
        app.select_currency(Currency::Eur);
        assert_eq!(app.currency, Currency::Eur);
        assert_eq!(app.dashboard.currency, Currency::Eur);
    }
}
