//! citycast - city weather TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use citycast::action::{Action, SearchReply};
use citycast::api::OpenWeatherClient;
use citycast::components::{
    CityPanel, CityPanelProps, Component, ErrorBanner, ErrorBannerProps, SearchBar,
    SearchBarProps, WeatherDisplay, WeatherDisplayProps, panel_area,
};
use citycast::config::{self, WeatherConfig};
use citycast::effect::Effect;
use citycast::i18n;
use citycast::logging;
use citycast::reducer::reducer;
use citycast::state::AppState;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// City weather from OpenWeatherMap in the terminal
#[derive(Parser, Debug)]
#[command(name = "citycast")]
#[command(about = "Current weather for a list of cities, plus on-demand city search")]
struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// API base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Default city (repeatable); replaces the built-in list
    #[arg(long = "city", short = 'c')]
    cities: Vec<String>,

    /// Write logs to this file (RUST_LOG filters)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Display,
    Search,
    Panel,
    Banner,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Search,
    Panel,
    Banner,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        if self.banner_open() {
            Some(WeatherComponentId::Banner)
        } else if self.panel_open {
            Some(WeatherComponentId::Panel)
        } else if self.input_focused {
            Some(WeatherComponentId::Search)
        } else {
            Some(WeatherComponentId::Display)
        }
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        if self.banner_open() {
            Some(WeatherComponentId::Banner)
        } else if self.panel_open {
            Some(WeatherComponentId::Panel)
        } else {
            None
        }
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Display => WeatherContext::Main,
            WeatherComponentId::Search => WeatherContext::Search,
            WeatherComponentId::Panel => WeatherContext::Panel,
            WeatherComponentId::Banner => WeatherContext::Banner,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        base_url,
        cities,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }

    if api_key.is_empty() {
        tracing::warn!("no API key configured; requests will fail authentication");
    }
    let client = OpenWeatherClient::new(WeatherConfig::new(api_key).with_base_url(base_url));

    let cities = if cities.is_empty() {
        config::default_cities()
    } else {
        cities
    };

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(cities)) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("starting");
    let result = run_app(&mut terminal, &debug, store, client, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct WeatherUi {
    display: WeatherDisplay,
    search: SearchBar,
    panel: CityPanel,
    banner: ErrorBanner,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchBar::new(),
            panel: CityPanel::new(),
            banner: ErrorBanner::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Min(1),    // Reports
        ])
        .split(area);

        render_title(frame, chunks[0]);

        event_ctx.set_component_area(WeatherComponentId::Search, chunks[1]);
        self.search.render(
            frame,
            chunks[1],
            SearchBarProps {
                value: &state.search_input,
                is_focused: render_ctx.is_focused() && state.input_focused,
                on_change: Action::SearchInputChange,
                on_submit: Action::SearchSubmit,
            },
        );

        event_ctx.set_component_area(WeatherComponentId::Display, chunks[2]);
        self.display.render(
            frame,
            chunks[2],
            WeatherDisplayProps {
                state,
                is_focused: render_ctx.is_focused() && state.focused() == Some(WeatherComponentId::Display),
            },
        );

        self.panel.set_open(state.panel_open);
        if state.panel_open {
            event_ctx.set_component_area(WeatherComponentId::Panel, panel_area(area));
            self.panel.render(
                frame,
                area,
                CityPanelProps {
                    cities: &state.cities,
                    selected: state.panel_selected,
                    is_focused: render_ctx.is_focused(),
                    on_select: Action::PanelHighlight,
                },
            );
        } else {
            event_ctx.component_areas.remove(&WeatherComponentId::Panel);
        }

        if let Some(message) = state.search.error() {
            event_ctx.set_component_area(WeatherComponentId::Banner, centered_rect(50, 7, area));
            self.banner.render(
                frame,
                area,
                ErrorBannerProps {
                    message,
                    is_focused: render_ctx.is_focused(),
                },
            );
        } else {
            event_ctx.component_areas.remove(&WeatherComponentId::Banner);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        respond(actions)
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = SearchBarProps {
            value: &state.search_input,
            is_focused: true,
            on_change: Action::SearchInputChange,
            on_submit: Action::SearchSubmit,
        };
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }

    fn handle_panel_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.panel.set_open(state.panel_open);
        let props = CityPanelProps {
            cities: &state.cities,
            selected: state.panel_selected,
            is_focused: true,
            on_select: Action::PanelHighlight,
        };
        let actions: Vec<_> = self.panel.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }

    fn handle_banner_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = ErrorBannerProps {
            message: state.search.error().unwrap_or(i18n::NOT_FOUND),
            is_focused: true,
        };
        let actions: Vec<_> = self.banner.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn respond(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(
        format!("\u{1f383} {}", i18n::TITLE),
        Style::default()
            .fg(Color::Rgb(255, 140, 0))
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title), area);
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: OpenWeatherClient,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(WeatherComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(WeatherComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    let ui_panel = Rc::clone(&ui);
    bus.register(WeatherComponentId::Panel, move |event, state| {
        ui_panel.borrow_mut().handle_panel_event(&event.kind, state)
    });

    let ui_banner = Rc::clone(&ui);
    bus.register(WeatherComponentId::Banner, move |event, state| {
        ui_banner
            .borrow_mut()
            .handle_banner_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::DefaultsFetch),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(client: &OpenWeatherClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchDefaults { cities } => {
            let client = client.clone();
            ctx.tasks().spawn(TaskKey::new("defaults"), async move {
                Action::DefaultsDidLoad(client.fetch_many(&cities).await)
            });
        }
        Effect::FetchCity { seq, city } => {
            // One key for all searches: a new search cancels the one in flight.
            let client = client.clone();
            ctx.tasks().spawn(TaskKey::new("city_search"), async move {
                let report = client.fetch_report(&city).await;
                Action::SearchDidComplete(SearchReply { seq, report })
            });
        }
    }
}
