use leptos::*;
use std::rc::Rc;

use crate::{
    application::{DetailViewModel, ForecastState, LoadState, MarketDashboardUseCase, RANKING_FAILED_HINT},
    config::AppConfig,
    domain::{
        chart::{RenderPoint, TimeRange},
        display::{ColorToken, derive_change},
        logging::LogComponent,
        market_data::{IndexSnapshot, RankingRow, Symbol},
    },
    global_state::{Route, navigate_home, navigate_to_detail, route},
    infrastructure::ApiHttpClient,
    log_debug, log_info,
    number_format::{format_index_level, format_price},
    presentation::{
        InFlight,
        svg_chart::{self, VIEW_HEIGHT, VIEW_WIDTH},
    },
};

pub type Dashboard = Rc<MarketDashboardUseCase<ApiHttpClient>>;

fn use_dashboard() -> Dashboard {
    use_context::<Dashboard>().unwrap_or_else(|| {
        let config = AppConfig::default();
        Rc::new(MarketDashboardUseCase::new(ApiHttpClient::new(config.api_base_url.clone()), config))
    })
}

/// Root component: header plus either the overview or the detail page.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    log_info!(
        LogComponent::Presentation("App"),
        "api base: {:?}, ranking limit {}",
        config.api_base_url,
        config.ranking_limit
    );
    let client = ApiHttpClient::new(config.api_base_url.clone());
    provide_context::<Dashboard>(Rc::new(MarketDashboardUseCase::new(client, config)));

    let on_detail = create_memo(move |_| route().with(|r| matches!(r, Route::Detail(_))));

    view! {
        <div class="min-h-screen bg-rh-black text-rh-text font-sans selection:bg-rh-green selection:text-black">
            <Header />
            <main class="max-w-[1600px] mx-auto px-6 py-8">
                <Show
                    when=move || on_detail.get()
                    fallback=|| view! {
                        <MarketBanner />
                        <StockDashboard />
                    }
                >
                    <StockDetail />
                </Show>
            </main>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b border-rh-gray bg-rh-black/95 backdrop-blur-md">
            <div class="flex h-16 items-center justify-between px-6 max-w-[1600px] mx-auto">
                <button class="flex items-center gap-2 cursor-pointer group" on:click=move |_| navigate_home()>
                    <svg class="w-8 h-8 text-rh-green transition-transform group-hover:scale-110" viewBox="0 0 24 24" fill="currentColor">
                        <path d="M12 2L2 7l10 5 10-5-10-5zm0 9l2.5-1.25L12 8.5l-2.5 1.25L12 11zm0 2.5l-5-2.5-5 2.5L12 22l10-8.5-5-2.5-5 2.5z" />
                    </svg>
                    <span class="text-xl font-black tracking-tighter text-rh-text">"TICKER"</span>
                </button>
                <nav class="hidden md:flex items-center gap-8 text-sm font-bold text-rh-text">
                    {["Dow 30", "S&P 500", "NASDAQ", "VIX"]
                        .into_iter()
                        .map(|item| view! { <span class="hover:text-rh-green transition-colors">{item}</span> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

/// Headline indices. Shows nothing until at least one index has loaded.
#[component]
fn MarketBanner() -> impl IntoView {
    let dashboard = use_dashboard();
    let (indices, set_indices) = create_signal(LoadState::<Vec<IndexSnapshot>>::Loading);
    spawn_local(async move {
        set_indices.set(dashboard.load_indices().await);
    });

    move || {
        indices.with(|state| state.loaded().cloned()).map(|rows| {
            view! {
                <div class="mb-8 grid grid-cols-1 md:grid-cols-3 gap-4">
                    {rows.into_iter().map(|index| view! { <IndexCard index=index /> }).collect_view()}
                </div>
            }
        })
    }
}

#[component]
fn IndexCard(index: IndexSnapshot) -> impl IntoView {
    let change = derive_change(index.change_rate);
    let badge = format!(
        "flex items-center gap-1.5 px-2.5 py-1.5 rounded-lg text-sm font-bold {} {}",
        change.color.text_class(),
        change.color.badge_class()
    );

    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-rh-dark border border-rh-gray shadow-lg">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-rh-subtext font-bold text-sm uppercase tracking-wider">{index.display_name()}</h3>
                <span class="text-xs font-mono text-rh-gray px-2 py-0.5 rounded border border-rh-gray/30">
                    {index.symbol.display_code().to_string()}
                </span>
            </div>
            <div class="flex items-end justify-between">
                <span class="text-3xl font-black text-white tracking-tight">{format_index_level(index.close)}</span>
                <div class=badge>
                    <span>{change.arrow}</span>
                    <span>{change.badge_text()}</span>
                </div>
            </div>
        </div>
    }
}

/// Ranking grid: skeleton cards while loading, a notice on failure.
#[component]
fn StockDashboard() -> impl IntoView {
    let dashboard = use_dashboard();
    let skeletons = dashboard.config().skeleton_cards;
    let limit = dashboard.config().ranking_limit;
    let (ranking, set_ranking) = create_signal(LoadState::<Vec<RankingRow>>::Loading);
    spawn_local(async move {
        set_ranking.set(dashboard.load_ranking().await);
    });

    move || match ranking.get() {
        LoadState::Failed(message) => view! {
            <div class="text-center py-20 text-rh-red">
                <h2 class="text-2xl font-bold">{message}</h2>
                <p class="text-rh-subtext">{RANKING_FAILED_HINT}</p>
            </div>
        }
        .into_view(),
        state => {
            let cards = match state {
                LoadState::Loading => (0..skeletons).map(|_| view! { <SkeletonCard /> }).collect_view(),
                LoadState::Loaded(rows) => rows.into_iter().map(|row| view! { <StockCard row=row /> }).collect_view(),
                LoadState::Empty | LoadState::Failed(_) => ().into_view(),
            };
            view! {
                <section>
                    <div class="mb-8 flex items-end justify-between">
                        <div>
                            <h2 class="text-3xl font-bold text-white">"Standard and Poor's 500"</h2>
                            <p class="text-rh-subtext mt-1">{format!("Top {} Companies by Market Cap", limit)}</p>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 xl:grid-cols-5 gap-4">{cards}</div>
                </section>
            }
            .into_view()
        }
    }
}

#[component]
fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="h-40 rounded-xl bg-rh-dark border border-rh-gray animate-pulse p-5">
            <div class="h-6 w-1/3 bg-rh-gray/50 rounded mb-4"></div>
            <div class="h-4 w-2/3 bg-rh-gray/30 rounded mb-8"></div>
            <div class="h-8 w-1/2 bg-rh-gray/50 rounded"></div>
        </div>
    }
}

#[component]
fn StockCard(row: RankingRow) -> impl IntoView {
    let change = derive_change(row.change_rate);
    let badge = format!(
        "flex items-center gap-1 px-2 py-1 rounded-md text-xs font-bold {} {}",
        change.color.text_class(),
        change.color.badge_class()
    );
    let symbol = row.symbol.clone();

    view! {
        <div
            class="group relative flex flex-col justify-between p-5 bg-rh-dark border border-rh-gray rounded-xl transition-all duration-300 hover:-translate-y-1 hover:border-rh-green/50 cursor-pointer"
            on:click=move |_| navigate_to_detail(symbol.clone())
        >
            <div class="mb-4">
                <h3 class="text-xl font-black tracking-tight text-white group-hover:text-rh-green transition-colors">
                    {row.symbol.to_string()}
                </h3>
                <p class="text-xs font-medium text-rh-subtext truncate mt-1" title=row.name.clone()>{row.name.clone()}</p>
            </div>
            <div class="flex items-end justify-between">
                <span class="text-2xl font-bold text-white tracking-tight">{format_price(row.close)}</span>
                <div class=badge>
                    <span class="text-[10px]">{change.arrow}</span>
                    <span>{change.badge_text()}</span>
                </div>
            </div>
        </div>
    }
}

/// Fetches owned by the detail page; each new one aborts its predecessor.
#[derive(Default)]
struct DetailFetches {
    detail: InFlight,
    forecast: InFlight,
}

fn load_detail(
    model: RwSignal<DetailViewModel>,
    dashboard: StoredValue<Dashboard>,
    fetches: StoredValue<DetailFetches>,
    symbol: Symbol,
) {
    let Some(ticket) = model.try_update(|m| m.select_symbol(symbol)) else {
        return;
    };
    log_debug!(LogComponent::Presentation("StockDetail"), "loading {}", ticket.symbol);

    let dashboard = dashboard.get_value();
    let fetch = fetches.try_update_value(|f| {
        f.forecast.cancel();
        f.detail.start(async move {
            let result = dashboard.fetch_detail(&ticket).await;
            (ticket, result)
        })
    });
    if let Some(fetch) = fetch {
        spawn_local(async move {
            if let Ok((ticket, result)) = fetch.await {
                model.update(|m| {
                    m.apply_detail(&ticket, result);
                });
            }
        });
    }
}

fn start_forecast(model: RwSignal<DetailViewModel>, dashboard: StoredValue<Dashboard>, fetches: StoredValue<DetailFetches>) {
    let Some(request) = model.try_update(|m| m.request_forecast()).flatten() else {
        return;
    };

    let dashboard = dashboard.get_value();
    let fetch = fetches.try_update_value(|f| {
        f.forecast.start(async move {
            let result = dashboard.fetch_forecast(&request).await;
            (request, result)
        })
    });
    if let Some(fetch) = fetch {
        spawn_local(async move {
            if let Ok((request, result)) = fetch.await {
                model.update(|m| {
                    m.apply_forecast(&request, result);
                });
            }
        });
    }
}

/// Detail page for the symbol in the current route. Switching symbols keeps
/// the page mounted and reloads it.
#[component]
fn StockDetail() -> impl IntoView {
    let dashboard = store_value(use_dashboard());
    let config = dashboard.with_value(|d| d.config().clone());
    let model = create_rw_signal(DetailViewModel::new(&config));
    let fetches = store_value(DetailFetches::default());
    let symbol = create_memo(move |_| route().with(|r| r.symbol().cloned()));

    create_effect(move |_| {
        if let Some(symbol) = symbol.get() {
            load_detail(model, dashboard, fetches, symbol);
        }
    });
    on_cleanup(move || {
        fetches.update_value(|f| {
            f.detail.cancel();
            f.forecast.cancel();
        });
    });

    let loaded = create_memo(move |_| model.with(|m| m.detail().loaded().is_some()));

    view! {
        <div class="max-w-5xl mx-auto px-6 py-8 text-white">
            <button
                class="text-rh-subtext hover:text-white text-sm font-bold mb-6 flex items-center gap-1 transition-colors cursor-pointer"
                on:click=move |_| navigate_home()
            >
                "← Back"
            </button>
            <Show when=move || loaded.get() fallback=move || view! { <DetailStatus model=model /> }>
                <DetailHeadline model=model />
                <div class="h-px w-full bg-rh-gray my-6"></div>
                <StockChart
                    points=Signal::derive(move || model.with(|m| m.render_points()))
                    color=Signal::derive(move || model.with(|m| m.chart_color()))
                />
                <div class="flex flex-col md:flex-row justify-between items-center mt-6 border-b border-rh-gray pb-4 gap-4">
                    <RangeSelector model=model fetches=fetches />
                    <ForecastButton model=model dashboard=dashboard fetches=fetches />
                </div>
                {move || {
                    model
                        .with(|m| m.forecast_error().map(str::to_string))
                        .map(|message| view! { <p class="text-rh-red text-sm mt-3">{message}</p> })
                }}
                <KeyStatisticsGrid model=model />
            </Show>
        </div>
    }
}

#[component]
fn DetailStatus(model: RwSignal<DetailViewModel>) -> impl IntoView {
    move || {
        model.with(|m| match m.detail() {
            LoadState::Failed(message) => {
                view! { <div class="text-rh-red text-center py-20">{message.clone()}</div> }.into_view()
            }
            LoadState::Empty => view! { <div class="text-white text-center py-20">"No Data"</div> }.into_view(),
            _ => view! { <div class="text-white text-center py-20 animate-pulse">"Loading..."</div> }.into_view(),
        })
    }
}

#[component]
fn DetailHeadline(model: RwSignal<DetailViewModel>) -> impl IntoView {
    move || {
        model.with(|m| {
            let detail = m.detail().loaded()?;
            let headline = m.headline()?;
            let info = &detail.info;
            let sector = info.sector.clone().unwrap_or_else(|| "N/A".to_string());
            let industry = info.industry.clone().unwrap_or_else(|| "N/A".to_string());
            let change_class = format!("text-xl font-bold mt-1 {}", headline.change.color.text_class());
            Some(view! {
                <div class="flex justify-between items-start mb-6">
                    <div>
                        <h1 class="text-4xl font-black tracking-tight">{info.symbol.to_string()}</h1>
                        <p class="text-lg font-bold mt-1">{info.name.clone()}</p>
                        <div class="flex gap-2 mt-3">
                            <span class="px-2 py-1 bg-rh-gray/30 rounded text-xs font-medium text-rh-subtext border border-rh-gray">
                                {sector}
                            </span>
                            <span class="px-2 py-1 bg-rh-gray/30 rounded text-xs font-medium text-rh-subtext border border-rh-gray">
                                {industry}
                            </span>
                        </div>
                    </div>
                    <div class="text-right">
                        <div class="text-4xl font-bold">{format_price(headline.close)}</div>
                        <div class=change_class>{headline.change.signed_text()}</div>
                    </div>
                </div>
            })
        })
    }
}

#[component]
fn RangeSelector(model: RwSignal<DetailViewModel>, fetches: StoredValue<DetailFetches>) -> impl IntoView {
    TimeRange::all()
        .map(|range| {
            let class = move || {
                if model.with(|m| m.range()) == range {
                    "px-4 py-2 text-sm font-bold rounded-lg transition-all cursor-pointer text-rh-green bg-rh-green/10"
                } else {
                    "px-4 py-2 text-sm font-bold rounded-lg transition-all cursor-pointer text-rh-subtext hover:text-white hover:bg-rh-gray/30"
                }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        let changed = model.try_update(|m| m.select_range(range)).unwrap_or(false);
                        if changed {
                            fetches.update_value(|f| f.forecast.cancel());
                        }
                    }
                >
                    {range.label().to_string()}
                </button>
            }
        })
        .collect_view()
}

#[component]
fn ForecastButton(
    model: RwSignal<DetailViewModel>,
    dashboard: StoredValue<Dashboard>,
    fetches: StoredValue<DetailFetches>,
) -> impl IntoView {
    let state = create_memo(move |_| model.with(|m| m.forecast().clone()));
    let busy = move || matches!(state.get(), ForecastState::Requesting(_) | ForecastState::Ready(_));
    let label = move || match state.get() {
        ForecastState::Requesting(_) => "Analyzing...",
        ForecastState::Ready(_) => "✅ Forecast Ready",
        ForecastState::Idle | ForecastState::Failed(_) => "Run AI Forecast",
    };
    let class = move || match state.get() {
        ForecastState::Ready(_) => "flex items-center gap-2 px-6 py-2.5 rounded-full font-bold bg-rh-gray/20 text-rh-subtext cursor-default",
        _ => "flex items-center gap-2 px-6 py-2.5 rounded-full font-bold bg-rh-green text-black hover:opacity-90 cursor-pointer",
    };

    view! {
        <button class=class disabled=busy on:click=move |_| start_forecast(model, dashboard, fetches)>
            {label}
        </button>
    }
}

/// SVG line chart: close line, dashed forecast line, confidence band and a
/// marker where the forecast starts.
#[component]
fn StockChart(points: Signal<Vec<RenderPoint>>, color: Signal<ColorToken>) -> impl IntoView {
    let geometry = create_memo(move |_| points.with(|p| svg_chart::layout(p)));

    view! {
        <div class="h-100 w-full mt-4">
            {move || {
                geometry
                    .get()
                    .map(|g| {
                        let stroke = color.get().hex();
                        view! {
                            <svg
                                class="w-full h-full"
                                viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                                preserveAspectRatio="none"
                            >
                                <polygon points=g.band fill=stroke fill-opacity="0.05" />
                                <polyline points=g.close_line fill="none" stroke=stroke stroke-width="2" />
                                <polyline
                                    points=g.forecast_line
                                    fill="none"
                                    stroke=stroke
                                    stroke-width="2"
                                    stroke-dasharray="5 5"
                                />
                                {g.forecast_x.map(|x| view! {
                                    <line x1=x x2=x y1=0.0 y2=VIEW_HEIGHT stroke="#555" stroke-dasharray="3 3" />
                                    <text x=x y=12.0 fill="#888" font-size="12" text-anchor="middle">"AI Forecast"</text>
                                })}
                            </svg>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn KeyStatisticsGrid(model: RwSignal<DetailViewModel>) -> impl IntoView {
    view! {
        <div class="mt-8">
            <h3 class="text-xl font-bold mb-6">"Key Statistics"</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-y-8 gap-x-4">
                {move || {
                    model.with(|m| m.key_statistics()).map(|stats| {
                        stats
                            .items()
                            .into_iter()
                            .map(|item| view! { <StatItem label=item.label value=item.value /> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn StatItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-rh-subtext text-xs font-bold uppercase tracking-wider mb-1">{label}</div>
            <div class="text-white text-lg font-medium">{value}</div>
        </div>
    }
}
