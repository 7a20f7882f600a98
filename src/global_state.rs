use crate::domain::market_data::Symbol;
use leptos::*;
use once_cell::sync::OnceCell;

/// Which page is shown. Navigation is in-memory; there is no URL routing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Overview,
    Detail(Symbol),
}

impl Route {
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Route::Detail(symbol) => Some(symbol),
            Route::Overview => None,
        }
    }
}

pub struct Globals {
    pub route: RwSignal<Route>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { route: create_rw_signal(Route::Overview) })
}

/// Current page. Created lazily inside the first reactive owner that asks.
pub fn route() -> RwSignal<Route> {
    globals().route
}

pub fn navigate_to_detail(symbol: Symbol) {
    route().set(Route::Detail(symbol));
}

pub fn navigate_home() {
    route().set(Route::Overview);
}
