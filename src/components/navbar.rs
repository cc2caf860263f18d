use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::app::Route;

/// Entries in display order.
pub fn links() -> [(Route, &'static str); 3] {
    [
        (Route::Inventories, "Inventories"),
        (Route::Books, "Books"),
        (Route::Branches, "Branches"),
    ]
}

/// Exact path match; `/books/` or `/books/3` do not highlight `/books`.
pub fn is_active(current_path: &str, route: &Route) -> bool {
    current_path == route.to_path()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let location = use_location();
    let current_path = location.as_ref().map(|l| l.path().to_string()).unwrap_or_default();

    html! {
        <nav class="navbar">
            <span class="navbar-brand">
                <Icon icon_id={IconId::LucideLibrary} width={"22"} height={"22"} />
            </span>
            {
                links().into_iter().map(|(route, label)| {
                    let active = is_active(&current_path, &route);
                    html! {
                        <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                            { label }
                        </Link<Route>>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
