use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::Navbar;
use crate::pages;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/inventories")]
    Inventories,
    #[at("/books")]
    Books,
    #[at("/branches")]
    Branches,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home        => html! { <Redirect<Route> to={Route::Inventories} /> },
        Route::Inventories => html! { <pages::inventories::InventoriesPage /> },
        Route::Books       => html! { <pages::books::BooksPage /> },
        Route::Branches    => html! { <pages::branches::BranchesPage /> },
        Route::NotFound    => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main class="container">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}
