use yew::prelude::*;
use yew_router::prelude::*;
use crate::app::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="container">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Inventories}>{"Back to inventories"}</Link<Route>>
        </div>
    }
}
