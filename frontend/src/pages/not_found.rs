use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {}

#[function_component(NotFound)]
pub fn not_found(_props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found-page min-h-screen flex flex-col items-center justify-center text-center px-4">
            <h1 class="text-3xl font-bold text-gray-900 mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-600 mb-8">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="text-indigo-600 hover:underline font-medium">
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}
