use yew::prelude::*;

use crate::hooks::use_page_tracking;

#[derive(Properties, PartialEq)]
pub struct TrackedHomeProps {
    pub children: Children,
}

/// Wraps the home route's content and reports the visit.
///
/// Children render untouched, with no extra element around them. The visit
/// event fires once per mount: re-renders stay silent, a fresh mount fires
/// again. Delivery problems stay inside the analytics layer and never reach
/// the render path.
#[function_component(TrackedHome)]
pub fn tracked_home(props: &TrackedHomeProps) -> Html {
    use_page_tracking("home");

    html! {
        <>{ props.children.clone() }</>
    }
}
