use yew::prelude::*;

use crate::hooks::use_blog_tracking;

#[derive(Properties, PartialEq)]
pub struct BlogViewTrackerProps {
    pub slug: String,
    pub title: String,
}

/// Invisible marker that reports a blog article view once per mount.
/// Mount it next to the article body; it renders nothing.
#[function_component(BlogViewTracker)]
pub fn blog_view_tracker(props: &BlogViewTrackerProps) -> Html {
    use_blog_tracking(&props.slug, &props.title);

    html! {}
}
