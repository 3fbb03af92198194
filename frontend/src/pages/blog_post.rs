use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog_view_tracker::BlogViewTracker;
use crate::Route;

// Slug, title, body. A static table stands in for a CMS while the blog is
// this small.
const POSTS: &[(&str, &str, &str)] = &[
    (
        "introducing-tempo",
        "Introducing Tempo",
        "Most time trackers ask you to remember them. You start a timer, you \
         forget the timer, and by Friday the timesheet is fiction. Tempo sits \
         in the menu bar and watches which app and document have your focus, \
         so the record keeps itself. This first beta covers macOS, with \
         per-project rollups and a daily review that takes under a minute.",
    ),
    (
        "measuring-deep-work",
        "Measuring deep work",
        "A focus streak is an unbroken run of attention on one project. Tempo \
         counts a streak from the moment you settle into a document until you \
         switch context for more than two minutes. Notifications you ignore \
         do not break a streak; replying to one does. The weekly report plots \
         your longest streaks against the time of day, which is usually all \
         you need to find your best hours.",
    ),
];

fn find_post(slug: &str) -> Option<(&'static str, &'static str)> {
    POSTS
        .iter()
        .find(|(post_slug, _, _)| *post_slug == slug)
        .map(|(_, title, body)| (*title, *body))
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    match find_post(&props.slug) {
        Some((title, body)) => html! {
            <article class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16 max-w-3xl">
                <BlogViewTracker slug={props.slug.clone()} title={title} />
                <h1 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-6">{ title }</h1>
                <p class="text-lg text-gray-700 leading-relaxed mb-10">{ body }</p>
                <Link<Route> to={Route::Home} classes="text-indigo-600 hover:underline font-medium">
                    {"Back to the home page"}
                </Link<Route>>
            </article>
        },
        // Unknown slugs render a notice without reporting a view.
        None => html! {
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16 max-w-3xl text-center">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">{"Article not found"}</h1>
                <p class="text-gray-600 mb-8">{"This article may have moved or never existed."}</p>
                <Link<Route> to={Route::Home} classes="text-indigo-600 hover:underline font-medium">
                    {"Back to the home page"}
                </Link<Route>>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_post_known_slug() {
        let (title, body) = find_post("introducing-tempo").unwrap();

        assert_eq!(title, "Introducing Tempo");
        assert!(!body.is_empty());
    }

    #[test]
    fn test_find_post_unknown_slug() {
        assert!(find_post("no-such-article").is_none());
    }
}
