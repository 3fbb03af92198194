use yew::prelude::*;

use crate::analytics::{track_download_intent, track_download_start};

const ARM64_URL: &str = "https://downloads.tempo.app/Tempo-latest-arm64.dmg";
const X64_URL: &str = "https://downloads.tempo.app/Tempo-latest-x64.dmg";

#[derive(Properties, PartialEq, Clone)]
pub struct DownloadButtonProps {
    /// Where on the page this button sits, e.g. "hero" or "cta_section".
    pub location: String,
    #[prop_or_default]
    pub class: Option<String>,
}

/// Download call-to-action with a two-step funnel: the first click records
/// intent and swaps the button for the platform picker, picking a platform
/// records the download start and hands the link to the browser.
#[function_component(DownloadButton)]
pub fn download_button(props: &DownloadButtonProps) -> Html {
    let picker_open = use_state(|| false);

    let base_classes =
        "inline-flex items-center gap-2 rounded-md font-semibold py-2.5 px-6 text-sm \
         bg-slate-900 hover:bg-slate-700 text-white transition-all hover:scale-105";
    let button_classes = if let Some(ref custom_class) = props.class {
        format!("{} {}", base_classes, custom_class)
    } else {
        base_classes.to_string()
    };

    let open_picker = {
        let picker_open = picker_open.clone();
        let location = props.location.clone();
        Callback::from(move |_| {
            track_download_intent(&location);
            picker_open.set(true);
        })
    };

    let arm64_click = Callback::from(move |_| track_download_start("arm64"));
    let x64_click = Callback::from(move |_| track_download_start("x64"));

    if *picker_open {
        html! {
            <div class="flex flex-col space-y-3">
                <a
                    href={ARM64_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    onclick={arm64_click}
                    class="px-4 py-3 bg-slate-900 text-white rounded-lg hover:bg-slate-700 text-center font-semibold transition-all"
                >
                    {"Download for Apple Silicon (M1-M4)"}
                </a>
                <a
                    href={X64_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    onclick={x64_click}
                    class="px-4 py-3 bg-gray-700 text-white rounded-lg hover:bg-gray-600 text-center font-semibold transition-all"
                >
                    {"Download for Intel"}
                </a>
            </div>
        }
    } else {
        html! {
            <button onclick={open_picker} class={button_classes}>
                {"Download Tempo"}
            </button>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Call sites only pass a location, so the class prop must be omittable.
    #[test]
    fn test_class_prop_is_optional() {
        let props = yew::props!(DownloadButtonProps { location: "hero" });

        assert_eq!(props.location, "hero");
        assert!(props.class.is_none());
    }
}
