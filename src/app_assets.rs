use dioxus::prelude::*;

pub const ICON: Asset = asset!("/assets/icon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const BG_MUSIC: Asset = asset!("/assets/audio/ambient-loop.wav");
pub const UI_CLICK: Asset = asset!("/assets/audio/ui-click.wav");

/// Icon font for skill/social glyphs; the catalog stores its class names.
const ICON_FONT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

pub fn head_nodes() -> Element {
    rsx! {
        document::Link { rel: "icon", href: ICON }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ICON_FONT_CSS }
    }
}
