use dioxus::prelude::*;

const PARTICLE_COUNT: usize = 40;

/// Fixed backdrop behind every section: gradient wash, two drifting glow
/// blobs and a field of floating dots.
#[component]
pub fn Particles() -> Element {
    // Positions and timings are rolled once per page session; CSS animates
    // from there.
    let seeds = use_hook(|| {
        (0..PARTICLE_COUNT)
            .map(|_| {
                let top = js_sys::Math::random() * 100.0;
                let left = js_sys::Math::random() * 100.0;
                let opacity = 0.2 + js_sys::Math::random() * 0.8;
                let delay = js_sys::Math::random() * 6.0;
                let duration = 6.0 + js_sys::Math::random() * 2.0;
                format!(
                    "top:{top:.2}%; left:{left:.2}%; opacity:{opacity:.2}; \
                     animation-delay:{delay:.2}s; animation-duration:{duration:.2}s;"
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "backdrop", aria_hidden: "true",
            div { class: "backdrop-gradient" }
            div { class: "blob blob-a" }
            div { class: "blob blob-b" }
            for (i, style) in seeds.iter().enumerate() {
                span { key: "{i}", class: "particle", style: "{style}" }
            }
        }
    }
}
