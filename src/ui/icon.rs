use leptos::prelude::*;

/// Inline stroke icon on a 24x24 grid.
///
/// Unknown names fall back to [`icons::LIGHTNING`].
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let paths = icons::paths(name);

    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            {paths
                .iter()
                .map(|d| {
                    view! {
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=*d />
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Icon names and their path data
pub mod icons {
    pub const USERS: &str = "users";
    pub const CALENDAR: &str = "calendar";
    pub const NEWSPAPER: &str = "newspaper";
    pub const LAYOUT: &str = "layout";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const MAP_PIN: &str = "map-pin";
    pub const DOCUMENT: &str = "document";
    pub const LIGHTNING: &str = "lightning";

    /// SVG path data for `name`.
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            USERS => &[
                "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
            ],
            CALENDAR => &[
                "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            ],
            NEWSPAPER => &[
                "M19 20H5a2 2 0 01-2-2V6a2 2 0 012-2h10a2 2 0 012 2v1m2 13a2 2 0 01-2-2V7m2 13a2 2 0 002-2V9a2 2 0 00-2-2h-2m-4-3H9M7 16h6M7 8h6v4H7V8z",
            ],
            LAYOUT => &[
                "M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z",
            ],
            ARROW_DOWN => &["M19 14l-7 7m0 0l-7-7m7 7V3"],
            ARROW_RIGHT => &["M17 8l4 4m0 0l-4 4m4-4H3"],
            MAP_PIN => &[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            DOCUMENT => &[
                "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            ],
            _ => &["M13 10V3L4 14h7v7l9-11h-7z"],
        }
    }

}
