use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::ui::{HomePage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="font-sans antialiased text-gray-900">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/alumni-connect.css"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_router::location::RequestUrl;

    fn render_at(path: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App /> }.to_html()
        })
    }

    #[test]
    fn test_root_renders_homepage() {
        let html = render_at("/");

        assert!(html.contains("Annual Alumni Gala"));
        assert!(html.contains("$75"));
        assert!(!html.contains("Page Not Found"));
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let html = render_at("/does-not-exist");

        assert!(html.contains("404"));
        assert!(html.contains("Page Not Found"));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/events""#));
        assert!(!html.contains("Annual Alumni Gala"));
    }
}
