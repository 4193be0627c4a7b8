//! Entrance animation plumbing for the page markup.
//!
//! [`Reveal`] wraps content in an element carrying an [`Entrance`]'s classes
//! and timing variables. [`MotionStyles`] defines what those classes do and
//! [`RevealScript`] flips elements to their final `.visible` state on load or
//! when they first scroll into view.

use leptos::prelude::*;

use crate::core::motion::Entrance;

/// Wraps children in an animated container.
///
/// The wrapper only adds `class` and `style`; the children render exactly as
/// they would without it.
#[component]
pub fn Reveal(
    entrance: Entrance,
    /// Extra layout classes for the wrapper
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = if class.is_empty() {
        entrance.class()
    } else {
        format!("{} {}", entrance.class(), class)
    };

    view! {
        <div class=classes style=entrance.style()>
            {children()}
        </div>
    }
}

/// CSS for the `.reveal` classes
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .reveal {
                opacity: 0;
                transition-property: opacity, transform;
                transition-timing-function: ease-out;
                transition-duration: var(--reveal-duration, 500ms);
                transition-delay: var(--reveal-delay, 0ms);
                will-change: opacity, transform;
            }

            .reveal-slide-up {
                transform: translateY(var(--reveal-offset, 20px));
            }

            .reveal-scale-in {
                transform: scale(var(--reveal-scale, 0.8));
            }

            .reveal.visible {
                opacity: 1;
                transform: none;
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>
        <noscript>
            <style>".reveal { opacity: 1; transform: none; }"</style>
        </noscript>
    }
}

/// Marks `.reveal` elements visible: mount-triggered ones on the next frame,
/// in-view ones the first time they intersect the viewport.
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function () {
                function show(el) {
                    el.classList.add('visible');
                }

                function initReveal() {
                    requestAnimationFrame(function () {
                        document.querySelectorAll('.reveal-on-mount').forEach(show);
                    });

                    var pending = document.querySelectorAll('.reveal-in-view');
                    if (!('IntersectionObserver' in window)) {
                        pending.forEach(show);
                        return;
                    }

                    var observer = new IntersectionObserver(function (entries) {
                        entries.forEach(function (entry) {
                            if (entry.isIntersecting) {
                                show(entry.target);
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    pending.forEach(function (el) {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_reveal_carries_entrance_attributes() {
        let entrance = Entrance::card().staggered(2);
        let html = view! {
            <Reveal entrance=entrance>
                <p>"Hello"</p>
            </Reveal>
        }
        .to_html();

        assert!(html.contains(r#"class="reveal reveal-slide-up reveal-in-view""#));
        assert!(html.contains("--reveal-delay: 200ms;"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_reveal_appends_layout_classes() {
        let html = view! {
            <Reveal entrance=Entrance::logo() class="p-4">
                "logo"
            </Reveal>
        }
        .to_html();

        assert!(html.contains(r#"class="reveal reveal-fade reveal-in-view p-4""#));
    }

    #[test]
    fn test_reveal_wraps_children_unchanged() {
        let bare = view! { <span class="x">"Same text"</span> }.to_html();
        let wrapped = view! {
            <Reveal entrance=Entrance::hero()>
                <span class="x">"Same text"</span>
            </Reveal>
        }
        .to_html();

        let open = format!(
            r#"<div class="{}" style="{}"#,
            Entrance::hero().class(),
            Entrance::hero().style()
        );
        assert!(wrapped.starts_with(&open), "{wrapped}");
        assert!(wrapped.ends_with("</div>"), "{wrapped}");
        assert!(wrapped.contains(&bare), "{wrapped}");
        assert!(!wrapped.contains(";;"), "{wrapped}");
    }

    #[test]
    fn test_styles_define_final_state() {
        let html = view! { <MotionStyles /> }.to_html();

        assert!(html.contains(".reveal.visible"));
        assert!(html.contains("prefers-reduced-motion"));
        assert!(html.contains("<noscript>"));
    }

    #[test]
    fn test_script_observes_in_view_elements_once() {
        let html = view! { <RevealScript /> }.to_html();

        assert!(html.contains("IntersectionObserver"));
        assert!(html.contains("'.reveal-in-view'"));
        assert!(html.contains("'.reveal-on-mount'"));
        assert!(html.contains("observer.unobserve(entry.target)"));
    }
}
