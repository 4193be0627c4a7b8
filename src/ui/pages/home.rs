//! Homepage
//!
//! Seven independent sections rendered top to bottom:
//! - Hero banner with background image and join/explore links
//! - Benefit cards
//! - Upcoming events with a link to the full list
//! - Statistics strip
//! - Testimonials
//! - Partner logos
//! - Closing call-to-action
//!
//! Cards cascade in as their section scrolls into view; see [`crate::ui::motion`].

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    self, EVENTS, EVENTS_HEADING, FEATURES, FEATURES_HEADING, HERO_IMAGE, PARTNERS,
    PARTNERS_HEADING, SITE_NAME, SITE_URL, STATS, TESTIMONIALS, TESTIMONIALS_HEADING,
};
use crate::core::{Entrance, Event, Feature, Partner, Route, SectionHeading, Stat, Testimonial};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{MotionStyles, Reveal, RevealScript};

/// Homepage with SEO metadata
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />
        <HomeContent />
    }
}

/// Page body, independent of the document head
#[component]
pub fn HomeContent() -> impl IntoView {
    view! {
        <div class="homepage">
            <HeroSection />
            <FeaturesSection />
            <EventsSection />
            <StatisticsSection />
            <TestimonialsSection />
            <PartnersSection />
            <CallToActionSection />

            <MotionStyles />
            <RevealScript />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{SITE_NAME} - Your Global Alumni Network");
    let description = "Join thousands of alumni to expand your network, attend exclusive events, and stay connected with your alma mater.";
    let og_image = format!("{SITE_URL}{HERO_IMAGE}");
    let canonical = format!("{SITE_URL}/");

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description />
        <Meta property="og:image" content=og_image.clone() />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=description />
        <Meta name="twitter:image" content=og_image />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=content::structured_data(&EVENTS)></script>
    }
}

// ============================================================================
// Sections
// ============================================================================

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative h-screen flex items-center justify-center overflow-hidden">
            // Background image with gradient overlay
            <div class="absolute inset-0 z-0">
                <img
                    src=HERO_IMAGE
                    alt="University campus aerial view"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-blue-900/70 to-indigo-900/70"></div>
            </div>

            <div class="container mx-auto px-4 z-10 relative text-white text-center md:text-left md:max-w-3xl">
                <Reveal entrance=Entrance::hero()>
                    <span class="bg-blue-600 text-white px-4 py-1 rounded-full text-sm font-medium inline-block mb-4">
                        "YOUR ALUMNI COMMUNITY"
                    </span>
                    <h1 class="text-4xl md:text-6xl font-serif font-bold mb-6 leading-tight">
                        "Connect With Your "
                        <span class="text-blue-400">"Global Network"</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-200 mb-8 max-w-xl">
                        "Join thousands of alumni to expand your network, attend exclusive events, and stay connected with your alma mater."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                        <a
                            href=Route::Register.path()
                            class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-md font-medium text-lg transition-colors"
                        >
                            "Join Now"
                        </a>
                        <a
                            href=Route::Events.path()
                            class="bg-white/10 hover:bg-white/20 text-white border border-white/30 px-8 py-3 rounded-md font-medium text-lg transition-colors backdrop-blur-sm"
                        >
                            "Explore Events"
                        </a>
                    </div>
                </Reveal>
            </div>

            // Scroll indicator
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 z-10 animate-bounce">
                <Icon name=icons::ARROW_DOWN class="w-6 h-6 text-white" />
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-b from-white to-gray-50">
            <div class="container mx-auto px-4">
                <SectionHeader heading=FEATURES_HEADING />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <Reveal entrance=Entrance::card().staggered(index)>
                                    <FeatureCard feature=*feature />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EventsSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <SectionHeader heading=EVENTS_HEADING />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {EVENTS
                        .iter()
                        .enumerate()
                        .map(|(index, event)| {
                            view! {
                                <Reveal entrance=Entrance::card().staggered(index)>
                                    <EventCard event=*event />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="text-center mt-12">
                    <a
                        href=Route::Events.path()
                        class="bg-white text-blue-600 border border-blue-600 hover:bg-blue-50 px-6 py-3 rounded-md font-medium inline-flex items-center transition-colors"
                    >
                        "View All Events"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 ml-2" />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatisticsSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-blue-600 to-indigo-700 text-white">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <Reveal entrance=Entrance::stat().staggered(index)>
                                    <StatCard stat=*stat />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <SectionHeader heading=TESTIMONIALS_HEADING />

                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! {
                                <Reveal entrance=Entrance::card().staggered(index)>
                                    <TestimonialCard testimonial=*testimonial />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PartnersSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <SectionHeader heading=PARTNERS_HEADING compact=true />

                <div class="flex flex-wrap justify-center items-center gap-8 md:gap-12">
                    {PARTNERS
                        .iter()
                        .enumerate()
                        .map(|(index, partner)| {
                            view! {
                                <Reveal
                                    entrance=Entrance::logo().staggered(index)
                                    class="grayscale hover:grayscale-0 transition-all duration-300"
                                >
                                    <PartnerLogo partner=*partner />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToActionSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-r from-blue-600 to-indigo-700 text-white">
            <div class="container mx-auto px-4 text-center">
                <Reveal entrance=Entrance::card() class="max-w-3xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-serif font-bold mb-6">
                        "Ready to Join Your Alumni Community?"
                    </h2>
                    <p class="text-xl text-blue-100 mb-8">
                        "Become a member today and unlock a world of networking, events, and opportunities."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href=Route::Register.path()
                            class="bg-white text-blue-600 hover:bg-blue-50 px-8 py-3 rounded-md font-medium text-lg transition-colors"
                        >
                            "Join Now"
                        </a>
                        <a
                            href=Route::Login.path()
                            class="bg-transparent text-white border border-white hover:bg-white/10 px-8 py-3 rounded-md font-medium text-lg transition-colors"
                        >
                            "Member Login"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

// ============================================================================
// Building blocks
// ============================================================================

#[component]
fn SectionHeader(
    heading: SectionHeading,
    /// Tighter spacing and a smaller title, for the logo strip
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let (wrapper_class, title_class) = if compact {
        ("text-center mb-12", "text-3xl font-serif font-bold mt-2")
    } else {
        (
            "text-center mb-16 max-w-3xl mx-auto",
            "text-3xl md:text-4xl font-serif font-bold mt-2 mb-4",
        )
    };

    view! {
        <div class=wrapper_class>
            <span class="text-blue-600 font-semibold">{heading.eyebrow}</span>
            <h2 class=title_class>{heading.title}</h2>
            {heading
                .subtitle
                .map(|subtitle| view! { <p class="text-xl text-gray-600">{subtitle}</p> })}
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div
            data-card="feature"
            class="bg-white rounded-xl shadow-md hover:shadow-lg transition-shadow p-6 h-full"
        >
            <div class="bg-blue-50 w-16 h-16 rounded-full flex items-center justify-center mb-4">
                <Icon name=feature.icon class="w-8 h-8 text-blue-600" />
            </div>
            <h3 class="text-xl font-bold mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}

#[component]
fn EventCard(event: Event) -> impl IntoView {
    view! {
        <div
            data-card="event"
            class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg transition-shadow h-full"
        >
            <div class="h-48 overflow-hidden">
                <img
                    src=event.image
                    alt=event.title
                    class="w-full h-full object-cover transition-transform hover:scale-105 duration-300"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{event.title}</h3>
                <div class="mb-4 text-gray-600">
                    <div class="flex items-center mb-1">
                        <Icon name=icons::CALENDAR class="w-5 h-5 mr-2 text-blue-600" />
                        <span>{event.date}</span>
                    </div>
                    <div class="flex items-center">
                        <Icon name=icons::MAP_PIN class="w-5 h-5 mr-2 text-blue-600" />
                        <span>{event.location}</span>
                    </div>
                </div>
                <div class="flex justify-between items-center">
                    <span class="text-lg font-bold text-blue-600">{event.price_label()}</span>
                    <a
                        href=event.detail_route().path()
                        class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        "View Details"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div data-card="stat" class="p-6">
            <div class="text-4xl md:text-5xl font-bold mb-2">{stat.value}</div>
            <div class="text-blue-200 text-lg">{stat.label}</div>
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div data-card="testimonial" class="bg-white rounded-xl shadow-md p-6 relative h-full">
            <div
                class="text-5xl text-blue-500 absolute top-4 left-4 opacity-10 leading-none"
                aria-hidden="true"
            >
                "“"
            </div>
            <p class="text-gray-700 mb-6 relative z-10">{testimonial.quote}</p>
            <div class="flex items-center mt-4">
                <img
                    src=testimonial.image
                    alt=testimonial.author
                    class="w-12 h-12 rounded-full object-cover mr-4"
                />
                <div>
                    <div class="font-bold">{testimonial.author}</div>
                    <div class="text-gray-500 text-sm">{testimonial.role}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PartnerLogo(partner: Partner) -> impl IntoView {
    view! {
        <div data-card="partner">
            <img src=partner.logo alt=partner.name class="h-12 md:h-16 w-auto" />
        </div>
    }
}
