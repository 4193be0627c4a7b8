//! Homepage content catalogue.
//!
//! Every record shown on the homepage is a `Copy` constant defined here.
//! The values are illustrative placeholders until a content source exists.

use serde::Serialize;

use super::routes::Route;

/// Canonical public URL of the site, used in SEO metadata.
pub const SITE_URL: &str = "https://alumni.example.edu";

pub const SITE_NAME: &str = "Alumni Connect";

pub const HERO_IMAGE: &str = "/images/campus-aerial.jpg";

/// Heading block shown above a section's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Name of an inline glyph from [`crate::ui::icons`]
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    /// Human-readable date as displayed on the card
    pub date: &'static str,
    /// ISO-8601 start date for structured data
    pub starts_on: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    /// Ticket price in whole US dollars
    pub price: u32,
}

impl Event {
    /// Price as displayed on the card, e.g. `$75`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn detail_route(&self) -> Route {
        Route::EventDetail(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

// ============================================================================
// Section headings
// ============================================================================

pub const FEATURES_HEADING: SectionHeading = SectionHeading {
    eyebrow: "OUR BENEFITS",
    title: "Why Join Our Alumni Network?",
    subtitle: Some(
        "Our alumni portal provides valuable resources and opportunities to keep you connected with your university community.",
    ),
};

pub const EVENTS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "JOIN US",
    title: "Upcoming Events",
    subtitle: Some(
        "Join us for these exciting events designed to bring our alumni community together.",
    ),
};

pub const TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "TESTIMONIALS",
    title: "What Our Alumni Say",
    subtitle: Some("Hear from members of our community about their experiences."),
};

pub const PARTNERS_HEADING: SectionHeading = SectionHeading {
    eyebrow: "OUR PARTNERS",
    title: "Strategic Partners & Sponsors",
    subtitle: None,
};

// ============================================================================
// Records
// ============================================================================

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "users",
        title: "Alumni Directory",
        description: "Connect with thousands of alumni from across the globe to expand your professional network.",
    },
    Feature {
        icon: "calendar",
        title: "Exclusive Events",
        description: "Attend both virtual and in-person events designed specifically for our alumni community.",
    },
    Feature {
        icon: "newspaper",
        title: "Latest Updates",
        description: "Stay informed about the latest news and achievements from your alma mater.",
    },
    Feature {
        icon: "layout",
        title: "Career Resources",
        description: "Access exclusive job boards, mentorship programs, and professional development resources.",
    },
];

pub const EVENTS: [Event; 3] = [
    Event {
        id: 1,
        title: "Annual Alumni Gala",
        date: "November 15, 2023",
        starts_on: "2023-11-15",
        location: "Grand Ballroom, Alumni Center",
        image: "/images/event-gala.jpg",
        price: 75,
    },
    Event {
        id: 2,
        title: "Career Networking Mixer",
        date: "October 22, 2023",
        starts_on: "2023-10-22",
        location: "Conference Hall, Business Building",
        image: "/images/event-networking.jpg",
        price: 25,
    },
    Event {
        id: 3,
        title: "Homecoming Weekend",
        date: "December 5, 2023",
        starts_on: "2023-12-05",
        location: "University Campus",
        image: "/images/event-homecoming.jpg",
        price: 50,
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        value: "10,000+",
        label: "Alumni Network",
    },
    Stat {
        value: "50+",
        label: "Annual Events",
    },
    Stat {
        value: "120+",
        label: "Countries Represented",
    },
    Stat {
        value: "25+",
        label: "Years of Excellence",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The alumni network has been instrumental in my career growth. I've connected with professionals who have provided valuable mentorship and opportunities.",
        author: "Sarah Johnson",
        role: "Class of 2010, Marketing Director",
        image: "/images/testimonial-1.jpg",
    },
    Testimonial {
        quote: "Being part of this alumni community has allowed me to give back to the university that gave me so much. I'm proud to be connected to this network of extraordinary individuals.",
        author: "Michael Chen",
        role: "Class of 2005, Software Engineer",
        image: "/images/testimonial-2.jpg",
    },
    Testimonial {
        quote: "The events organized by the alumni association are top-notch. I've made valuable connections and even found my current business partner at one of the networking mixers!",
        author: "Jessica Rodriguez",
        role: "Class of 2015, Entrepreneur",
        image: "/images/testimonial-3.jpg",
    },
];

pub const PARTNERS: [Partner; 6] = [
    Partner {
        name: "Company 1",
        logo: "/images/partner-1.png",
    },
    Partner {
        name: "Company 2",
        logo: "/images/partner-2.png",
    },
    Partner {
        name: "Company 3",
        logo: "/images/partner-3.png",
    },
    Partner {
        name: "Company 4",
        logo: "/images/partner-4.png",
    },
    Partner {
        name: "Company 5",
        logo: "/images/partner-5.png",
    },
    Partner {
        name: "Company 6",
        logo: "/images/partner-6.png",
    },
];

// ============================================================================
// Structured data
// ============================================================================

#[derive(Serialize)]
struct OrganizationLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: &'static str,
    event: Vec<EventLd>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    start_date: &'static str,
    image: String,
    url: String,
    location: PlaceLd,
    offers: OfferLd,
}

#[derive(Serialize)]
struct PlaceLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: u32,
    price_currency: &'static str,
    url: String,
}

impl From<&Event> for EventLd {
    fn from(event: &Event) -> Self {
        let url = format!("{SITE_URL}{}", event.detail_route());
        Self {
            kind: "Event",
            name: event.title,
            start_date: event.starts_on,
            image: format!("{SITE_URL}{}", event.image),
            url: url.clone(),
            location: PlaceLd {
                kind: "Place",
                name: event.location,
            },
            offers: OfferLd {
                kind: "Offer",
                price: event.price,
                price_currency: "USD",
                url,
            },
        }
    }
}

/// schema.org JSON-LD describing the organization and its upcoming events.
pub fn structured_data(events: &[Event]) -> String {
    let organization = OrganizationLd {
        context: "https://schema.org",
        kind: "Organization",
        name: SITE_NAME,
        url: SITE_URL,
        event: events.iter().map(EventLd::from).collect(),
    };
    // Only string and integer fields, so serialization cannot fail.
    serde_json::to_string(&organization).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(EVENTS.len(), 3);
        assert_eq!(STATS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(PARTNERS.len(), 6);
    }

    #[test]
    fn test_gala_event() {
        let gala = EVENTS[0];
        assert_eq!(gala.title, "Annual Alumni Gala");
        assert_eq!(gala.price, 75);
        assert_eq!(gala.price_label(), "$75");
        assert_eq!(gala.detail_route().path(), "/events/1");
    }

    #[test]
    fn test_price_labels() {
        let labels: Vec<String> = EVENTS.iter().map(Event::price_label).collect();
        assert_eq!(labels, vec!["$75", "$25", "$50"]);
    }

    #[test]
    fn test_event_ids_are_unique() {
        let mut ids: Vec<u32> = EVENTS.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EVENTS.len());
    }

    #[test]
    fn test_first_stat() {
        assert_eq!(STATS[0].value, "10,000+");
        assert_eq!(STATS[0].label, "Alumni Network");
    }

    #[test]
    fn test_image_references_are_absolute_paths() {
        let images = std::iter::once(HERO_IMAGE)
            .chain(EVENTS.iter().map(|e| e.image))
            .chain(TESTIMONIALS.iter().map(|t| t.image))
            .chain(PARTNERS.iter().map(|p| p.logo));
        for image in images {
            assert!(image.starts_with("/images/"), "unexpected path {image}");
        }
    }

    #[test]
    fn test_partners_heading_has_no_subtitle() {
        assert!(PARTNERS_HEADING.subtitle.is_none());
        assert!(FEATURES_HEADING.subtitle.is_some());
        assert!(EVENTS_HEADING.subtitle.is_some());
        assert!(TESTIMONIALS_HEADING.subtitle.is_some());
    }

    #[test]
    fn test_structured_data_lists_events() {
        let json: Value = serde_json::from_str(&structured_data(&EVENTS)).unwrap();

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Organization");
        assert_eq!(json["name"], SITE_NAME);

        let events = json["event"].as_array().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["@type"], "Event");
        assert_eq!(events[0]["name"], "Annual Alumni Gala");
        assert_eq!(events[0]["startDate"], "2023-11-15");
        assert_eq!(events[0]["location"]["name"], "Grand Ballroom, Alumni Center");
        assert_eq!(events[0]["offers"]["price"], 75);
        assert_eq!(events[0]["offers"]["priceCurrency"], "USD");
        assert_eq!(
            events[0]["url"],
            "https://alumni.example.edu/events/1"
        );
    }

    #[test]
    fn test_structured_data_without_events() {
        let json: Value = serde_json::from_str(&structured_data(&[])).unwrap();
        assert_eq!(json["event"].as_array().unwrap().len(), 0);
    }
}
