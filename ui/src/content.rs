//! Compiled-in site content: contact details, opening hours, gallery, testimonials.
//!
//! UI copy lives in the Fluent files; this module holds the data those strings
//! are wrapped around. The menu catalog is in `sections::menu::catalog`.

use crate::components::icons;

pub const BRAND_NAME: &str = "Brew & Bloom";

pub const HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=1920&q=80";

pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1511081692775-05d0f180a065?w=800&q=80";

pub const ADDRESS: &str = "150 Park Row, New York, NY 10007";
pub const PHONE: &str = "(212) 555-1234";
pub const EMAIL: &str = "hello@brewandbloom.com";

/// Static location embed for the contact section. Not driven by any state.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3024.2219901290355!2d-74.00369368400567!3d40.71312937933185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c25a23e28c1191%3A0x49f75d3281df052a!2s150%20Park%20Row%2C%20New%20York%2C%20NY%2010007!5e0!3m2!1sen!2sus!4v1652813742483!5m2!1sen!2sus";

/// Day ranges used by the opening-hours tables (labels are localized in the views).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRange {
    Weekdays,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: DayRange,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: [OpeningHours; 3] = [
    OpeningHours {
        days: DayRange::Weekdays,
        hours: "7:00 AM - 8:00 PM",
    },
    OpeningHours {
        days: DayRange::Saturday,
        hours: "8:00 AM - 9:00 PM",
    },
    OpeningHours {
        days: DayRange::Sunday,
        hours: "8:00 AM - 6:00 PM",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: "Instagram",
        url: "#",
        icon: icons::INSTAGRAM,
    },
    SocialLink {
        network: "Facebook",
        url: "#",
        icon: icons::FACEBOOK,
    },
    SocialLink {
        network: "Twitter",
        url: "#",
        icon: icons::TWITTER,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: [GalleryImage; 4] = [
    GalleryImage {
        src: "https://images.unsplash.com/photo-1600093463592-8e36ae95ef56?w=800&q=80",
        alt: "Café interior with wooden tables and plants",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1514066558159-fc8c737ef259?w=800&q=80",
        alt: "Barista making latte art",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=800&q=80",
        alt: "Freshly baked pastries",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1497935586047-9395ee065a19?w=800&q=80",
        alt: "Coffee beans being roasted",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Local Artist",
        quote: "Brew & Bloom isn't just a café, it's my second studio. The atmosphere inspires creativity, and their lavender latte is absolutely divine!",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Tech Entrepreneur",
        quote: "I've had meetings in cafés all over the world, but none match the perfect balance of ambiance, service, and exceptional coffee that Brew & Bloom offers.",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=michael",
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Food Blogger",
        quote: "Their commitment to sustainability isn't just talk. It's evident in everything from their compostable packaging to their locally-sourced ingredients. And the pastries? Heavenly!",
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=elena",
    },
];
