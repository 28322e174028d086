//! Page sections rendered by the home view, top to bottom.

pub mod about;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod menu;
pub mod testimonials;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use menu::MenuSection;
pub use testimonials::TestimonialsSection;
