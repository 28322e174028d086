pub mod form;
pub mod view;

pub use form::{
    process_events, simulate_submission, ContactEvent, ContactForm, Field, SubmitStatus,
    SUBMIT_DELAY_MS,
};
pub use view::{ContactFormCard, ContactSection};
