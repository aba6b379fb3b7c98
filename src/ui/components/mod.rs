//! Reusable form components, rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Button without client-side handlers
//! - [`Input`]: Uncontrolled text input field

mod button;
mod input;

pub use button::Button;
pub use input::Input;
