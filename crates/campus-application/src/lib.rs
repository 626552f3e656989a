//! Typed view-model layer for the Campus portal.
//!
//! Each portal surface ("login form", "GPA form", "FAQ list", "modal")
//! gets an explicit view-model with typed read/write accessors, decoupled
//! from any concrete rendering. The view-models are independent of each
//! other: a front-end that renders only some of them loses nothing.

pub mod disclaimer_view;
pub mod faq_list;
pub mod gpa_form;
pub mod login_form;
pub mod portal;

pub use crate::disclaimer_view::{DISCLAIMER_TEXT, DisclaimerView};
pub use crate::faq_list::FaqList;
pub use crate::gpa_form::{GpaDisplay, GpaForm};
pub use crate::login_form::{INVALID_ID_MESSAGE, LoginForm};
pub use crate::portal::{PageInit, Portal};
