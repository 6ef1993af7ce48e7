pub mod html;

pub use html::{html_response, redirect};
