//! Sidebar controller, renderer and CSP nonce.

mod controller;
mod nonce;
mod render;

pub use controller::SidebarController;
pub use nonce::{NONCE_LEN, Nonce};
pub use render::{RenderContext, escape_html, render_sidebar};
