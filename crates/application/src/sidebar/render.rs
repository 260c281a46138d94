//! HTML rendering for the sidebar webview.
//!
//! Rendering is a pure function of the sidebar state, the webview asset
//! locations and a nonce. The controller supplies a fresh nonce per call.

use std::borrow::Cow;
use std::fmt;

use reqpanel_domain::{EndpointHistoryEntry, PanelTarget, SidebarState, SidebarView};

use super::Nonce;

/// Webview-specific locations the document refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Source token allowed by the content-security-policy.
    pub csp_source: String,
    /// Webview URI of the sidebar script.
    pub script_uri: String,
    /// Webview URI of the sidebar stylesheet.
    pub style_uri: String,
}

impl RenderContext {
    /// Policy allowing same-origin scripts plus the nonce, and same-origin
    /// or inline styles.
    #[must_use]
    pub fn content_security_policy(&self, nonce: &Nonce) -> String {
        let src = &self.csp_source;
        format!(
            "default-src 'none'; script-src {src} 'nonce-{nonce}'; style-src {src} 'unsafe-inline'; img-src {src} https:; font-src {src};"
        )
    }
}

/// Renders the full sidebar document.
#[must_use]
pub fn render_sidebar(state: &SidebarState, context: &RenderContext, nonce: &Nonce) -> String {
    SidebarDocument {
        state,
        context,
        nonce,
    }
    .to_string()
}

/// Escapes text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

struct SidebarDocument<'a> {
    state: &'a SidebarState,
    context: &'a RenderContext,
    nonce: &'a Nonce,
}

impl SidebarDocument<'_> {
    fn write_buttons(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div id=\"buttons\">")?;
        for target in PanelTarget::ALL {
            writeln!(
                f,
                "  <button class=\"webview-button\" data-webview=\"{}\">{}</button>",
                target.key(),
                target.title()
            )?;
        }
        writeln!(f, "</div>")
    }

    fn write_history(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<button id=\"back-button\">Back</button>")?;
        writeln!(f, "<div id=\"sidebar-container\">")?;
        writeln!(f, "  <div id=\"history-header\">")?;
        writeln!(f, "    <h3>API History</h3>")?;
        writeln!(f, "    <button id=\"new-request-btn\">New Request</button>")?;
        writeln!(f, "  </div>")?;
        writeln!(
            f,
            "  <input type=\"text\" id=\"filter-history\" placeholder=\"Filter history\">"
        )?;
        writeln!(f, "  <ul id=\"api-history\">")?;
        for entry in self.state.history.entries() {
            write_entry(f, entry)?;
        }
        writeln!(f, "  </ul>")?;
        writeln!(f, "</div>")
    }
}

fn write_entry(f: &mut fmt::Formatter<'_>, entry: &EndpointHistoryEntry) -> fmt::Result {
    writeln!(
        f,
        "    <li class=\"api-endpoint {}\">",
        escape_html(&entry.method_class())
    )?;
    writeln!(
        f,
        "      <span class=\"method\">{}</span>",
        escape_html(&entry.method)
    )?;
    writeln!(f, "      <span class=\"name\">{}</span>", escape_html(&entry.name))?;
    writeln!(
        f,
        "      <span class=\"last-used\">{}</span>",
        escape_html(&entry.last_used)
    )?;
    writeln!(f, "    </li>")
}

impl fmt::Display for SidebarDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let csp = self.context.content_security_policy(self.nonce);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            f,
            "    <meta http-equiv=\"Content-Security-Policy\" content=\"{}\">",
            escape_html(&csp)
        )?;
        writeln!(
            f,
            "    <link href=\"{}\" rel=\"stylesheet\">",
            escape_html(&self.context.style_uri)
        )?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        match self.state.view {
            SidebarView::ButtonMenu => Self::write_buttons(f)?,
            SidebarView::HistoryList => self.write_history(f)?,
        }
        writeln!(
            f,
            "<script nonce=\"{}\" src=\"{}\"></script>",
            self.nonce,
            escape_html(&self.context.script_uri)
        )?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
