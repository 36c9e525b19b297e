//! HTML pages returned to the in-app browser after the OAuth redirect.
//!
//! Each page hands control back to the mobile app through a deep link.

/// Deep link the mobile app listens on.
pub const DEEP_LINK_BASE: &str = "foundmoney://gmail-connected";

/// Deep link reporting the outcome to the app.
#[must_use]
pub fn deep_link(success: bool) -> String {
    format!("{DEEP_LINK_BASE}?success={success}")
}

/// Which page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    Success,
    Error,
}

/// Everything a page is parameterized by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub variant: PageVariant,
    pub message: &'a str,
    pub deep_link: String,
}

impl<'a> Page<'a> {
    /// Page shown after the connection is stored.
    #[must_use]
    pub fn success() -> Self {
        Self {
            variant: PageVariant::Success,
            message: "Redirecting back to Found Money...",
            deep_link: deep_link(true),
        }
    }

    /// Page shown when the flow stopped with `message`.
    #[must_use]
    pub fn error(message: &'a str) -> Self {
        Self { variant: PageVariant::Error, message, deep_link: deep_link(false) }
    }

    /// Render to a complete HTML document.
    ///
    /// The message is HTML-escaped.
    #[must_use]
    pub fn render(&self) -> String {
        let (title, heading, icon, gradient, footer, script) = match self.variant {
            PageVariant::Success => (
                "Gmail Connected",
                "Gmail Connected Successfully!",
                "✅",
                "#10B981 0%, #059669 100%",
                r#"<p class="footnote">If you're not redirected automatically, you can close this window.</p>"#,
                format!(
                    r"// Try to redirect to the app
window.location.href = '{link}';
// Retry with replace in case the first navigation was ignored
setTimeout(() => {{ window.location.replace('{link}'); }}, 100);
// Close the window if it is still open
setTimeout(() => {{ window.close(); }}, 2000);",
                    link = self.deep_link
                ),
            ),
            PageVariant::Error => (
                "Connection Failed",
                "Connection Failed",
                "❌",
                "#EF4444 0%, #DC2626 100%",
                r#"<p class="footnote">You can close this window and try again.</p>"#,
                format!(
                    r"setTimeout(() => {{ window.location.href = '{link}'; }}, 2000);",
                    link = self.deep_link
                ),
            ),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<title>{title}</title>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; margin: 0; background: linear-gradient(135deg, {gradient}); color: white; }}
.container {{ text-align: center; padding: 2rem; }}
.icon {{ font-size: 64px; margin-bottom: 1rem; }}
h1 {{ font-size: 24px; margin-bottom: 0.5rem; }}
p {{ font-size: 16px; opacity: 0.9; }}
.footnote {{ margin-top: 2rem; font-size: 14px; opacity: 0.7; }}
</style>
</head>
<body>
<div class="container">
<div class="icon">{icon}</div>
<h1>{heading}</h1>
<p>{message}</p>
{footer}
</div>
<script>
{script}
</script>
</body>
</html>"#,
            message = html_escape(self.message),
        )
    }
}

/// Render the success page.
#[must_use]
pub fn success_page() -> String {
    Page::success().render()
}

/// Render an error page for `message`.
#[must_use]
pub fn error_page(message: &str) -> String {
    Page::error(message).render()
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
