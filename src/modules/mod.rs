pub mod asha;
pub mod auth;
pub mod html;
pub mod i18n;
pub mod phc;
pub mod reports;

pub use html::HtmlTemplate;

/// Name, version and blurb shown on the about pages
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}
