use log::Level;

pub const STUDIO_NAME: &str = "Vaishnavi Khandelwal";
pub const CONTACT_EMAIL: &str = "hello@vaishnavi.design";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/";
pub const INQUIRY_SUBJECT: &str = "Project Inquiry";

/// Scroll offset past which the navigation bar turns solid.
pub const NAV_SOLID_THRESHOLD_PX: f64 = 50.0;

/// Viewports narrower than this use the tap-to-reveal expertise grid.
pub const TOUCH_BREAKPOINT_PX: f64 = 1024.0;

/// Hero background travel once the hero has fully scrolled out of view.
pub const HERO_PARALLAX_MAX_PERCENT: f64 = 25.0;

pub const HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?auto=format&fit=crop&q=80&w=2560";
pub const DESIGNER_PORTRAIT: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=800";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn inquiry_mailto() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(INQUIRY_SUBJECT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_link_encodes_subject() {
        assert_eq!(
            inquiry_mailto(),
            "mailto:hello@vaishnavi.design?subject=Project%20Inquiry"
        );
    }
}
