//! Resort contact details and site navigation

pub const NAME: &str = "Silver Stone Park";
pub const ADDRESS_LINES: [&str; 2] = ["NH-44, Khapri", "Nagpur, Maharashtra 441108"];
pub const PHONE_DISPLAY: &str = "+91 6282427265";
pub const PHONE_HREF: &str = "tel:+916282427265";
pub const EMAIL: &str = "info@silverstonepark.com";
pub const EMAIL_HREF: &str = "mailto:info@silverstonepark.com";
pub const HOURS: [&str; 2] = ["Reception: 24/7", "Dining: 7 AM - 11 PM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 8] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "About", path: "/about" },
    NavLink { name: "Rooms", path: "/rooms" },
    NavLink { name: "Amenities", path: "/amenities" },
    NavLink { name: "Weddings", path: "/weddings" },
    NavLink { name: "Corporate", path: "/corporate" },
    NavLink { name: "Gallery", path: "/gallery" },
    NavLink { name: "Contact", path: "/contact" },
];

/// Exact-match highlighting, so "/" is only active on the home page
pub fn is_active(link: &NavLink, pathname: &str) -> bool {
    link.path == pathname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_link_is_not_active_on_subpages() {
        let home = NAV_LINKS[0];
        assert!(is_active(&home, "/"));
        assert!(!is_active(&home, "/gallery"));
        assert!(is_active(&NAV_LINKS[6], "/gallery"));
    }
}
