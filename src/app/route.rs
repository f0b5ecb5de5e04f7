// SPDX-License-Identifier: MPL-2.0
//! Static path-to-page table.

/// Pages reachable from the navbar, footer and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Signup,
    Login,
    JoinForm,
    About,
    Services,
    Testimonials,
    Contact,
    Blog,
}

impl Route {
    /// Links shown in the navbar, in display order.
    pub const NAV_LINKS: [Route; 7] = [
        Route::Signup,
        Route::Login,
        Route::Blog,
        Route::About,
        Route::Services,
        Route::Testimonials,
        Route::Contact,
    ];

    /// Exact-match lookup. `/home` is an alias of `/`. A trailing slash is
    /// tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        match normalized {
            "/" | "/home" => Some(Route::Home),
            "/signup" => Some(Route::Signup),
            "/login" => Some(Route::Login),
            "/join-form" => Some(Route::JoinForm),
            "/about" => Some(Route::About),
            "/services" => Some(Route::Services),
            "/testimonials" => Some(Route::Testimonials),
            "/contact" => Some(Route::Contact),
            "/blog" => Some(Route::Blog),
            _ => None,
        }
    }

    /// Like [`from_path`](Self::from_path) but unknown paths land on home.
    #[must_use]
    pub fn resolve(path: &str) -> Route {
        Self::from_path(path).unwrap_or_else(|| {
            tracing::debug!(path, "unknown route, showing home");
            Route::Home
        })
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Signup => "/signup",
            Route::Login => "/login",
            Route::JoinForm => "/join-form",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Testimonials => "/testimonials",
            Route::Contact => "/contact",
            Route::Blog => "/blog",
        }
    }

    /// i18n key of the navbar label and window title suffix.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Route::Home => "route-home",
            Route::Signup => "route-signup",
            Route::Login => "route-login",
            Route::JoinForm => "route-join-form",
            Route::About => "route-about",
            Route::Services => "route-services",
            Route::Testimonials => "route-testimonials",
            Route::Contact => "route-contact",
            Route::Blog => "route-blog",
        }
    }

    /// Whether this page embeds the testimonials section. Entering such a
    /// route mounts the section; leaving it unmounts.
    #[must_use]
    pub fn shows_testimonials(self) -> bool {
        matches!(self, Route::Home | Route::Testimonials)
    }

    /// Whether this page embeds the services showcase.
    #[must_use]
    pub fn shows_services(self) -> bool {
        matches!(self, Route::Home | Route::Services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 9] = [
        Route::Home,
        Route::Signup,
        Route::Login,
        Route::JoinForm,
        Route::About,
        Route::Services,
        Route::Testimonials,
        Route::Contact,
        Route::Blog,
    ];

    #[test]
    fn every_route_resolves_from_its_own_path() {
        for route in ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn home_alias_and_trailing_slash() {
        assert_eq!(Route::from_path("/home"), Some(Route::Home));
        assert_eq!(Route::from_path("/contact/"), Some(Route::Contact));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(Route::from_path("/pricing"), None);
        assert_eq!(Route::resolve("/pricing"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn only_home_and_testimonials_mount_the_carousel() {
        let mounting: Vec<_> = ALL.into_iter().filter(|r| r.shows_testimonials()).collect();
        assert_eq!(mounting, vec![Route::Home, Route::Testimonials]);
    }
}
