//! In-memory session state: who is signed in and which screen is active.

use shared::domain::{Screen, UserProfile};
use thiserror::Error;
use tracing::info;

/// Login address that is granted the administrator role.
pub const ADMIN_EMAIL: &str = "admin@carspire.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot open the {0} screen while logged out")]
    NotLoggedIn(&'static str),
    #[error("the {0} screen is not a navigation target")]
    Unreachable(&'static str),
}

/// Fields are only changed through [`Session::login`], [`Session::logout`]
/// and [`Session::navigate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    is_admin: bool,
    user: Option<UserProfile>,
    active_screen: Screen,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always succeeds; the email is not validated.
    pub fn login(&mut self, email: &str) {
        let is_admin = email == ADMIN_EMAIL;
        let name = if is_admin { "Admin" } else { "User" };

        self.logged_in = true;
        self.is_admin = is_admin;
        self.user = Some(UserProfile {
            name: name.to_string(),
            email: email.to_string(),
        });
        self.active_screen = Screen::Menu;
        info!(email, is_admin, "session: logged in");
    }

    pub fn logout(&mut self) {
        *self = Self::default();
        info!("session: logged out");
    }

    pub fn navigate(&mut self, screen: Screen) -> Result<(), NavigationError> {
        if screen == Screen::Login {
            return Err(NavigationError::Unreachable(screen.label()));
        }
        if !self.logged_in {
            return Err(NavigationError::NotLoggedIn(screen.label()));
        }
        self.active_screen = screen;
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    /// Screen the renderer should show. Logged-out sessions only ever see login.
    pub fn visible_screen(&self) -> Screen {
        if self.logged_in {
            self.active_screen
        } else {
            Screen::Login
        }
    }

    pub fn avatar_initial(&self) -> char {
        if self.is_admin {
            'A'
        } else {
            'U'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_email_grants_admin_role() {
        let mut session = Session::new();
        session.login("admin@carspire.com");

        assert!(session.is_logged_in());
        assert!(session.is_admin());
        let user = session.user().expect("user");
        assert_eq!(user.name, "Admin");
        assert_eq!(user.email, "admin@carspire.com");
        assert_eq!(session.active_screen(), Screen::Menu);
        assert_eq!(session.avatar_initial(), 'A');
    }

    #[test]
    fn other_emails_are_regular_users() {
        for email in ["x@y.com", "", "Admin@carspire.com", " admin@carspire.com"] {
            let mut session = Session::new();
            session.login(email);

            assert!(session.is_logged_in(), "{email:?}");
            assert!(!session.is_admin(), "{email:?}");
            let user = session.user().expect("user");
            assert_eq!(user.name, "User");
            assert_eq!(user.email, email);
            assert_eq!(session.avatar_initial(), 'U');
        }
    }

    #[test]
    fn relogin_as_regular_user_clears_admin_flag() {
        let mut session = Session::new();
        session.login(ADMIN_EMAIL);
        session.login("x@y.com");
        assert!(!session.is_admin());
    }

    #[test]
    fn logout_restores_initial_shape() {
        let mut session = Session::new();
        session.login(ADMIN_EMAIL);
        session.navigate(Screen::Brief).expect("navigate");

        session.logout();

        assert_eq!(session, Session::new());
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
        assert!(session.user().is_none());
        assert_eq!(session.active_screen(), Screen::Login);
    }

    #[test]
    fn navigation_requires_login() {
        let mut session = Session::new();
        assert_eq!(
            session.navigate(Screen::Brief),
            Err(NavigationError::NotLoggedIn("brief"))
        );
        assert_eq!(session.active_screen(), Screen::Login);
        assert_eq!(session.visible_screen(), Screen::Login);
    }

    #[test]
    fn login_is_not_a_navigation_target() {
        let mut session = Session::new();
        session.login("x@y.com");
        assert_eq!(
            session.navigate(Screen::Login),
            Err(NavigationError::Unreachable("login"))
        );
        assert_eq!(session.active_screen(), Screen::Menu);
    }

    #[test]
    fn menu_and_brief_are_reachable_both_ways() {
        let mut session = Session::new();
        session.login("x@y.com");

        session.navigate(Screen::Brief).expect("to brief");
        assert_eq!(session.visible_screen(), Screen::Brief);

        session.navigate(Screen::Menu).expect("back to menu");
        assert_eq!(session.visible_screen(), Screen::Menu);
    }
}
