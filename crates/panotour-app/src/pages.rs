//! Page shell navigation.
//!
//! Routing is plain in-memory state: a current page value plus the bits
//! the shell needs to decide what to render (auth mode, upload overlay).
//! There is no URL router; views swap on these transitions.

use panotour_models::TourId;

/// The view the shell currently renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// Marketing landing page.
    #[default]
    Home,
    /// Sign-in / sign-up forms.
    Auth,
    /// The user's tour dashboard.
    Dashboard,
    /// The panorama viewer for one tour.
    Viewer(TourId),
    Settings,
    Help,
}

/// Which auth form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

/// In-memory navigation state for the page shell.
#[derive(Debug, Clone, Default)]
pub struct PageShell {
    page: Page,
    auth_mode: AuthMode,
    upload_open: bool,
    authenticated: bool,
}

impl PageShell {
    /// A fresh shell: home page, signed out.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn upload_open(&self) -> bool {
        self.upload_open
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Jumps directly to a page.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// "Get started": dashboard when signed in, auth forms otherwise.
    pub fn get_started(&mut self) {
        self.page = if self.authenticated {
            Page::Dashboard
        } else {
            Page::Auth
        };
    }

    /// Routes to the auth forms.
    pub fn request_sign_in(&mut self) {
        self.page = Page::Auth;
    }

    /// Successful sign-in/up lands on the dashboard.
    pub fn auth_succeeded(&mut self) {
        self.authenticated = true;
        self.page = Page::Dashboard;
    }

    /// Sign-out returns to the landing page.
    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.upload_open = false;
        self.page = Page::Home;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
    }

    pub fn open_upload(&mut self) {
        self.upload_open = true;
    }

    pub fn close_upload(&mut self) {
        self.upload_open = false;
    }

    /// Opens the viewer for a tour.
    pub fn view_tour(&mut self, tour: TourId) {
        self.page = Page::Viewer(tour);
    }
}
