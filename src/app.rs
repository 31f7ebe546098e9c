//! Application state management for the Eshtrak client.
//!
//! This module contains the core `App` struct that manages all application
//! state: the current route, form state, fetched data, the session store,
//! and background task coordination.

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::{ApiClient, ApiError, SignupRequest};
use crate::config::Config;
use crate::models::{
    CheckoutMode, CheckoutSession, Plan, Profile, ProfileUpdate, SubscriptionStatus,
};
use crate::session::{AuthStatus, FileStorage, SessionStore};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// 32 is plenty for the handful of fetches a screen triggers.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for email input (RFC 5321 limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length for name fields, matching the backend column size.
pub const MAX_NAME_LENGTH: usize = 150;

/// Minimum password length enforced before submission.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ============================================================================
// Navigation
// ============================================================================

/// Screens of the application. `Payment` carries the plan being purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Signup,
    Login,
    Plans,
    Payment(i64),
    Success,
    Cancel,
    Dashboard,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Signup => "Sign Up",
            Route::Login => "Login",
            Route::Plans => "Plans",
            Route::Payment(_) => "Payment",
            Route::Success => "Payment Complete",
            Route::Cancel => "Payment Canceled",
            Route::Dashboard => "Dashboard",
        }
    }

    /// Whether this screen needs an authenticated session.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Payment(_) | Route::Success | Route::Cancel | Route::Dashboard
        )
    }
}

/// What the route guard decided for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Enter the requested screen
    Enter,
    /// Session state unknown (not yet hydrated) - hold the request
    Wait,
    /// Not logged in - show the login screen first
    Login,
}

/// Decide whether a route can be entered under the given auth status.
///
/// `Unknown` always holds the request rather than bouncing to login; the
/// persisted session may still be loading.
pub fn route_guard(route: Route, status: AuthStatus) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Enter;
    }
    match status {
        AuthStatus::Unknown => GuardDecision::Wait,
        AuthStatus::Authenticated => GuardDecision::Enter,
        AuthStatus::Unauthenticated => GuardDecision::Login,
    }
}

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state (overlays on top of the current route)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Button,
}

impl LoginField {
    pub fn next(&self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Button,
            LoginField::Button => LoginField::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            LoginField::Email => LoginField::Button,
            LoginField::Password => LoginField::Email,
            LoginField::Button => LoginField::Password,
        }
    }
}

/// Signup form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
    Password2,
    Button,
}

impl SignupField {
    pub fn next(&self) -> Self {
        match self {
            SignupField::FirstName => SignupField::LastName,
            SignupField::LastName => SignupField::Email,
            SignupField::Email => SignupField::Password,
            SignupField::Password => SignupField::Password2,
            SignupField::Password2 => SignupField::Button,
            SignupField::Button => SignupField::FirstName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SignupField::FirstName => SignupField::Button,
            SignupField::LastName => SignupField::FirstName,
            SignupField::Email => SignupField::LastName,
            SignupField::Password => SignupField::Email,
            SignupField::Password2 => SignupField::Password,
            SignupField::Button => SignupField::Password2,
        }
    }
}

/// Profile edit focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    FirstName,
    LastName,
}

impl EditField {
    pub fn toggle(&self) -> Self {
        match self {
            EditField::FirstName => EditField::LastName,
            EditField::LastName => EditField::FirstName,
        }
    }
}

// ============================================================================
// Form Validation
// ============================================================================

/// Per-field messages for the signup form, surfaced inline next to each
/// field rather than as one lump.
#[derive(Debug, Clone, Default)]
pub struct SignupErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.password2.is_none()
    }
}

/// Minimal email shape check: something@domain.tld, no whitespace.
/// The backend is the real validator; this only catches obvious typos
/// before a round trip.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate the signup form fields before submission.
pub fn validate_signup(form: &SignupRequest) -> SignupErrors {
    let mut errors = SignupErrors::default();

    if form.first_name.trim().is_empty() {
        errors.first_name = Some("First name is required".to_string());
    }
    if form.last_name.trim().is_empty() {
        errors.last_name = Some("Last name is required".to_string());
    }
    if !is_valid_email(&form.email) {
        errors.email = Some("Invalid email address".to_string());
    }
    if form.password.len() < MIN_PASSWORD_LENGTH {
        errors.password = Some(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    if form.password2 != form.password {
        errors.password2 = Some("Passwords don't match".to_string());
    }

    errors
}

pub fn can_add_email_char(current: &str) -> bool {
    current.len() < MAX_EMAIL_LENGTH
}

pub fn can_add_password_char(current: &str) -> bool {
    current.len() < MAX_PASSWORD_LENGTH
}

pub fn can_add_name_char(current: &str) -> bool {
    current.len() < MAX_NAME_LENGTH
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Result types from background fetch tasks, sent through an MPSC channel
/// back to the main loop.
enum FetchResult {
    /// Plan catalog fetched successfully
    Plans(Vec<Plan>),
    /// Plan catalog fetch failed
    PlansFailed(String),
    /// Profile and subscription fetched together
    Dashboard(Profile, SubscriptionStatus),
    /// Dashboard fetch failed
    DashboardFailed(String),
    /// An authenticated fetch came back 401 - the session is gone
    SessionExpired,
}

/// Whether an error chain bottoms out in a 401 from the API.
fn is_unauthorized(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized))
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub session: SessionStore,
    pub api: ApiClient,

    // Navigation
    pub route: Route,
    pub state: AppState,
    pending_route: Option<Route>,

    // Login form state
    pub login_email: String,
    pub login_password: String,
    pub login_focus: LoginField,
    pub login_error: Option<String>,

    // Signup form state
    pub signup: SignupRequest,
    pub signup_focus: SignupField,
    pub signup_errors: SignupErrors,
    pub signup_error: Option<String>,

    // Plans screen
    pub plans: Vec<Plan>,
    pub plans_loading: bool,
    pub plans_error: Option<String>,
    pub plan_selection: usize,

    // Payment screen
    pub payment_plan: Option<Plan>,
    pub checkout_mode: CheckoutMode,
    pub checkout: Option<CheckoutSession>,
    pub checkout_loading: bool,
    pub checkout_error: Option<String>,

    // Dashboard screen
    pub profile: Option<Profile>,
    pub subscription: Option<SubscriptionStatus>,
    pub dashboard_loading: bool,
    pub dashboard_error: Option<String>,
    pub editing_profile: bool,
    pub edit_first_name: String,
    pub edit_last_name: String,
    pub edit_focus: EditField,

    // Background task channel
    fetch_rx: mpsc::Receiver<FetchResult>,
    fetch_tx: mpsc::Sender<FetchResult>,

    // Flag to trigger a dashboard load from the main loop (entering the
    // route is synchronous, the load is not)
    dashboard_load_requested: bool,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        debug!("App::new() starting");
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let api = ApiClient::new(&config.api_base_url())?;

        let data_dir = config.data_dir().unwrap_or_else(|_| PathBuf::from("./data"));
        debug!(?data_dir, "Session storage directory configured");
        let session = SessionStore::new(Box::new(FileStorage::new(data_dir)));

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let login_email = std::env::var("ESHTRAK_EMAIL")
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();
        let login_focus = if login_email.is_empty() {
            LoginField::Email
        } else {
            LoginField::Password
        };

        Ok(Self {
            config,
            session,
            api,

            route: Route::Home,
            state: AppState::Normal,
            pending_route: None,

            login_email,
            login_password: String::new(),
            login_focus,
            login_error: None,

            signup: SignupRequest::default(),
            signup_focus: SignupField::FirstName,
            signup_errors: SignupErrors::default(),
            signup_error: None,

            plans: Vec::new(),
            plans_loading: false,
            plans_error: None,
            plan_selection: 0,

            payment_plan: None,
            checkout_mode: CheckoutMode::Subscription,
            checkout: None,
            checkout_loading: false,
            checkout_error: None,

            profile: None,
            subscription: None,
            dashboard_loading: false,
            dashboard_error: None,
            editing_profile: false,
            edit_first_name: String::new(),
            edit_last_name: String::new(),
            edit_focus: EditField::FirstName,

            fetch_rx: rx,
            fetch_tx: tx,

            dashboard_load_requested: false,

            status_message: None,
        })
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Load the persisted session and hand any restored token to the API
    /// client. Called once at startup, before the main loop.
    pub fn hydrate_session(&mut self) {
        self.session.hydrate();
        if let Some(token) = self.session.access_token() {
            self.api.set_token(token.to_string());
        }
        self.resolve_pending_route();
    }

    /// Proactively refresh a stale restored token so the first
    /// authenticated screen does not stall on it.
    pub async fn restore_session(&mut self) {
        if self.session.access_token().is_none() {
            return;
        }
        if self.ensure_authenticated().await {
            info!("Session restored");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.status() == AuthStatus::Authenticated
    }

    /// Make sure a usable access token is attached to the API client,
    /// refreshing if needed. On failure the session is already cleared;
    /// this routes the user to login.
    async fn ensure_authenticated(&mut self) -> bool {
        if self.session.ensure_valid_token(&self.api).await {
            // The refresh may have minted a new token
            if let Some(token) = self.session.access_token() {
                self.api.set_token(token.to_string());
            }
            true
        } else {
            self.handle_session_expired();
            false
        }
    }

    fn handle_session_expired(&mut self) {
        self.api.clear_token();
        if self.route.requires_auth() {
            self.pending_route = Some(self.route);
        }
        self.status_message = Some("Session expired. Please log in again.".to_string());
        self.enter(Route::Login);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a route, applying the auth guard.
    ///
    /// A protected route requested before hydration is held, not rejected;
    /// one requested while logged out is held and the login screen shown,
    /// so a successful login lands where the user was headed.
    pub fn navigate(&mut self, route: Route) {
        match route_guard(route, self.session.status()) {
            GuardDecision::Enter => self.enter(route),
            GuardDecision::Wait => {
                debug!(?route, "Holding navigation until session hydrates");
                self.pending_route = Some(route);
            }
            GuardDecision::Login => {
                self.pending_route = Some(route);
                self.status_message = Some("Please log in to continue".to_string());
                self.enter(Route::Login);
            }
        }
    }

    /// Re-attempt a navigation held by the guard, once the session state is
    /// definitive.
    pub fn resolve_pending_route(&mut self) {
        if let Some(route) = self.pending_route {
            if route_guard(route, self.session.status()) == GuardDecision::Enter {
                self.pending_route = None;
                self.enter(route);
            }
        }
    }

    /// Enter a route and kick off whatever data it needs.
    fn enter(&mut self, route: Route) {
        self.route = route;
        match route {
            Route::Plans => self.load_plans(),
            Route::Dashboard => {
                // Stale data from a previous visit is shown while reloading
                self.editing_profile = false;
                self.dashboard_load_requested = true;
            }
            Route::Payment(_) => {
                self.checkout = None;
                self.checkout_error = None;
            }
            Route::Login => {
                self.login_error = None;
            }
            _ => {}
        }
    }

    /// Navigate to the payment screen for the currently selected plan.
    pub fn subscribe_to_selected_plan(&mut self) {
        let Some(plan) = self.plans.get(self.plan_selection).cloned() else {
            return;
        };
        self.payment_plan = Some(plan.clone());
        self.navigate(Route::Payment(plan.id));
    }

    // =========================================================================
    // Authentication flows
    // =========================================================================

    /// Attempt login with the credentials from the login form
    pub async fn attempt_login(&mut self) {
        let email = self.login_email.trim().to_string();
        let password = self.login_password.clone();

        if email.is_empty() || password.is_empty() {
            self.login_error = Some("Email and password are required".to_string());
            return;
        }

        self.login_error = None;

        match self.api.login(&email, &password).await {
            Ok(response) => {
                self.config.last_email = Some(email);
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                self.api.set_token(response.access.clone());
                self.session
                    .login(response.access, response.refresh, response.user);

                self.login_password.clear();
                self.status_message = None;
                info!("Login successful");

                let target = self.pending_route.take().unwrap_or(Route::Dashboard);
                self.enter(target);
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.login_error = Some(Self::friendly_auth_error(&e));
            }
        }
    }

    /// Validate and submit the signup form
    pub async fn attempt_signup(&mut self) {
        self.signup_errors = validate_signup(&self.signup);
        if !self.signup_errors.is_empty() {
            return;
        }

        self.signup_error = None;

        match self.api.signup(&self.signup).await {
            Ok(response) => {
                info!(email = %response.email, "Signup successful");
                self.login_email = response.email;
                self.signup = SignupRequest::default();
                self.signup_focus = SignupField::FirstName;
                self.status_message =
                    Some("Account created. Check your email, then log in.".to_string());
                self.enter(Route::Login);
            }
            Err(e) => {
                error!(error = %e, "Signup failed");
                self.signup_error = Some(Self::friendly_auth_error(&e));
            }
        }
    }

    /// Clear the local session and best-effort revoke the refresh token
    /// server-side. The local state is cleared regardless of the remote
    /// call's outcome.
    pub fn logout(&mut self) {
        if let Some(refresh) = self.session.refresh_token() {
            let api = self.api.clone();
            let refresh = refresh.to_string();
            tokio::spawn(async move {
                if let Err(e) = api.logout(&refresh).await {
                    debug!(error = %e, "Remote logout failed (ignored)");
                }
            });
        }

        self.session.logout();
        self.api.clear_token();
        self.profile = None;
        self.subscription = None;
        self.status_message = Some("Logged out".to_string());
        info!("Logged out");
        self.enter(Route::Home);
    }

    /// Map an auth-endpoint failure to a message fit for the form.
    fn friendly_auth_error(e: &anyhow::Error) -> String {
        if is_unauthorized(e) {
            return "Invalid email or password".to_string();
        }
        match e.downcast_ref::<ApiError>() {
            Some(ApiError::BadRequest(msg)) => msg.clone(),
            _ => {
                let text = e.to_string().to_lowercase();
                if text.contains("network") || text.contains("connect") {
                    "Unable to connect to server. Check your internet connection.".to_string()
                } else if text.contains("timeout") {
                    "Connection timed out. Please try again.".to_string()
                } else {
                    format!("Request failed: {}", e)
                }
            }
        }
    }

    // =========================================================================
    // Plans
    // =========================================================================

    /// Fetch the plan catalog in the background. Unauthenticated.
    pub fn load_plans(&mut self) {
        self.plans_loading = true;
        self.plans_error = None;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            match api.fetch_plans().await {
                Ok(plans) => Self::send_result(&tx, FetchResult::Plans(plans)).await,
                Err(e) => {
                    error!(error = %e, "Plans fetch failed");
                    Self::send_result(&tx, FetchResult::PlansFailed(e.to_string())).await;
                }
            }
        });
    }

    pub fn select_next_plan(&mut self) {
        if !self.plans.is_empty() {
            self.plan_selection = (self.plan_selection + 1) % self.plans.len();
        }
    }

    pub fn select_prev_plan(&mut self) {
        if !self.plans.is_empty() {
            self.plan_selection = self
                .plan_selection
                .checked_sub(1)
                .unwrap_or(self.plans.len() - 1);
        }
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Request a (re)load of the dashboard data on the next loop tick.
    pub fn request_dashboard_load(&mut self) {
        self.dashboard_load_requested = true;
    }

    /// Run loads that were requested from synchronous navigation code.
    /// Called once per main-loop iteration.
    pub async fn poll_deferred_loads(&mut self) {
        if self.dashboard_load_requested {
            self.dashboard_load_requested = false;
            self.load_dashboard().await;
        }
    }

    /// Fetch profile and subscription concurrently in the background.
    pub async fn load_dashboard(&mut self) {
        if !self.ensure_authenticated().await {
            return;
        }

        self.dashboard_loading = true;
        self.dashboard_error = None;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let (profile_res, subscription_res) =
                tokio::join!(api.fetch_profile(), api.fetch_subscription());

            match (profile_res, subscription_res) {
                (Ok(profile), Ok(subscription)) => {
                    Self::send_result(&tx, FetchResult::Dashboard(profile, subscription)).await;
                }
                (Err(e), _) | (_, Err(e)) => {
                    if is_unauthorized(&e) {
                        Self::send_result(&tx, FetchResult::SessionExpired).await;
                    } else {
                        error!(error = %e, "Dashboard fetch failed");
                        Self::send_result(&tx, FetchResult::DashboardFailed(e.to_string())).await;
                    }
                }
            }
        });
    }

    /// Begin inline profile editing with the current values.
    pub fn start_profile_edit(&mut self) {
        let Some(ref profile) = self.profile else {
            return;
        };
        self.edit_first_name = profile.first_name.clone();
        self.edit_last_name = profile.last_name.clone();
        self.edit_focus = EditField::FirstName;
        self.editing_profile = true;
    }

    pub fn cancel_profile_edit(&mut self) {
        self.editing_profile = false;
    }

    /// Submit the edited profile fields.
    pub async fn save_profile(&mut self) {
        if !self.ensure_authenticated().await {
            return;
        }

        let update = ProfileUpdate {
            first_name: self.edit_first_name.trim().to_string(),
            last_name: self.edit_last_name.trim().to_string(),
        };

        match self.api.update_profile(&update).await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.editing_profile = false;
                self.status_message = Some("Profile updated".to_string());
            }
            Err(e) => {
                if is_unauthorized(&e) {
                    self.handle_session_expired();
                } else {
                    error!(error = %e, "Profile update failed");
                    self.dashboard_error = Some(format!("Could not save profile: {}", e));
                    self.editing_profile = false;
                }
            }
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Create a hosted-checkout session for the plan on the payment screen.
    pub async fn start_checkout(&mut self) {
        let Route::Payment(plan_id) = self.route else {
            return;
        };
        if self.checkout_loading {
            return;
        }
        if !self.ensure_authenticated().await {
            return;
        }

        self.checkout_loading = true;
        self.checkout_error = None;

        let result = self
            .api
            .create_checkout_session(plan_id, self.checkout_mode)
            .await;
        self.checkout_loading = false;

        match result {
            Ok(session) => {
                info!(session_id = %session.session_id, "Checkout session created");
                self.checkout = Some(session);
            }
            Err(e) => {
                if is_unauthorized(&e) {
                    self.handle_session_expired();
                } else {
                    // Worded as a payment problem, not an auth problem: the
                    // remedy offered is retry, not re-login.
                    error!(error = %e, "Checkout session creation failed");
                    self.checkout_error =
                        Some(format!("Payment setup failed: {}. Press Enter to retry.", e));
                }
            }
        }
    }

    pub fn toggle_checkout_mode(&mut self) {
        if self.checkout.is_none() {
            self.checkout_mode = self.checkout_mode.toggle();
        }
    }

    // =========================================================================
    // Background Task Handling
    // =========================================================================

    /// Helper to send fetch results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<FetchResult>, result: FetchResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send fetch result - channel closed");
        }
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.fetch_rx.try_recv() {
            results.push(result);
        }

        for result in results {
            self.process_fetch_result(result);
        }
    }

    fn process_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Plans(plans) => {
                if self.plan_selection >= plans.len() {
                    self.plan_selection = 0;
                }
                self.plans = plans;
                self.plans_loading = false;
            }
            FetchResult::PlansFailed(msg) => {
                self.plans_loading = false;
                self.plans_error = Some(msg);
            }
            FetchResult::Dashboard(profile, subscription) => {
                self.profile = Some(profile);
                self.subscription = Some(subscription);
                self.dashboard_loading = false;
            }
            FetchResult::DashboardFailed(msg) => {
                self.dashboard_loading = false;
                self.dashboard_error = Some(msg);
            }
            FetchResult::SessionExpired => {
                self.session.logout();
                self.dashboard_loading = false;
                self.handle_session_expired();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_guard_never_treats_unknown_as_logged_out() {
        // Protected routes wait while the session is unknown
        assert_eq!(
            route_guard(Route::Dashboard, AuthStatus::Unknown),
            GuardDecision::Wait
        );
        assert_eq!(
            route_guard(Route::Payment(2), AuthStatus::Unknown),
            GuardDecision::Wait
        );

        // And bounce to login only once the state is definitive
        assert_eq!(
            route_guard(Route::Dashboard, AuthStatus::Unauthenticated),
            GuardDecision::Login
        );
        assert_eq!(
            route_guard(Route::Dashboard, AuthStatus::Authenticated),
            GuardDecision::Enter
        );
    }

    #[test]
    fn test_route_guard_lets_public_routes_through() {
        for status in [
            AuthStatus::Unknown,
            AuthStatus::Authenticated,
            AuthStatus::Unauthenticated,
        ] {
            assert_eq!(route_guard(Route::Home, status), GuardDecision::Enter);
            assert_eq!(route_guard(Route::Plans, status), GuardDecision::Enter);
            assert_eq!(route_guard(Route::Login, status), GuardDecision::Enter);
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("sam@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sam"));
        assert!(!is_valid_email("sam@nodot"));
        assert!(!is_valid_email("sam@.com"));
        assert!(!is_valid_email("sam @example.com"));
    }

    #[test]
    fn test_validate_signup() {
        let valid = SignupRequest {
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            email: "sam@example.com".to_string(),
            password: "hunter22".to_string(),
            password2: "hunter22".to_string(),
        };
        assert!(validate_signup(&valid).is_empty());

        let empty = SignupRequest::default();
        let errors = validate_signup(&empty);
        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());

        let mismatched = SignupRequest {
            password2: "different".to_string(),
            ..valid.clone()
        };
        assert!(validate_signup(&mismatched).password2.is_some());

        let short = SignupRequest {
            password: "abc".to_string(),
            password2: "abc".to_string(),
            ..valid
        };
        assert!(validate_signup(&short).password.is_some());
    }
}
