use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};

use super::submission::{LeadSubmission, LeadValidationError};
use super::transport::LeadTransport;
use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastResult {
    #[default]
    None,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
    /// Rejected before any request was made.
    Invalid(LeadValidationError),
    /// Another submission from this form is still in flight.
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub email: String,
    pub country: String,
    pub submitting: bool,
    pub last_result: LastResult,
    pub invalid: Option<LeadValidationError>,
}

/// State and submission logic behind one lead capture form.
///
/// Each rendered form owns its own `LeadForm`, so the modal and the inline
/// form never share fields or the in-flight guard. All mutation goes through
/// `&self` because a submission holds a borrow of the form across the network
/// call while the view keeps editing and reading it.
pub struct LeadForm<T> {
    endpoint: String,
    transport: T,
    state: RefCell<FormState>,
    on_change: Option<Rc<dyn Fn()>>,
}

impl<T: LeadTransport> LeadForm<T> {
    pub fn new(config: &SiteConfig, transport: T) -> Self {
        Self {
            endpoint: config.leads_endpoint(),
            transport,
            state: RefCell::new(FormState::default()),
            on_change: None,
        }
    }

    /// Called after every state change, once no borrow of the state is held.
    pub fn on_change(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().submitting
    }

    pub fn set_first_name(&self, value: impl Into<String>) {
        self.edit(|state| state.first_name = value.into());
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.edit(|state| state.email = value.into());
    }

    pub fn set_country(&self, value: impl Into<String>) {
        self.edit(|state| state.country = value.into());
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let parsed = {
            let state = self.state.borrow();
            if state.submitting {
                return SubmitOutcome::Busy;
            }
            LeadSubmission::parse(&state.first_name, &state.email, &state.country)
        };

        let lead = match parsed {
            Ok(lead) => lead,
            Err(e) => {
                self.state.borrow_mut().invalid = Some(e);
                self.notify();
                return SubmitOutcome::Invalid(e);
            }
        };

        let _guard = SubmittingGuard::engage(self);

        info!("Submitting lead to {}", self.endpoint);
        let outcome = match self.transport.post_lead(&self.endpoint, &lead).await {
            Ok(response) if response.is_success() => {
                match serde_json::from_str::<serde_json::Value>(&response.body) {
                    Ok(_) => {
                        info!("Lead accepted with status {}", response.status);
                        debug!("Lead response body: {} bytes", response.body.len());
                        SubmitOutcome::Success
                    }
                    Err(e) => {
                        warn!("Lead response with status {} is not JSON: {}", response.status, e);
                        SubmitOutcome::Failure
                    }
                }
            }
            Ok(response) => {
                warn!("Lead rejected with status {}", response.status);
                SubmitOutcome::Failure
            }
            Err(e) => {
                warn!("Lead submission failed: {}", e);
                SubmitOutcome::Failure
            }
        };

        {
            let mut state = self.state.borrow_mut();
            match outcome {
                SubmitOutcome::Success => {
                    state.last_result = LastResult::Success;
                    state.first_name.clear();
                    state.email.clear();
                    state.country.clear();
                }
                _ => state.last_result = LastResult::Failure,
            }
        }

        outcome
    }

    fn edit(&self, change: impl FnOnce(&mut FormState)) {
        {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.invalid = None;
        }
        self.notify();
    }

    fn notify(&self) {
        if let Some(callback) = &self.on_change {
            callback();
        }
    }
}

/// Holds `submitting` for the lifetime of one request. Releasing it on drop
/// covers normal completion as well as a dropped or panicking future.
struct SubmittingGuard<'a, T: LeadTransport> {
    form: &'a LeadForm<T>,
}

impl<'a, T: LeadTransport> SubmittingGuard<'a, T> {
    fn engage(form: &'a LeadForm<T>) -> Self {
        {
            let mut state = form.state.borrow_mut();
            state.submitting = true;
            state.last_result = LastResult::None;
            state.invalid = None;
        }
        form.notify();
        Self { form }
    }
}

impl<T: LeadTransport> Drop for SubmittingGuard<'_, T> {
    fn drop(&mut self) {
        match self.form.state.try_borrow_mut() {
            Ok(mut state) => state.submitting = false,
            Err(e) => warn!("Could not release submit guard, form stays locked: {}", e),
        }
        self.form.notify();
    }
}
