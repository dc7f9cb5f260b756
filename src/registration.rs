//! Registration form data and the submission gateway
//!
//! There is no server: the browser gateway waits a fixed delay and always
//! succeeds. The gateway is a trait so tests can resolve immediately or fail.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::RegistrationError;

/// Fields of `#registration-form`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_year: String,
}

impl RegistrationForm {
    pub fn new(first_name: &str, last_name: &str, email: &str, birth_year: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            birth_year: birth_year.to_string(),
        }
    }
}

/// Submission state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting on the gateway; the submit button is disabled
    Submitting,
}

/// A validated submission waiting on the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRegistration {
    form: RegistrationForm,
}

impl PendingRegistration {
    pub(crate) fn new(form: RegistrationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }
}

/// Where a validated registration is sent
pub trait RegistrationGateway {
    fn register(
        &self,
        form: &RegistrationForm,
    ) -> impl Future<Output = Result<(), RegistrationError>>;
}

/// Stand-in for a server round trip: waits, then accepts
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelay {
    pub delay_ms: u32,
}

impl SimulatedDelay {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl RegistrationGateway for SimulatedDelay {
    #[cfg(target_arch = "wasm32")]
    async fn register(&self, form: &RegistrationForm) -> Result<(), RegistrationError> {
        log::info!("Registering {} ({}ms simulated delay)", form.first_name, self.delay_ms);
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }

    /// Native builds have no timer runtime; resolve immediately
    #[cfg(not(target_arch = "wasm32"))]
    async fn register(&self, form: &RegistrationForm) -> Result<(), RegistrationError> {
        log::info!("Registering {} (delay of {}ms skipped)", form.first_name, self.delay_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_names_match_markup() {
        let form = RegistrationForm::new("Louise", "Dupont", "louise@example.com", "1990");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["firstName"], "Louise");
        assert_eq!(json["lastName"], "Dupont");
        assert_eq!(json["birthYear"], "1990");
    }

    #[test]
    fn test_native_simulated_delay_accepts() {
        let form = RegistrationForm::new("Louis", "Martin", "louis@example.com", "1985");
        let result = futures::executor::block_on(SimulatedDelay::new(2000).register(&form));
        assert_eq!(result, Ok(()));
    }
}
