//! TripSense API Routes
//!
//! - /generate-itinerary - new trip from preferences
//! - /modify-itinerary - whole-itinerary replacement from a change request
//! - /optimize-budget - cost-reduced replacement toward a target budget
//! - /plan-b - alternative activities for one unviable activity

pub mod budget;
pub mod itinerary;
pub mod plan_b;
pub mod swagger;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tripsense::{DomainError, GenerationOptions, LlmProvider};

    use crate::AppState;

    /// Canned provider that records how often it was invoked.
    pub struct MockProvider {
        response: Result<String, String>,
        calls: AtomicUsize,
        pub last_temperature: std::sync::Mutex<Option<f32>>,
    }

    impl MockProvider {
        pub fn returning(response: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(response.to_string()),
                calls: AtomicUsize::new(0),
                last_temperature: std::sync::Mutex::new(None),
            })
        }

        pub fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_temperature: std::sync::Mutex::new(None),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        async fn generate(
            &self,
            _prompt: &str,
            options: &GenerationOptions,
        ) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_temperature.lock().unwrap() = Some(options.temperature);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(DomainError::provider(message.clone())),
            }
        }

        fn provider_name(&self) -> &str {
            "mock"
        }

        fn model_id(&self) -> &str {
            "mock-1"
        }
    }

    pub fn state_with(provider: Arc<MockProvider>) -> AppState {
        AppState { provider }
    }
}
