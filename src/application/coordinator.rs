use std::cell::RefCell;
use std::rc::Rc;

use super::use_cases::RequestPredictionUseCase;
use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::PredictionRepository,
    state::{ForecastState, Resolution},
};

/// Somewhere a `ForecastState` lives.
///
/// Returns `None` when the state is gone (e.g. the widget was unmounted
/// while a request was in flight).
pub trait ForecastStore {
    fn with_state_mut<O>(&self, f: impl FnOnce(&mut ForecastState) -> O) -> Option<O>;
}

impl ForecastStore for Rc<RefCell<ForecastState>> {
    fn with_state_mut<O>(&self, f: impl FnOnce(&mut ForecastState) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl ForecastStore for leptos::RwSignal<ForecastState> {
    fn with_state_mut<O>(&self, f: impl FnOnce(&mut ForecastState) -> O) -> Option<O> {
        use leptos::SignalUpdate;
        self.try_update(f)
    }
}

/// Drives one submission through the use case into the state
pub struct ForecastCoordinator<R: PredictionRepository> {
    use_case: RequestPredictionUseCase<R>,
}

impl<R: PredictionRepository> ForecastCoordinator<R> {
    pub fn new(repository: R) -> Self {
        Self {
            use_case: RequestPredictionUseCase::new(repository),
        }
    }

    /// Submit the ticker currently held by the store.
    ///
    /// The error is cleared before the request suspends; the state is
    /// borrowed only around the two transitions, never across the await.
    pub async fn submit<S: ForecastStore>(&self, store: &S) -> Option<Resolution> {
        let (ticket, ticker) = store.with_state_mut(|state| state.begin_submit())?;

        get_logger().debug(
            LogComponent::Application("ForecastCoordinator"),
            &format!("Submission {} for '{}'", ticket, ticker.value()),
        );

        let result = self.use_case.execute(&ticker).await;

        let resolution = store.with_state_mut(|state| state.resolve(ticket, result));
        if resolution.is_none() {
            get_logger().warn(
                LogComponent::Application("ForecastCoordinator"),
                &format!("State disposed before submission {} resolved", ticket),
            );
        }
        resolution
    }
}
