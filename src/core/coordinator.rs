use crate::domain::model::{AnalysisOptions, CalculationRequest, Card, HandAnalysis};
use crate::domain::ports::AnalysisService;
use crate::utils::error::{AssistError, Result};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// What the presentation layer renders: the last accepted analysis, whether
/// a request is in flight, and the last user-visible failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisView {
    pub result: Option<HandAnalysis>,
    pub loading: bool,
    pub error: Option<String>,
}

struct CoordinatorState {
    /// Monotonic token minted once per issued request. A response is applied
    /// only while its token is still the newest one; everything older is
    /// provably stale regardless of arrival order.
    current_token: u64,
    /// Cancel handle for the in-flight request. Advisory: it stops the
    /// transport early, but the token fence is what guarantees correctness.
    cancel: Option<oneshot::Sender<()>>,
    view: AnalysisView,
}

/// Turns card/option snapshots into at most one visible outcome: it issues
/// the network call, cancels the superseded one, and fences responses so
/// only the latest request ever updates the [`AnalysisView`].
pub struct RequestCoordinator<S> {
    service: Arc<S>,
    state: Arc<Mutex<CoordinatorState>>,
}

impl<S> Clone for RequestCoordinator<S> {
    fn clone(&self) -> Self {
        RequestCoordinator {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> RequestCoordinator<S> {
    pub fn new(service: Arc<S>) -> RequestCoordinator<S> {
        RequestCoordinator {
            service,
            state: Arc::new(Mutex::new(CoordinatorState {
                current_token: 0,
                cancel: None,
                view: AnalysisView::default(),
            })),
        }
    }

    pub fn view(&self) -> AnalysisView {
        self.state.lock().unwrap().view.clone()
    }

    /// Cancels any in-flight request and returns the view to idle. The token
    /// bump makes a response that already left the service side stale.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        if let Some(cancel) = state.cancel.take() {
            let _ = cancel.send(());
        }
        state.current_token += 1;
        state.view = AnalysisView::default();
    }

    fn apply(state: &Mutex<CoordinatorState>, token: u64, outcome: Result<HandAnalysis>) {
        let mut state = state.lock().unwrap();
        if token != state.current_token {
            tracing::trace!(
                token,
                current = state.current_token,
                "{}",
                AssistError::Superseded
            );
            return;
        }
        match outcome {
            Ok(mut analysis) => {
                analysis.timestamp = Utc::now().timestamp_millis();
                state.view.result = Some(analysis);
                state.view.loading = false;
            }
            Err(err) if err.is_silent() => {
                tracing::trace!("in-flight request dropped: {}", err);
            }
            Err(err) => {
                tracing::warn!("analysis request failed: {}", err);
                state.view.error = Some(err.to_string());
                state.view.result = None;
                state.view.loading = false;
            }
        }
    }
}

impl<S: AnalysisService + 'static> RequestCoordinator<S> {
    /// Issues an analysis request for the given snapshot, superseding any
    /// request still in flight.
    ///
    /// With fewer than 2 pocket cards there is nothing to analyze: the view
    /// is cleared and no request goes out. Otherwise the request carries the
    /// first 2 pocket cards (excess truncated), the whole board, and the
    /// clamped options.
    pub fn submit(&self, hand: &[Card], board: &[Card], options: AnalysisOptions) {
        let mut state = self.state.lock().unwrap();

        if let Some(cancel) = state.cancel.take() {
            let _ = cancel.send(());
        }

        if hand.len() < 2 {
            tracing::debug!(
                "only {} pocket card(s) placed, skipping analysis",
                hand.len()
            );
            state.current_token += 1;
            state.view = AnalysisView::default();
            return;
        }

        state.current_token += 1;
        let token = state.current_token;
        state.view.loading = true;
        state.view.error = None;

        let (cancel_tx, cancel_rx) = oneshot::channel();
        state.cancel = Some(cancel_tx);
        drop(state);

        let request = CalculationRequest::new(hand, board, &options);
        tracing::debug!(
            token,
            pocket = request.pocket_cards.len(),
            community = request.community_cards.len(),
            "submitting analysis request"
        );

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = cancel_rx => Err(AssistError::Cancelled),
                outcome = service.analyze(&request) => outcome,
            };
            Self::apply(&state, token, outcome);
        });
    }
}
