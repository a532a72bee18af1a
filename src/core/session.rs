use crate::core::cards::{CardRegistry, Zone};
use crate::core::coordinator::{AnalysisView, RequestCoordinator};
use crate::core::debounce::DebounceGate;
use crate::core::options::OptionsUpdate;
use crate::domain::model::{AnalysisOptions, Card};
use crate::domain::ports::AnalysisService;
use crate::utils::error::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Inputs {
    cards: CardRegistry,
    options: AnalysisOptions,
}

/// Wires the pieces together: every card or option edit notifies the
/// debounce gate, and the gate's fire snapshots the inputs as they are at
/// that moment and hands them to the coordinator. No other logic lives here.
pub struct AnalysisSession<S> {
    inputs: Arc<Mutex<Inputs>>,
    gate: DebounceGate,
    coordinator: RequestCoordinator<S>,
}

impl<S: AnalysisService + 'static> AnalysisSession<S> {
    pub fn new(service: Arc<S>, quiet_period: Duration) -> AnalysisSession<S> {
        AnalysisSession {
            inputs: Arc::new(Mutex::new(Inputs {
                cards: CardRegistry::new(),
                options: AnalysisOptions::default(),
            })),
            gate: DebounceGate::new(quiet_period),
            coordinator: RequestCoordinator::new(service),
        }
    }

    pub fn set_hand_card(&mut self, index: usize, slot: Option<Card>) {
        self.inputs
            .lock()
            .unwrap()
            .cards
            .set_card(Zone::Hand, index, slot);
        self.schedule();
    }

    pub fn set_board_card(&mut self, index: usize, slot: Option<Card>) {
        self.inputs
            .lock()
            .unwrap()
            .cards
            .set_card(Zone::Board, index, slot);
        self.schedule();
    }

    /// Bulk import. A rejected import leaves the previous cards in place and
    /// schedules nothing.
    pub fn import_cards(&mut self, hand: &[Option<Card>], board: &[Option<Card>]) -> Result<()> {
        self.inputs.lock().unwrap().cards.import(hand, board)?;
        self.schedule();
        Ok(())
    }

    pub fn update_options(&mut self, update: OptionsUpdate) {
        update.apply_to(&mut self.inputs.lock().unwrap().options);
        self.schedule();
    }

    /// Back to the initial state: empty slots, default options, idle view.
    /// Any pending debounce trigger and any in-flight request are dropped.
    pub fn clear_all(&mut self) {
        self.gate.cancel();
        {
            let mut inputs = self.inputs.lock().unwrap();
            inputs.cards.clear();
            inputs.options = AnalysisOptions::default();
        }
        self.coordinator.reset();
    }

    pub fn view(&self) -> AnalysisView {
        self.coordinator.view()
    }

    pub fn hand(&self) -> Vec<Option<Card>> {
        self.inputs.lock().unwrap().cards.hand().to_vec()
    }

    pub fn board(&self) -> Vec<Option<Card>> {
        self.inputs.lock().unwrap().cards.board().to_vec()
    }

    pub fn options(&self) -> AnalysisOptions {
        self.inputs.lock().unwrap().options
    }

    fn schedule(&mut self) {
        let inputs = Arc::clone(&self.inputs);
        let coordinator = self.coordinator.clone();
        self.gate.notify(move || {
            let (hand, board, options) = {
                let inputs = inputs.lock().unwrap();
                (
                    inputs.cards.valid_hand(),
                    inputs.cards.valid_board(),
                    inputs.options,
                )
            };
            coordinator.submit(&hand, &board, options);
        });
    }
}

impl<S> Drop for AnalysisSession<S> {
    fn drop(&mut self) {
        // The gate cancels its own timer on drop; the coordinator still has
        // to drop any in-flight request so nothing fires after teardown.
        self.gate.cancel();
        self.coordinator.reset();
    }
}
