use std::sync::Arc;

use tokio::sync::Mutex;
use mp_core::wizard::{RegistrationStateMachine, WizardAction, WizardEvent, WizardStep};
use mp_core::RegistrationDraft;

/// Shared onboarding context containing the wizard machine and dispatch lock.
///
/// This context is shared between `OnboardingOrchestrator` and the tasks it
/// spawns, so late completion events run through the same machine.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `machine`.
/// - `dispatch_lock`: Used only for `dispatch` operations to serialize concurrent calls.
/// - `machine`: Used for both reading (`current_step`, `draft`) and writing (during `dispatch`).
#[derive(Clone)]
pub struct OnboardingContext {
    /// Wizard machine: current step plus the registration draft it guards.
    machine: Arc<Mutex<RegistrationStateMachine>>,
    /// Serializes dispatch calls to prevent concurrent transition/action races.
    /// Ensures the entire transition + execute_actions + emit runs atomically.
    /// Only acquired during `dispatch`, NOT during reads.
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for OnboardingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingContext {
    pub fn new() -> Self {
        Self {
            machine: Arc::new(Mutex::new(RegistrationStateMachine::new())),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Current wizard step.
    ///
    /// Lightweight read that does NOT acquire `dispatch_lock`.
    pub async fn current_step(&self) -> WizardStep {
        self.machine.lock().await.step().clone()
    }

    /// Snapshot of the registration draft.
    pub async fn draft(&self) -> RegistrationDraft {
        self.machine.lock().await.draft().clone()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Runs one event through the machine, returning the step it settled on
    /// and the actions to execute.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn apply(&self, event: WizardEvent) -> (WizardStep, Vec<WizardAction>) {
        let mut machine = self.machine.lock().await;
        let actions = machine.handle_event(event);
        (machine.step().clone(), actions)
    }
}
