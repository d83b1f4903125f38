use crate::wizard::WizardStep;

#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_step_changed(&self, step: WizardStep);
}
