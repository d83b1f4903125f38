//! Onboarding orchestrator.
//!
//! This module coordinates the wizard state machine and side effects.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, warn, Instrument};

use mp_core::document::{
    CountryRequirement, DocumentFile, DocumentSpec, DocumentStagingStore, DocumentTypeTag,
    StagedDocument, UploadError,
};
use mp_core::ports::{PreviewSourcePort, WizardEventPort};
use mp_core::reference::default_document_requirements;
use mp_core::registration::{LoginSession, RegisteredAccount, RegistrationDraft};
use mp_core::wizard::{WizardAction, WizardEvent, WizardStep};

use crate::usecases::onboarding::context::OnboardingContext;
use crate::usecases::onboarding::{
    CompleteLogin, FetchDocumentRequirements, FinalizeRegistration, SubmitVerification,
};

/// Shown when the verification service failed without a usable `detail`.
const VERIFICATION_FALLBACK_MESSAGE: &str = "Verification failed. Please try again.";
/// Shown when account creation failed without a usable `detail`.
const REGISTRATION_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// Orchestrator that drives the onboarding wizard.
///
/// Every user interaction becomes a [`WizardEvent`] dispatched through the
/// state machine; the actions that fall out run against the ports. Backend
/// requests run in spawned tasks and feed their outcome back in as events,
/// so a late response goes through exactly the same transition table as a
/// button press.
///
/// Cloning is cheap: clones share the wizard, the staging store and the
/// result caches.
///
/// 注册向导编排器。
#[derive(Clone)]
pub struct OnboardingOrchestrator {
    context: Arc<OnboardingContext>,

    /// Staged documents together with their preview handles.
    documents: Arc<Mutex<DocumentStagingStore>>,
    /// Requirements fetched for the draft country. Cleared on country change.
    requirements: Arc<Mutex<Option<CountryRequirement>>>,
    /// Account returned by the registration endpoint.
    account: Arc<Mutex<Option<RegisteredAccount>>>,
    /// Session from the post-registration login.
    session: Arc<Mutex<Option<LoginSession>>>,

    // 能力型 use cases (依赖注入)
    submit_verification: Arc<SubmitVerification>,
    finalize_registration: Arc<FinalizeRegistration>,
    complete_login: Arc<CompleteLogin>,
    fetch_requirements: Arc<FetchDocumentRequirements>,
    event_port: Arc<dyn WizardEventPort>,
}

impl OnboardingOrchestrator {
    pub fn new(
        submit_verification: Arc<SubmitVerification>,
        finalize_registration: Arc<FinalizeRegistration>,
        complete_login: Arc<CompleteLogin>,
        fetch_requirements: Arc<FetchDocumentRequirements>,
        preview_source: Arc<dyn PreviewSourcePort>,
        event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: OnboardingContext::default().arc(),
            documents: Arc::new(Mutex::new(DocumentStagingStore::new(preview_source))),
            requirements: Arc::new(Mutex::new(None)),
            account: Arc::new(Mutex::new(None)),
            session: Arc::new(Mutex::new(None)),
            submit_verification,
            finalize_registration,
            complete_login,
            fetch_requirements,
            event_port,
        }
    }

    pub async fn submit_account(
        &self,
        email: String,
        password: String,
        confirm_password: String,
    ) -> WizardStep {
        let event = WizardEvent::SubmitAccount {
            email,
            password,
            confirm_password,
        };
        self.dispatch(event).await
    }

    pub async fn submit_professional(
        &self,
        name: String,
        country: String,
        registration_number: String,
        specialization: String,
        hospital: Option<String>,
        phone: Option<String>,
    ) -> WizardStep {
        let event = WizardEvent::SubmitProfessional {
            name,
            country,
            registration_number,
            specialization,
            hospital,
            phone,
        };
        self.dispatch(event).await
    }

    pub async fn change_country(&self, country: String) -> WizardStep {
        let event = WizardEvent::CountryChanged { country };
        self.dispatch(event).await
    }

    pub async fn set_bypass_code(&self, code: Option<String>) -> WizardStep {
        let event = WizardEvent::BypassCodeChanged { code };
        self.dispatch(event).await
    }

    pub async fn go_back(&self) -> WizardStep {
        self.dispatch(WizardEvent::GoBack).await
    }

    /// Asks to verify the staged documents. The event carries a snapshot of
    /// the staging store and the active requirement so the guard runs
    /// without I/O.
    pub async fn request_verification(&self) -> WizardStep {
        let staged = self.documents.lock().await.staged_types();
        let required = self.required_specs().await;
        let event = WizardEvent::RequestVerification { staged, required };
        self.dispatch(event).await
    }

    pub async fn retry_with_new_documents(&self) -> WizardStep {
        self.dispatch(WizardEvent::RetryWithNewDocuments).await
    }

    pub async fn resubmit_documents(&self) -> WizardStep {
        self.dispatch(WizardEvent::ResubmitDocuments).await
    }

    pub async fn complete_registration(&self) -> WizardStep {
        self.dispatch(WizardEvent::CompleteRegistration).await
    }

    pub async fn current_step(&self) -> WizardStep {
        self.context.current_step().await
    }

    pub async fn draft(&self) -> RegistrationDraft {
        self.context.draft().await
    }

    /// Stages a file for `doc_type`. A rejected file surfaces directly to
    /// the caller and never moves the wizard.
    pub async fn upload_document(
        &self,
        doc_type: DocumentTypeTag,
        file: DocumentFile,
    ) -> Result<(), UploadError> {
        self.documents.lock().await.stage(doc_type, file)
    }

    pub async fn remove_document(&self, doc_type: &DocumentTypeTag) {
        self.documents.lock().await.remove(doc_type);
    }

    pub async fn staged_documents(&self) -> Vec<StagedDocument> {
        self.documents.lock().await.documents().to_vec()
    }

    /// Requirements for the draft country: the fetched set once the lookup
    /// has landed, the built-in defaults until then.
    pub async fn document_requirements(&self) -> CountryRequirement {
        if let Some(requirement) = self.requirements.lock().await.clone() {
            return requirement;
        }
        default_document_requirements(&self.context.draft().await.country)
    }

    pub async fn registered_account(&self) -> Option<RegisteredAccount> {
        self.account.lock().await.clone()
    }

    pub async fn login_session(&self) -> Option<LoginSession> {
        self.session.lock().await.clone()
    }

    async fn required_specs(&self) -> Vec<DocumentSpec> {
        self.document_requirements().await.required_documents
    }

    async fn dispatch(&self, event: WizardEvent) -> WizardStep {
        // Acquire dispatch lock to serialize concurrent dispatch calls.
        // This prevents race conditions where two calls read the same step
        // and execute duplicate actions.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        // Step and event names only; the Debug form of some events carries
        // credentials.
        let span = info_span!(
            "usecase.onboarding_orchestrator.dispatch",
            event = event.name()
        );
        async {
            let from = self.context.current_step().await;
            let event_name = event.name();
            let (next, actions) = self.context.apply(event).await;
            info!(
                from = from.name(),
                to = next.name(),
                event = event_name,
                "wizard step transition"
            );
            self.execute_actions(actions).await;
            self.event_port.emit_step_changed(next.clone()).await;
            next
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) {
        for action in actions {
            debug!(?action, "onboarding executing action");
            match action {
                WizardAction::ResetStagedDocuments => {
                    self.documents.lock().await.reset();
                    self.requirements.lock().await.take();
                    debug!("onboarding action ResetStagedDocuments completed");
                }
                WizardAction::FetchDocumentRequirements { country } => {
                    self.spawn_requirements_fetch(country);
                }
                WizardAction::SubmitForVerification => {
                    self.spawn_verification_request().await;
                }
                WizardAction::FinalizeRegistration { skip_verification } => {
                    self.spawn_registration_request(skip_verification).await;
                }
            }
        }
    }

    /// Type-erased dispatch for spawned request tasks. Feeding a completion
    /// event straight back into [`Self::dispatch`] from inside a task it
    /// spawned would give that task a recursive future type; boxing here
    /// cuts the cycle.
    fn dispatch_completion(&self, event: WizardEvent) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let this = self.clone();
        Box::pin(async move {
            this.dispatch(event).await;
        })
    }

    /// Fetches requirements in the background. A fetch that lands after the
    /// user already switched country again is dropped.
    fn spawn_requirements_fetch(&self, country: String) {
        let fetch_requirements = Arc::clone(&self.fetch_requirements);
        let requirements = Arc::clone(&self.requirements);
        let context = Arc::clone(&self.context);
        tokio::spawn(async move {
            let requirement = fetch_requirements.execute(&country).await;
            let draft_country = context.draft().await.country;
            if draft_country != country {
                warn!(
                    fetched = %country,
                    current = %draft_country,
                    "discarding stale document requirements"
                );
                return;
            }
            requirements.lock().await.replace(requirement);
        });
    }

    /// Snapshots the draft identity and staged files, then runs the
    /// verification request off the dispatch path. The outcome carries the
    /// country it was submitted for so the machine can spot a response made
    /// stale by a country switch.
    async fn spawn_verification_request(&self) {
        let identity = self.context.draft().await.identity_fields();
        let documents = self.documents.lock().await.documents().to_vec();
        let country = identity.country.clone();
        let this = self.clone();
        tokio::spawn(async move {
            let event = match this
                .submit_verification
                .execute(&identity, &documents)
                .await
            {
                Ok(verdict) => WizardEvent::VerificationSucceeded { country, verdict },
                Err(err) => {
                    error!(error = %err, "verification request failed");
                    WizardEvent::VerificationFailed {
                        country,
                        message: err.user_message(VERIFICATION_FALLBACK_MESSAGE),
                    }
                }
            };
            this.dispatch_completion(event).await;
        });
    }

    /// Runs account creation off the dispatch path. On success the account
    /// is kept and a login is attempted so the portal opens signed in.
    async fn spawn_registration_request(&self, skip_verification: bool) {
        let draft = self.context.draft().await;
        let this = self.clone();
        tokio::spawn(async move {
            let event = match this
                .finalize_registration
                .execute(&draft, skip_verification)
                .await
            {
                Ok(created) => {
                    this.account.lock().await.replace(created.clone());
                    this.login_after_registration(&draft).await;
                    WizardEvent::RegistrationSucceeded { account: created }
                }
                Err(err) => {
                    error!(error = %err, "registration request failed");
                    WizardEvent::RegistrationFailed {
                        message: err.user_message(REGISTRATION_FALLBACK_MESSAGE),
                    }
                }
            };
            this.dispatch_completion(event).await;
        });
    }

    /// Post-registration login. A failure here never blocks completion; the
    /// doctor can still sign in by hand.
    async fn login_after_registration(&self, draft: &RegistrationDraft) {
        match self
            .complete_login
            .execute(
                &draft.email,
                &draft.password,
                Some(&draft.registration_number),
            )
            .await
        {
            Ok(session) => {
                self.session.lock().await.replace(session);
            }
            Err(err) => {
                warn!(error = %err, "post-registration login failed");
            }
        }
    }
}
