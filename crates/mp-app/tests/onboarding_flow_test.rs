//! End-to-end wizard runs against in-memory adapters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::time::sleep;

use mp_app::usecases::onboarding::{
    CompleteLogin, FetchDocumentRequirements, FinalizeRegistration, OnboardingOrchestrator,
    SubmitVerification,
};
use mp_core::document::{
    CountryRequirement, DocumentFile, DocumentSpec, DocumentTypeTag, MimeType, StagedDocument,
};
use mp_core::ports::{
    PortalApiError, ReferenceDataPort, RegistrationPort, VerificationPort, WizardEventPort,
};
use mp_core::registration::{
    AccountId, IdentityFields, LoginSession, RegisterRequest, RegisteredAccount,
};
use mp_core::verification::{VerdictStatus, VerificationResponse};
use mp_core::wizard::WizardStep;
use mp_infra::InMemoryPreviewRegistry;

static TRACE_INIT: Once = Once::new();

fn init_tracing() {
    TRACE_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[tokio::test]
async fn onboarding_flow_test_approved_documents_complete_with_live_session() {
    init_tracing();
    let (orchestrator, previews, verifier, registrar) = build_flow();

    let step = orchestrator
        .submit_account(
            "asha@example.com".into(),
            "secret123".into(),
            "secret123".into(),
        )
        .await;
    assert_eq!(step.name(), "professional");

    let step = orchestrator
        .submit_professional(
            "Dr. Asha Rao".into(),
            "India".into(),
            "MH-12345".into(),
            "Cardiology".into(),
            Some("Apollo Hospital".into()),
            None,
        )
        .await;
    assert_eq!(step.name(), "documents");

    orchestrator
        .upload_document(DocumentTypeTag::from("medical_degree"), jpeg("degree.jpg"))
        .await
        .expect("stage degree");
    orchestrator
        .upload_document(DocumentTypeTag::from("medical_license"), pdf("license.pdf"))
        .await
        .expect("stage license");
    assert_eq!(previews.live_count(), 1, "only the image carries a preview");

    let step = orchestrator.request_verification().await;
    assert_eq!(step.name(), "submitting_verification");

    let step = wait_for_step(&orchestrator, "complete").await;
    let WizardStep::Complete { account } = step else {
        panic!("expected the complete step");
    };
    assert_eq!(account.email, "asha@example.com");

    assert_eq!(verifier.calls(), 1);
    let request = registrar.last_request().expect("register request sent");
    assert_eq!(request.magic_code, None);
    assert_eq!(request.hospital.as_deref(), Some("Apollo Hospital"));

    assert!(orchestrator.registered_account().await.is_some());
    let session = orchestrator.login_session().await.expect("session stored");
    assert_eq!(session.access_token, "jwt-token");

    // The staging store travels with the orchestrator; dropping the last
    // clone must release the remaining preview handle.
    drop(orchestrator);
    let deadline = Instant::now() + Duration::from_secs(1);
    while previews.live_count() > 0 {
        assert!(
            Instant::now() < deadline,
            "preview handles were not released"
        );
        sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn onboarding_flow_test_bypass_code_registers_without_verification() {
    init_tracing();
    let (orchestrator, _previews, verifier, registrar) = build_flow();

    orchestrator
        .submit_account(
            "asha@example.com".into(),
            "secret123".into(),
            "secret123".into(),
        )
        .await;
    orchestrator
        .submit_professional(
            "Dr. Asha Rao".into(),
            "India".into(),
            "MH-12345".into(),
            "Cardiology".into(),
            None,
            None,
        )
        .await;

    orchestrator
        .set_bypass_code(Some("JUDGE2024".into()))
        .await;
    let step = orchestrator.request_verification().await;
    assert_eq!(step.name(), "submitting_registration");

    wait_for_step(&orchestrator, "complete").await;
    assert_eq!(verifier.calls(), 0, "bypass must not call the verifier");
    let request = registrar.last_request().expect("register request sent");
    assert_eq!(request.magic_code.as_deref(), Some("JUDGE2024"));
    assert!(orchestrator.login_session().await.is_some());
}

#[tokio::test]
async fn onboarding_flow_test_country_switch_releases_previews_and_refetches() {
    init_tracing();
    let (orchestrator, previews, _verifier, _registrar) = build_flow();

    orchestrator
        .submit_account(
            "asha@example.com".into(),
            "secret123".into(),
            "secret123".into(),
        )
        .await;
    orchestrator
        .submit_professional(
            "Dr. Asha Rao".into(),
            "India".into(),
            "MH-12345".into(),
            "Cardiology".into(),
            None,
            None,
        )
        .await;
    wait_for_regulatory_body(&orchestrator, "National Medical Commission (NMC)").await;

    orchestrator
        .upload_document(DocumentTypeTag::from("medical_degree"), jpeg("degree.jpg"))
        .await
        .expect("stage degree");
    assert_eq!(previews.live_count(), 1);

    let step = orchestrator.go_back().await;
    assert_eq!(step.name(), "professional");

    let step = orchestrator.change_country("Singapore".into()).await;
    assert_eq!(step.name(), "professional");

    // The reset ran inside the dispatch, before the new fetch can land.
    assert!(orchestrator.staged_documents().await.is_empty());
    assert_eq!(previews.live_count(), 0);

    wait_for_regulatory_body(&orchestrator, "Singapore Medical Council").await;
    assert_eq!(orchestrator.draft().await.country, "Singapore");
}

async fn wait_for_step(orchestrator: &OnboardingOrchestrator, expected: &str) -> WizardStep {
    let deadline = Instant::now() + Duration::from_secs(1);
    loop {
        let step = orchestrator.current_step().await;
        if step.name() == expected {
            return step;
        }
        assert!(
            Instant::now() < deadline,
            "wizard stuck on {} waiting for {expected}",
            step.name()
        );
        sleep(Duration::from_millis(10)).await;
    }
}

async fn wait_for_regulatory_body(orchestrator: &OnboardingOrchestrator, expected: &str) {
    let deadline = Instant::now() + Duration::from_secs(1);
    loop {
        let requirement = orchestrator.document_requirements().await;
        if requirement.regulatory_body == expected {
            return;
        }
        assert!(
            Instant::now() < deadline,
            "requirement fetch never landed, regulatory body is {:?}",
            requirement.regulatory_body
        );
        sleep(Duration::from_millis(10)).await;
    }
}

fn jpeg(filename: &str) -> DocumentFile {
    DocumentFile::new(filename, MimeType::image_jpeg(), vec![0xFF, 0xD8, 0xFF])
}

fn pdf(filename: &str) -> DocumentFile {
    DocumentFile::new(filename, MimeType::application_pdf(), b"%PDF-1.4".to_vec())
}

#[derive(Default)]
struct CountingVerifier {
    calls: AtomicUsize,
}

impl CountingVerifier {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerificationPort for CountingVerifier {
    async fn verify_documents(
        &self,
        _identity: &IdentityFields,
        _documents: &[StagedDocument],
    ) -> Result<VerificationResponse, PortalApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::from_value(serde_json::json!({
            "status": "approved",
            "confidence_score": 92,
            "document_analysis": []
        }))
        .unwrap())
    }
}

#[derive(Default)]
struct RecordingRegistrar {
    requests: Mutex<Vec<RegisterRequest>>,
}

impl RecordingRegistrar {
    fn last_request(&self) -> Option<RegisterRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RegistrationPort for RecordingRegistrar {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisteredAccount, PortalApiError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(RegisteredAccount {
            id: AccountId::from("doc_1"),
            email: request.email.clone(),
            name: request.name.clone(),
            country: request.country.clone(),
            registration_number: request.registration_number.clone(),
            specialization: request.specialization.clone(),
            hospital: request.hospital.clone(),
            verification_status: if request.magic_code.is_some() {
                VerdictStatus::Approved
            } else {
                VerdictStatus::Pending
            },
            role: "doctor".into(),
            created_at: None,
        })
    }

    async fn login(
        &self,
        email: &str,
        _password: &str,
        registration_number: Option<&str>,
    ) -> Result<LoginSession, PortalApiError> {
        Ok(LoginSession {
            access_token: "jwt-token".into(),
            token_type: "bearer".into(),
            user: RegisteredAccount {
                id: AccountId::from("doc_1"),
                email: email.into(),
                name: "Dr. Asha Rao".into(),
                country: String::new(),
                registration_number: registration_number.unwrap_or_default().into(),
                specialization: String::new(),
                hospital: None,
                verification_status: VerdictStatus::Approved,
                role: "doctor".into(),
                created_at: None,
            },
        })
    }
}

struct StaticReferenceData;

#[async_trait]
impl ReferenceDataPort for StaticReferenceData {
    async fn fetch_countries(&self) -> anyhow::Result<Vec<String>> {
        Ok(vec!["India".into(), "Singapore".into()])
    }

    async fn fetch_specializations(&self) -> anyhow::Result<Vec<String>> {
        Ok(vec!["Cardiology".into(), "Neurology".into()])
    }

    async fn fetch_document_requirements(
        &self,
        country: &str,
    ) -> anyhow::Result<CountryRequirement> {
        // Non-empty regulatory body marks a live fetch; the built-in
        // defaults leave it blank.
        let regulatory_body = match country {
            "India" => "National Medical Commission (NMC)",
            "Singapore" => "Singapore Medical Council",
            other => anyhow::bail!("no requirements on file for {other}"),
        };
        Ok(CountryRequirement {
            country: country.to_string(),
            required_documents: vec![
                DocumentSpec::new("medical_degree", "Medical Degree Certificate", ""),
                DocumentSpec::new("medical_license", "Medical License/Registration", ""),
            ],
            optional_documents: Vec::new(),
            registration_format: String::new(),
            regulatory_body: regulatory_body.into(),
            notes: String::new(),
        })
    }
}

struct NoopWizardEvents;

#[async_trait]
impl WizardEventPort for NoopWizardEvents {
    async fn emit_step_changed(&self, _step: WizardStep) {}
}

fn build_flow() -> (
    OnboardingOrchestrator,
    Arc<InMemoryPreviewRegistry>,
    Arc<CountingVerifier>,
    Arc<RecordingRegistrar>,
) {
    let previews = Arc::new(InMemoryPreviewRegistry::new());
    let verifier = Arc::new(CountingVerifier::default());
    let registrar = Arc::new(RecordingRegistrar::default());

    let orchestrator = OnboardingOrchestrator::new(
        Arc::new(SubmitVerification::new(verifier.clone())),
        Arc::new(FinalizeRegistration::new(registrar.clone())),
        Arc::new(CompleteLogin::new(registrar.clone())),
        Arc::new(FetchDocumentRequirements::new(Arc::new(StaticReferenceData))),
        previews.clone(),
        Arc::new(NoopWizardEvents),
    );
    (orchestrator, previews, verifier, registrar)
}
