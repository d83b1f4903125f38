//! Business logic use cases.
//!
//! 是否是独立 Use Case，
//! 取决于“是否需要用户 / 系统再次做出决策”

pub mod onboarding;

pub use onboarding::OnboardingOrchestrator;
