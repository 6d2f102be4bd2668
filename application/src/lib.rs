//! Application layer for verdict-router
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RouterConfig;
pub use ports::{
    progress::{NoProgress, RouterProgressNotifier},
    provider_gateway::{GatewayError, ProviderGateway},
};
pub use use_cases::fact_check::{FactCheckReport, FactCheckUseCase};
pub use use_cases::fallback::FallbackOrchestrator;
pub use use_cases::judge_panel::JudgePanelCoordinator;
pub use use_cases::router::{
    FactCheckedResponse, GenerationResponse, RouterError, RouterInput, RouterUseCase,
};
