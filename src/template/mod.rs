//! Template engine: validated snipping jobs and the factories that build them

pub mod errors;
pub mod cancellation;
pub mod settings;
pub mod template_traits;
pub mod image_template;
pub mod factory;

pub use errors::{SnipError, SnipResult, ValidationError};
pub use cancellation::CancellationToken;
pub use settings::TemplateSettings;
pub use template_traits::{PlannedOutput, Probe, RunSummary, Template, TemplateFactory};
pub use image_template::ImageTemplate;
pub use factory::{ImageTemplateFactory, TemplateRegistry};
