pub mod analysis;
pub mod azure;
pub mod config;
pub mod replay;
pub mod service;

pub use analysis::{AnalyzedImage, BoundingBox, DetectedObject, FaceInfo};
pub use azure::AzureVisionClient;
pub use config::VisionConfig;
pub use replay::ReplayVisionService;
pub use service::{OcrWord, VisionError, VisionService};
