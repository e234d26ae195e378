pub mod export;
pub mod server;
pub mod submission;

pub use export::ExportConfig;
pub use server::ServerConfig;
pub use submission::SubmissionConfig;
