pub mod assignments;
pub mod client;
pub mod scoring;
pub mod system;

pub use assignments::AssignmentService;
pub use client::ClientService;
pub use scoring::ScoreCalculator;
pub use system::SystemService;
