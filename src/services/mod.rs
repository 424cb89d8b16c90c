pub mod geocoder;
pub mod metrics_manager;
pub mod openrouter;
pub mod prompt;
pub mod report_generator;
pub mod trip_planner;
