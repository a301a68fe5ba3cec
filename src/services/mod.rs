pub mod batch_processor;
pub mod cause_client;
pub mod cause_renderer;
pub mod cause_repository;
pub mod cause_service;
pub mod email_service;
pub mod invocation_counter;
pub mod page_loader;
