pub mod size_service;
