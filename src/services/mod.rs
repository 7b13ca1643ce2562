pub mod activities_service;
pub mod catalog;
