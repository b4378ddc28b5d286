pub mod helpers;
pub mod inspections;
pub mod sections;
