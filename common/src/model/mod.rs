pub mod inspection;
pub mod point;
pub mod template;
