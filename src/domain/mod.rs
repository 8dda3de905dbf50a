pub mod entities;
pub mod repositories;
