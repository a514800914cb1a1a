//! Declarative configuration loading for crowdfunding projects.

pub mod factory;
pub mod loader;
pub mod model;

pub use factory::ProjectFactory;
pub use loader::ConfigLoader;
pub use model::{ExpenseDecl, PartnerDecl, PaymentDecl, ProjectConfig, ProjectDecl, SaleDecl};
