pub use super::category::Entity as Category;
