pub use super::car::Entity as Car;
pub use super::location::Entity as Location;
pub use super::login_history::Entity as LoginHistory;
pub use super::rental::Entity as Rental;
pub use super::user::Entity as User;
