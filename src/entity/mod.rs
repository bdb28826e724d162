pub mod application_users;
pub mod categories;
pub mod order_details;
pub mod order_headers;
pub mod products;

pub use application_users::Entity as ApplicationUsers;
pub use categories::Entity as Categories;
pub use order_details::Entity as OrderDetails;
pub use order_headers::Entity as OrderHeaders;
pub use products::Entity as Products;
