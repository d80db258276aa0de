pub use tableside_models::restaurants::{CreateRestaurantDto, Restaurant};
pub use tableside_models::staff::{CreateStaffDto, Staff};
