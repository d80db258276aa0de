pub use tableside_models::products::{CreateProductDto, Product};
