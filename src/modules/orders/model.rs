pub use tableside_models::orders::{
    CreateOrderDto, Order, OrderItem, OrderLineDto, OrderStatus, OrderWithItems,
    UpdateOrderStatusDto, calculate_total,
};
