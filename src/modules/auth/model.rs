pub use tableside_models::auth::{Credentials, Role, SessionResponse, SignInRequest, SignUpRequest};
