pub mod auth;
pub mod feedback;
pub mod session;
pub mod youtube;
