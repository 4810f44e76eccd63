/// Embedded Swagger UI distribution.
pub mod assets;
/// Path-to-route resolution.
pub mod dispatch;
/// HTML shell and bootstrap script rendering.
pub mod render;
/// Turns routes into replies.
pub mod ui_service;
