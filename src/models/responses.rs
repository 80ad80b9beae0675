use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    pub const HEALTHY: Self = Self {
        status: "healthy",
        database: "connected",
    };

    pub const UNHEALTHY: Self = Self {
        status: "unhealthy",
        database: "disconnected",
    };
}
