pub mod errors;

pub mod bookings {
    pub mod model;
    pub mod service;
}

pub mod reviews {
    pub mod service;
}

pub mod purchases {
    pub mod service;
}

/// Request bodies and stored records are open mappings: the service accepts
/// whatever fields the caller sends and never validates a schema.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
