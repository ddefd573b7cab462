use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EndpointDescription {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointDescription>,
}

impl ServiceDescription {
    pub fn current() -> Self {
        let endpoint = |method, path, description| EndpointDescription {
            method,
            path,
            description,
        };

        Self {
            service: "item-service",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: vec![
                endpoint("GET", "/items", "List all items, newest first"),
                endpoint("POST", "/items", "Create an item from {name, value}"),
                endpoint("GET", "/items/:id", "Fetch one item by id"),
                endpoint("DELETE", "/items/:id", "Delete one item by id"),
                endpoint("GET", "/health", "Liveness check including the store"),
                endpoint("GET", "/ready", "Readiness check"),
                endpoint("GET", "/metrics", "Prometheus metrics"),
            ],
        }
    }
}
