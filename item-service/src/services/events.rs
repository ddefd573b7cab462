//! Driver event hooks that surface asynchronous connection trouble in the logs.

use mongodb::event::cmap::{CmapEventHandler, ConnectionClosedEvent, ConnectionClosedReason};
use mongodb::event::sdam::{
    SdamEventHandler, ServerClosedEvent, ServerHeartbeatFailedEvent,
};

#[derive(Debug, Default)]
pub struct ConnectionEventLogger;

impl SdamEventHandler for ConnectionEventLogger {
    fn handle_server_heartbeat_failed_event(&self, event: ServerHeartbeatFailedEvent) {
        tracing::error!(
            server = %event.server_address,
            error = %event.failure,
            "MongoDB connection error"
        );
    }

    fn handle_server_closed_event(&self, event: ServerClosedEvent) {
        tracing::warn!(server = %event.address, "MongoDB disconnected");
    }
}

impl CmapEventHandler for ConnectionEventLogger {
    fn handle_connection_closed_event(&self, event: ConnectionClosedEvent) {
        if matches!(event.reason, ConnectionClosedReason::Error) {
            tracing::warn!(
                server = %event.address,
                connection_id = event.connection_id,
                "MongoDB connection closed after an error"
            );
        }
    }
}
