pub mod alert_forwarder;
pub mod appinspect_client;
pub mod insightconnect_client;
