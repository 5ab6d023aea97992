pub mod alert_transport;
