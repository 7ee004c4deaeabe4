pub mod events;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}
pub mod factory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
