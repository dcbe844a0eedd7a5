// Adapters layer: concrete transports behind the upload ports.

pub mod kudu;

pub use kudu::KuduWarDeployer;
