/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: stderr logging, file access and
/// external process execution.
pub mod outbound;
