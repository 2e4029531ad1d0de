pub mod mock_ports;
pub mod packets;

#[allow(unused_imports)]
pub use mock_ports::*;
#[allow(unused_imports)]
pub use packets::*;
