pub mod spi;
pub mod usart;

pub use spi::{EncoderSelect, EncoderSpi};
pub use usart::DebugPort;
