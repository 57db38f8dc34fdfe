//! A small feed-forward neural network trainer.
//!
//! Networks are fully connected, use sigmoid activations everywhere and learn
//! by online backpropagation: one sample per [`neural::NeuralNet::train`] call
//! with a fixed learning rate. All numeric work goes through the dense
//! [`matrix::Matrix`] type, whose operations never mutate their operands.
//!
//! ```
//! use rust_nn::neural::NeuralNet;
//!
//! # fn main() -> rust_nn::prelude::Result<()> {
//! let mut net = NeuralNet::new(2, 0, &[], 1, 0.5, 1.0)?;
//! for _ in 0..10_000 {
//!     net.train(&[0.0, 0.0], &[0.0])?;
//!     net.train(&[1.0, 1.0], &[1.0])?;
//!     net.train(&[0.0, 1.0], &[1.0])?;
//!     net.train(&[1.0, 0.0], &[1.0])?;
//! }
//! assert_eq!(net.predict(&[0.0, 1.0])?[(0, 0)].round(), 1.0);
//! # Ok(())
//! # }
//! ```

pub mod matrix;
pub mod neural;
pub mod prelude;
