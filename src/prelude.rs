use std::fmt;

/// Error type for RustNN
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    DimensionErr,
    /// Input or target vector length does not match the network.
    InputErr,
    /// Training inputs and targets disagree on the number of samples.
    DataFormatErr,
    /// Network topology or hyperparameters are unusable.
    ConfigErr,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionErr => write!(f, "matrix dimensions are incompatible"),
            Error::InputErr => write!(f, "vector length does not match the network"),
            Error::DataFormatErr => write!(f, "inputs and targets have different sample counts"),
            Error::ConfigErr => write!(f, "invalid network configuration"),
        }
    }
}

impl std::error::Error for Error {}
