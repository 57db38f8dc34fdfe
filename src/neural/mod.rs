pub mod activations;
pub mod init;
pub mod optimizer;

use crate::prelude::*;
use std::iter;

use crate::matrix::{
    ops::{Dot, Transpose},
    Matrix,
};

use self::activations::{Activation, Sigmoid};
use self::init::{Initializer, Lcg};

/// How the bias-weight rows are updated on each training step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BiasUpdate {
    /// Broadcasts the layer delta over an all-ones column as wide as the
    /// layer's input, then keeps the first row of the result. Every row of
    /// that broadcast equals the delta, so the step is `rate * delta`
    /// regardless of the bias scalar.
    #[default]
    Reference,
    /// Textbook gradient of a weight fed by the constant bias input:
    /// `rate * bias * delta`.
    Scaled,
}

/// One layer transition: an `(inputs, neurons)` weight matrix and a
/// `1 x neurons` row of bias weights.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Matrix<f64>,
    bias_weights: Matrix<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNet {
    n_inputs: usize,
    n_hidden_layers: usize,
    n_outputs: usize,
    learning_rate: f64,
    bias: f64,
    layers: Vec<DenseLayer>,
    bias_update: BiasUpdate,
}

impl DenseLayer {
    /// Initializes a layer given the number of inputs and neurons.
    /// Values are drawn column by column: each weight of a column top to
    /// bottom, then that column's bias weight.
    pub fn new<I: Initializer + ?Sized>(
        n_inputs: usize,
        n_neurons: usize,
        init: &mut I,
    ) -> Result<Self> {
        let mut weights = vec![0.0; n_inputs * n_neurons];
        let mut bias_weights = vec![0.0; n_neurons];

        for col in 0..n_neurons {
            for row in 0..n_inputs {
                weights[row * n_neurons + col] = init.next_weight();
            }
            bias_weights[col] = init.next_weight();
        }

        Ok(Self {
            weights: Matrix::from_raw(n_inputs, n_neurons, weights)?,
            bias_weights: Matrix::from_row(bias_weights)?,
        })
    }

    /// Builds a layer from explicit matrices. `bias_weights` must be a single
    /// row as wide as `weights`.
    pub fn from_parts(weights: Matrix<f64>, bias_weights: Matrix<f64>) -> Result<Self> {
        if bias_weights.dim() != (1, weights.cols()) {
            return Err(Error::DimensionErr);
        }
        Ok(Self {
            weights,
            bias_weights,
        })
    }

    /// Propogates a `1 x inputs` activation through the layer applying the sigmoid.
    pub fn forward(&self, input: &Matrix<f64>, bias: f64) -> Result<Matrix<f64>> {
        let sum = (&input.dot(&self.weights)? + &self.bias_weights.scalar_mul(bias))?;
        Ok(sum.apply(|x| Sigmoid.call(x)))
    }

    pub fn weights(&self) -> &Matrix<f64> {
        &self.weights
    }

    pub fn bias_weights(&self) -> &Matrix<f64> {
        &self.bias_weights
    }

    /// Returns the amount of inputs this layer accepts
    pub fn input_amount(&self) -> usize {
        self.weights.rows()
    }

    /// Returns the amount of neurons in the layer
    pub fn neuron_amount(&self) -> usize {
        self.weights.cols()
    }
}

impl NeuralNet {
    /// Creates a network with `n_hidden_layers` hidden layers sized by
    /// `hidden_sizes`, seeding every weight from a fresh [`Lcg`].
    ///
    /// Two networks created with the same topology start out identical.
    pub fn new(
        n_inputs: usize,
        n_hidden_layers: usize,
        hidden_sizes: &[usize],
        n_outputs: usize,
        learning_rate: f64,
        bias: f64,
    ) -> Result<Self> {
        Self::with_init(
            n_inputs,
            n_hidden_layers,
            hidden_sizes,
            n_outputs,
            learning_rate,
            bias,
            &mut Lcg::default(),
        )
    }

    /// Same as [`NeuralNet::new`] but draws initial weights from `init`.
    pub fn with_init<I: Initializer + ?Sized>(
        n_inputs: usize,
        n_hidden_layers: usize,
        hidden_sizes: &[usize],
        n_outputs: usize,
        learning_rate: f64,
        bias: f64,
        init: &mut I,
    ) -> Result<Self> {
        if hidden_sizes.len() != n_hidden_layers {
            return Err(Error::ConfigErr);
        }
        check_rate(learning_rate)?;

        let sizes: Vec<usize> = iter::once(n_inputs)
            .chain(hidden_sizes.iter().copied())
            .chain(iter::once(n_outputs))
            .collect();
        if sizes.contains(&0) {
            return Err(Error::ConfigErr);
        }

        let mut layers = Vec::with_capacity(n_hidden_layers + 1);
        for pair in sizes.windows(2) {
            layers.push(DenseLayer::new(pair[0], pair[1], init)?);
        }

        Ok(Self {
            n_inputs,
            n_hidden_layers,
            n_outputs,
            learning_rate,
            bias,
            layers,
            bias_update: BiasUpdate::default(),
        })
    }

    /// Assembles a network from explicit layers. Consecutive layers must
    /// agree on their shared width.
    pub fn from_layers(layers: Vec<DenseLayer>, learning_rate: f64, bias: f64) -> Result<Self> {
        check_rate(learning_rate)?;

        let (first, last) = match (layers.first(), layers.last()) {
            (Some(first), Some(last)) => (first.input_amount(), last.neuron_amount()),
            _ => return Err(Error::ConfigErr),
        };
        if layers
            .windows(2)
            .any(|pair| pair[0].neuron_amount() != pair[1].input_amount())
        {
            return Err(Error::DimensionErr);
        }

        Ok(Self {
            n_inputs: first,
            n_hidden_layers: layers.len() - 1,
            n_outputs: last,
            learning_rate,
            bias,
            layers,
            bias_update: BiasUpdate::default(),
        })
    }

    /// Select the bias-weight update rule
    pub fn with_bias_update(mut self, bias_update: BiasUpdate) -> Self {
        self.bias_update = bias_update;
        self
    }

    /// Runs the input through every layer, keeping each activation.
    /// The first entry is the input itself, the last is the network output.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<Matrix<f64>>> {
        if input.len() != self.n_inputs {
            return Err(Error::InputErr);
        }

        let mut outputs = Vec::with_capacity(self.layers.len() + 1);
        outputs.push(Matrix::from_row(input.to_vec())?);
        for layer in self.layers.iter() {
            let next = layer.forward(&outputs[outputs.len() - 1], self.bias)?;
            outputs.push(next);
        }
        Ok(outputs)
    }

    /// Forward propagation from input to a `1 x n_outputs` prediction.
    pub fn predict(&self, input: &[f64]) -> Result<Matrix<f64>> {
        if input.len() != self.n_inputs {
            return Err(Error::InputErr);
        }

        let input = Matrix::from_row(input.to_vec())?;
        self.layers
            .iter()
            .try_fold(input, |act, layer| layer.forward(&act, self.bias))
    }

    /// One step of online backpropagation towards `target`.
    ///
    /// Every layer is replaced by a freshly computed one; on error the
    /// network is left untouched.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        if target.len() != self.n_outputs {
            return Err(Error::InputErr);
        }

        let outputs = self.forward(input)?;
        let n_layers = self.layers.len();
        let result = &outputs[n_layers];
        let target = Matrix::from_row(target.to_vec())?;
        let d_sigmoid = |a: f64| Sigmoid.derivative(a);

        // collected from the last layer backwards, then flipped so that
        // deltas[l] is the error signal at the output of layer l
        let mut deltas = Vec::with_capacity(n_layers);
        deltas.push((&target - result)?.hadamard(&result.apply(d_sigmoid))?);
        for l in (0..n_layers - 1).rev() {
            let downstream = &deltas[deltas.len() - 1];
            let back = downstream.dot(&self.layers[l + 1].weights.transpose())?;
            deltas.push(back.hadamard(&outputs[l + 1].apply(d_sigmoid))?);
        }
        deltas.reverse();

        let mut updated = Vec::with_capacity(n_layers);
        for (l, layer) in self.layers.iter().enumerate().rev() {
            // outputs[l] is the activation feeding layer l
            let step = outputs[l]
                .transpose()
                .dot(&deltas[l])?
                .scalar_mul(self.learning_rate);
            let bias_step = self
                .bias_gradient(layer, &deltas[l])?
                .scalar_mul(self.learning_rate);

            updated.push(DenseLayer {
                weights: (&layer.weights + &step)?,
                bias_weights: (&layer.bias_weights + &bias_step)?,
            });
        }
        updated.reverse();

        self.layers = updated;
        Ok(())
    }

    fn bias_gradient(&self, layer: &DenseLayer, delta: &Matrix<f64>) -> Result<Matrix<f64>> {
        match self.bias_update {
            BiasUpdate::Reference => {
                let ones = Matrix::filled(1, layer.input_amount(), 1.0)?;
                ones.transpose().dot(delta)?.row(0)
            }
            BiasUpdate::Scaled => Ok(delta.scalar_mul(self.bias)),
        }
    }

    /// Mean-squared error over every sample row and output column
    pub fn mean_squared_error(&self, inputs: &Matrix<f64>, targets: &Matrix<f64>) -> Result<f64> {
        if inputs.rows() != targets.rows() || inputs.rows() == 0 {
            return Err(Error::DataFormatErr);
        }
        if targets.cols() != self.n_outputs {
            return Err(Error::InputErr);
        }

        let mut sum = 0.0;
        for row in 0..inputs.rows() {
            let output = self.predict(&inputs.row_to_vec(row)?)?;
            for col in 0..targets.cols() {
                let diff = output[(0, col)] - targets[(row, col)];
                sum += diff * diff;
            }
        }
        Ok(sum / (targets.rows() * targets.cols()) as f64)
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_hidden_layers(&self) -> usize {
        self.n_hidden_layers
    }

    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn bias_update(&self) -> BiasUpdate {
        self.bias_update
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// `[inputs, hidden.., outputs]`, read off the weight shapes.
    pub fn layer_sizes(&self) -> Vec<usize> {
        iter::once(self.n_inputs)
            .chain(self.layers.iter().map(DenseLayer::neuron_amount))
            .collect()
    }
}

fn check_rate(learning_rate: f64) -> Result<()> {
    if learning_rate.is_finite() && learning_rate > 0.0 {
        Ok(())
    } else {
        Err(Error::ConfigErr)
    }
}
