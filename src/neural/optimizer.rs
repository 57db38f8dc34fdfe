use crate::{matrix::Matrix, neural::NeuralNet, prelude::*};

/// Drives online training: every epoch feeds each sample row to
/// [`NeuralNet::train`] once, in row order.
pub struct Optimizer {
    epochs: usize,
    epochs_per_log: Option<usize>,
}

impl Optimizer {
    pub fn new(epochs: usize) -> Self {
        Self {
            epochs,
            epochs_per_log: None,
        }
    }

    pub fn with_log(mut self, epochs_per_log: Option<usize>) -> Self {
        self.epochs_per_log = epochs_per_log;
        self
    }

    pub fn set_epochs(&mut self, epochs: usize) {
        self.epochs = epochs;
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn train(
        &self,
        net: &mut NeuralNet,
        inputs: &Matrix<f64>,
        targets: &Matrix<f64>,
    ) -> Result<()> {
        if inputs.rows() != targets.rows() {
            return Err(Error::DataFormatErr);
        }
        if inputs.cols() != net.n_inputs() || targets.cols() != net.n_outputs() {
            return Err(Error::InputErr);
        }

        for i in 0..self.epochs {
            for row in 0..inputs.rows() {
                net.train(&inputs.row_to_vec(row)?, &targets.row_to_vec(row)?)?;
            }
            if self.epochs_per_log.is_some_and(|epl| epl > 0 && i % epl == 0) {
                let mse = net.mean_squared_error(inputs, targets)?;
                println!("Epoch {i} error: {mse}")
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_data() -> (Matrix<f64>, Matrix<f64>) {
        let mut inputs = Vec::new();
        let mut targets = Vec::new();

        for x in 0..16 {
            let bits: Vec<i32> = (0..4).rev().map(|i| x >> i & 1).collect();
            // bit pairs repeat: 0000, 0101, 1010, 1111
            let hit = bits[0] == bits[2] && bits[1] == bits[3];
            inputs.push(bits);
            targets.push(vec![hit as i32]);
        }

        (
            Matrix::from_vec(inputs).unwrap().into(),
            Matrix::from_vec(targets).unwrap().into(),
        )
    }

    fn assert_rounds_to_targets(net: &NeuralNet, inputs: &Matrix<f64>, targets: &Matrix<f64>) {
        for row in 0..inputs.rows() {
            let input = inputs.row_to_vec(row).unwrap();
            let out = net.predict(&input).unwrap();
            let rounded: Vec<f64> = out.values().iter().map(|v| v.round()).collect();
            assert_eq!(
                rounded,
                targets.row_to_vec(row).unwrap(),
                "{:?} -> {:?}",
                input,
                out.values()
            );
        }
    }

    #[test]
    fn train_or() {
        let mut net = NeuralNet::new(2, 0, &[], 1, 0.5, 1.0).unwrap();

        let inputs = Matrix::from_array([[0, 0], [1, 1], [0, 1], [1, 0]]).into();
        let targets = Matrix::from_array([[0], [1], [1], [1]]).into();

        let optim = Optimizer::new(10_000);
        assert_eq!(Ok(()), optim.train(&mut net, &inputs, &targets));

        assert_rounds_to_targets(&net, &inputs, &targets);
        assert!(net.mean_squared_error(&inputs, &targets).unwrap() < 0.01);
    }

    #[test]
    fn train_pattern_detector() {
        let mut net = NeuralNet::new(4, 2, &[2, 2], 1, 0.5, 1.0).unwrap();
        let (inputs, targets) = pattern_data();

        let optim = Optimizer::new(10_000).with_log(Some(2_500));
        assert_eq!(Ok(()), optim.train(&mut net, &inputs, &targets));

        assert_rounds_to_targets(&net, &inputs, &targets);
    }

    #[test]
    fn zero_epochs_leave_net_untouched() {
        let mut net = NeuralNet::new(2, 1, &[2], 1, 0.5, 1.0).unwrap();
        let before = net.clone();

        let inputs = Matrix::from_array([[0, 1]]).into();
        let targets = Matrix::from_array([[1]]).into();

        let mut optim = Optimizer::new(5);
        optim.set_epochs(0);
        assert_eq!(optim.epochs(), 0);
        assert_eq!(Ok(()), optim.train(&mut net, &inputs, &targets));
        assert_eq!(net, before);
    }

    #[test]
    fn mismatched_samples() {
        let mut net = NeuralNet::new(2, 0, &[], 1, 0.5, 1.0).unwrap();

        let inputs = Matrix::from_array([[0, 0], [1, 1]]).into();
        let targets = Matrix::from_array([[0]]).into();
        assert_eq!(
            Optimizer::new(1).train(&mut net, &inputs, &targets),
            Err(Error::DataFormatErr)
        );

        let wide = Matrix::from_array([[0, 0, 1]]).into();
        let targets = Matrix::from_array([[1]]).into();
        assert_eq!(
            Optimizer::new(1).train(&mut net, &wide, &targets),
            Err(Error::InputErr)
        );
    }
}
