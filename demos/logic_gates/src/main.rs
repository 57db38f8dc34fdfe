use rust_nn::{
    matrix::Matrix,
    neural::{optimizer::Optimizer, NeuralNet},
    prelude::*,
};

const EPOCHS: usize = 10_000;

fn to_bitvec(x: i32, size: u32) -> Vec<i32> {
    (0..size).rev().map(|i| x >> i & 1).collect()
}

fn report(name: &str, net: &NeuralNet, inputs: &Matrix<f64>, targets: &Matrix<f64>) -> Result<()> {
    println!("------------------");
    println!("{name}: final cost {}", net.mean_squared_error(inputs, targets)?);

    let mut correct = 0;
    for row in 0..inputs.rows() {
        let input = inputs.row_to_vec(row)?;
        let out = net.predict(&input)?;
        let hit = out
            .values()
            .iter()
            .zip(targets.row_to_vec(row)?)
            .all(|(y, t)| y.round() == t);
        if hit {
            correct += 1;
        }
        println!("{input:?} -> {:?}", out.values());
    }
    println!("Accuracy = {}", correct as f64 / inputs.rows() as f64);
    Ok(())
}

fn main() -> Result<()> {
    let optim = Optimizer::new(EPOCHS).with_log(Some(EPOCHS / 4));

    let mut copycat = NeuralNet::new(1, 0, &[], 1, 0.5, 1.0)?;
    let inputs = Matrix::from_array([[0], [1]]).into();
    let targets = Matrix::from_array([[0], [1]]).into();
    optim.train(&mut copycat, &inputs, &targets)?;
    report("copycat", &copycat, &inputs, &targets)?;

    let mut or = NeuralNet::new(2, 0, &[], 1, 0.5, 1.0)?;
    let inputs = Matrix::from_array([[0, 0], [1, 1], [0, 1], [1, 0]]).into();
    let targets = Matrix::from_array([[0], [1], [1], [1]]).into();
    optim.train(&mut or, &inputs, &targets)?;
    report("or", &or, &inputs, &targets)?;

    // fires when the first bit pair repeats in the second
    let mut pattern = NeuralNet::new(4, 2, &[2, 2], 1, 0.5, 1.0)?;
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for x in 0..16 {
        let bits = to_bitvec(x, 4);
        labels.push(vec![(bits[..2] == bits[2..]) as i32]);
        rows.push(bits);
    }
    let inputs = Matrix::from_vec(rows)?.into();
    let targets = Matrix::from_vec(labels)?.into();
    optim.train(&mut pattern, &inputs, &targets)?;
    report("pattern", &pattern, &inputs, &targets)?;

    Ok(())
}
