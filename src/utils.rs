use rand::Rng;

use crate::vector::Vector;
use crate::Result;

pub fn generate_random_vectors(dimension: usize, count: usize) -> Result<Vec<Vector>> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let coordinates = (0..dimension)
                .map(|_| rng.gen_range(-1.0..1.0))
                .collect();
            Vector::new(coordinates)
        })
        .collect()
}
