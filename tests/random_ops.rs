use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use advec::{Grow, GrowDoubling, GrowExact, Vector};

fn check_against_std<G: Grow>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut subject = Vector::<String, G>::new();
    let mut model = Vec::<String>::new();

    for step in 0..2000 {
        let len = model.len();
        match rng.gen_range(0..10) {
            0..=2 => {
                let value = step.to_string();
                subject.push_back(value.clone());
                model.push(value);
            }
            3 => {
                assert_eq!(subject.pop_back(), model.pop());
            }
            4 => {
                let index = rng.gen_range(0..=len);
                let value = step.to_string();
                assert_eq!(subject.insert(index, value.clone()), index);
                model.insert(index, value);
            }
            5 if len > 0 => {
                let index = rng.gen_range(0..len);
                assert_eq!(subject.remove(index), model.remove(index));
            }
            6 => {
                let new_len = rng.gen_range(0..=len + 4);
                subject.resize(new_len);
                model.resize(new_len, String::new());
            }
            7 => {
                let copy = subject.clone();
                assert_eq!(copy.capacity(), copy.len());
                subject = copy;
            }
            8 => {
                let index = rng.gen_range(0..=len);
                let value = format!("e{}", step);
                subject.emplace_with(index, || value.clone());
                model.insert(index, value);
            }
            _ => {
                let count = rng.gen_range(0..3);
                subject.truncate(len.saturating_sub(count));
                model.truncate(len.saturating_sub(count));
            }
        }
        assert_eq!(subject, model);
        assert!(subject.len() <= subject.capacity());
    }
}

#[test]
fn random_ops_doubling() {
    for seed in 0..8 {
        check_against_std::<GrowDoubling>(seed);
    }
}

#[test]
fn random_ops_exact() {
    for seed in 100..104 {
        check_against_std::<GrowExact>(seed);
    }
}
