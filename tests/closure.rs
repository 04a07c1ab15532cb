use fd_closure::{
    generic::power_set::power_set,
    procedures::closure::closure,
    structures::{
        attribute::{attribute_set, AttributeSet},
        collection::FDCollection,
        dependency::FD,
    },
};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn fd(determinant: &str, dependent: &str) -> FD {
    FD::new(
        attribute_set(determinant.split_whitespace()),
        attribute_set(dependent.split_whitespace()),
    )
    .unwrap()
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

mod scenarios {

    use super::*;

    #[test]
    fn empty() {
        init_logs();
        assert_eq!(closure(&FDCollection::default()), Ok(FDCollection::default()));
    }

    #[test]
    fn single_dependency() {
        init_logs();
        let fds = FDCollection::from_iter([fd("A", "B")]);
        let closed = closure(&fds).unwrap();

        for present in [
            fd("A", "B"),
            fd("A", "A"),
            fd("A", "A B"),
            fd("A B", "A"),
            fd("A B", "B"),
            fd("A B", "A B"),
        ] {
            assert!(closed.contains(&present), "missing {present}");
        }
        assert_eq!(closed.len(), 6);

        // B never appears alone as a determinant, so nothing is derived from B.
        assert!(!closed.contains(&fd("B", "B")));
        assert!(!closed.contains(&fd("B", "A B")));
    }

    #[test]
    fn transitive_chain() {
        init_logs();
        let fds = FDCollection::from_iter([fd("A", "B"), fd("B", "C")]);
        let closed = closure(&fds).unwrap();

        assert!(closed.contains(&fd("A", "C")));
        assert!(closed.contains(&fd("A C", "B C")));
        assert!(closed.contains(&fd("A", "A B C")));
        assert_eq!(closed.len(), 34);
    }

    #[test]
    fn disjoint_dependencies() {
        init_logs();
        let fds = FDCollection::from_iter([fd("A", "B"), fd("C", "D")]);
        let closed = closure(&fds).unwrap();

        let a_b = attribute_set(["A", "B"]);
        let c_d = attribute_set(["C", "D"]);

        for dependency in &closed {
            if dependency.determinant().is_subset(&a_b) {
                assert!(dependency.dependent().is_subset(&a_b), "{dependency}");
            }
            if dependency.determinant().is_subset(&c_d) {
                assert!(dependency.dependent().is_subset(&c_d), "{dependency}");
            }
        }

        // Augmentation relates the two, on both sides.
        assert!(closed.contains(&fd("A C", "B D")));
    }

    #[test]
    fn input_is_unchanged() {
        let fds = FDCollection::from_iter([fd("A", "B"), fd("B", "C")]);
        let copy = fds.clone();

        let _ = closure(&fds);
        assert_eq!(fds, copy);
    }

    #[test]
    fn insertion_order() {
        let given = [fd("A", "B"), fd("B", "C"), fd("C D", "A")];

        let forwards = given.iter().cloned().collect::<FDCollection>();
        let backwards = given.iter().rev().cloned().collect::<FDCollection>();

        assert_eq!(closure(&forwards), closure(&backwards));
    }
}

mod properties {

    use super::*;

    const ATTRIBUTES: [&str; 4] = ["A", "B", "C", "D"];

    /// A non-empty set of attributes from a (non-zero) bitmask over [ATTRIBUTES].
    fn from_mask(mask: u32) -> AttributeSet {
        ATTRIBUTES
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, attribute)| attribute.to_string())
            .collect()
    }

    fn random_dependency(rng: &mut StdRng) -> FD {
        let determinant = from_mask(rng.random_range(1..16));
        let dependent = from_mask(rng.random_range(1..16));
        FD::new(determinant, dependent).unwrap()
    }

    fn random_collection(rng: &mut StdRng) -> FDCollection {
        let count = rng.random_range(1..=3);
        (0..count).map(|_| random_dependency(rng)).collect()
    }

    const CASES: usize = 40;

    #[test]
    fn idempotence_and_monotonicity() {
        init_logs();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..CASES {
            let fds = random_collection(&mut rng);
            let closed = closure(&fds).unwrap();

            assert!(fds.is_subset_of(&closed));
            assert_eq!(closure(&closed).as_ref(), Ok(&closed), "given:\n{fds}");
        }
    }

    #[test]
    fn superset_stability() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..CASES {
            let smaller = random_collection(&mut rng);
            let mut larger = smaller.clone();
            larger.insert(random_dependency(&mut rng));

            let smaller_closed = closure(&smaller).unwrap();
            let larger_closed = closure(&larger).unwrap();

            assert!(smaller_closed.is_subset_of(&larger_closed), "given:\n{smaller}");
        }
    }

    #[test]
    fn closed_under_each_rule() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..CASES {
            let fds = random_collection(&mut rng);
            let universe_power = power_set(&fds.attributes());
            let closed = closure(&fds).unwrap();

            for dependency in &closed {
                // Trivial
                for subset in power_set(dependency.determinant()) {
                    if !subset.is_empty() {
                        let trivial = FD::new(dependency.determinant().clone(), subset).unwrap();
                        assert!(closed.contains(&trivial), "missing {trivial}");
                    }
                }

                // Augmentation
                for attributes in &universe_power {
                    let mut augmented = dependency.clone();
                    augmented.add_to_left(attributes);
                    augmented.add_to_right(attributes);
                    assert!(closed.contains(&augmented), "missing {augmented}");
                }

                // Transitivity
                for second in closed
                    .iter()
                    .filter(|second| second.determinant() == dependency.dependent())
                {
                    let chained = FD::new(
                        dependency.determinant().clone(),
                        second.dependent().clone(),
                    )
                    .unwrap();
                    assert!(closed.contains(&chained), "missing {chained}");
                }
            }
        }
    }

    #[test]
    fn universe_is_fixed() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..CASES {
            let fds = random_collection(&mut rng);
            let closed = closure(&fds).unwrap();
            assert_eq!(closed.attributes(), fds.attributes());
        }
    }
}
