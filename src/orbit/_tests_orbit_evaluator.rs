#[cfg(test)]
mod tests {
    use super::super::gamma_path::GammaPath;
    use super::super::orbit_evaluator::{basepoint, OrbitEvaluator};
    use crate::error::PathError;
    use crate::group::FuchsianGroup;
    use crate::interfaces::HalfPlanePoint;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_path_yields_basepoint_only() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        let orbit = evaluator.evaluate(&GammaPath::new(vec![])).unwrap();
        assert_eq!(orbit.len(), 1);
        assert_eq!(orbit.points()[0], HalfPlanePoint::Finite(basepoint()));
    }

    #[test]
    fn test_orbit_length_is_path_length_plus_one() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        let path = GammaPath::default();
        let orbit = evaluator.evaluate(&path).unwrap();
        assert_eq!(orbit.len(), path.len() + 1);
    }

    #[test]
    fn test_single_step_worked_example() {
        // Generator 0 = [[2, 1], [1, 1]] sends i to (3 + i)/2
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        let orbit = evaluator.evaluate(&GammaPath::new(vec![0])).unwrap();
        assert_eq!(orbit.len(), 2);

        let w = orbit.points()[1].finite().expect("step must stay finite");
        assert_abs_diff_eq!(w.re, 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(w.im, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_generator_then_inverse_returns_to_basepoint() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        for index in 0..10 {
            let path = GammaPath::new(vec![index, index + 10]);
            let orbit = evaluator.evaluate(&path).unwrap();

            let back = orbit.points()[2].finite().expect("round trip stays finite");
            assert_abs_diff_eq!(back.re, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(back.im, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_orbit_points_stay_in_upper_half_plane() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        let orbit = evaluator.evaluate(&GammaPath::default()).unwrap();
        for point in orbit.iter() {
            let z = point.finite().expect("default path never degenerates");
            assert!(z.im > 0.0);
        }
    }

    #[test]
    fn test_invalid_index_aborts_before_evaluation() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        match evaluator.evaluate(&GammaPath::new(vec![20])) {
            Err(PathError::InvalidGeneratorIndex { index, .. }) => assert_eq!(index, 20),
            other => panic!("expected InvalidGeneratorIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        let path = GammaPath::default();
        let first = evaluator.evaluate(&path).unwrap();
        let second = evaluator.evaluate(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_matches_eager_evaluation() {
        let group = FuchsianGroup::genus_5().unwrap();
        let evaluator = OrbitEvaluator::new(&group);

        let path = GammaPath::new(vec![0, 3, 11, 7]);
        let eager = evaluator.evaluate(&path).unwrap();
        let lazy: Vec<_> = evaluator.walk(&path).collect();
        assert_eq!(eager.points(), lazy.as_slice());
    }
}
