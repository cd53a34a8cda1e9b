#[cfg(test)]
mod tests {
    use super::super::frame_sequence::FrameSequence;
    use super::super::svg_animator::SvgAnimator;
    use super::super::animator::TrajectoryAnimator;
    use num_complex::Complex64;

    fn sample_frames() -> FrameSequence {
        FrameSequence::new(vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(0.25, 0.1),
            Complex64::new(-0.4, 0.3),
        ])
    }

    #[test]
    fn test_render_contains_boundary_and_frames() {
        let animator = SvgAnimator::new("unused.svg");
        let svg = animator.render(&sample_frames());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("stroke=\"black\""));
        assert_eq!(svg.matches("<g opacity=\"0\">").count(), 3);
        assert_eq!(svg.matches("<set ").count(), 3);
        assert_eq!(svg.matches("fill=\"freeze\"").count(), 1);
    }

    #[test]
    fn test_frame_timing_is_sequential() {
        let animator = SvgAnimator::new("unused.svg");
        let svg = animator.render(&sample_frames());

        assert!(svg.contains("begin=\"0ms\" end=\"500ms\""));
        assert!(svg.contains("begin=\"500ms\" end=\"1000ms\""));
        assert!(svg.contains("begin=\"1000ms\" fill=\"freeze\""));
    }

    #[test]
    fn test_render_of_empty_plan_is_still_a_document() {
        let animator = SvgAnimator::new("unused.svg");
        let svg = animator.render(&FrameSequence::new(vec![]));

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<circle"));
        assert_eq!(svg.matches("<g opacity=\"0\">").count(), 0);
    }

    #[test]
    fn test_animate_writes_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("orbit.svg");

        let mut animator = SvgAnimator::new(&output);
        animator.animate(&sample_frames()).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("</svg>"));
        assert_eq!(written, animator.render(&sample_frames()));
    }

    #[test]
    fn test_disk_origin_lands_at_view_center() {
        let animator = SvgAnimator::new("unused.svg");
        let frames = FrameSequence::new(vec![Complex64::new(0.0, 0.0)]);
        let svg = animator.render(&frames);

        // VIEW_SIZE 800 puts the origin at (400, 400)
        assert!(svg.contains("cx=\"400.00\" cy=\"400.00\""));
    }
}
