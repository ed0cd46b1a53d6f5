//! Motion paths: SVG path data sampled by relative arc length.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point};

use crate::error::AnimationError;

/// A parsed single sub-path with precomputed arc lengths.
#[derive(Clone, Debug)]
pub struct MotionPath {
    start: Point,
    segments: Vec<PathSeg>,
    /// Arc length at the end of each segment.
    cumulative: Vec<f64>,
    closed: bool,
    accuracy: f64,
}

/// Number of sub-paths in `path`. A drawing command right after a close
/// starts a new one even without an explicit move.
pub fn subpath_count(path: &BezPath) -> usize {
    let mut count = 0;
    let mut after_close = false;
    for el in path.elements() {
        match el {
            PathEl::MoveTo(_) => {
                count += 1;
                after_close = false;
            }
            PathEl::ClosePath => after_close = true,
            _ => {
                if after_close {
                    count += 1;
                    after_close = false;
                }
            }
        }
    }
    count
}

impl MotionPath {
    pub fn parse(d: &str, accuracy: f64) -> Result<Self, AnimationError> {
        let path = BezPath::from_svg(d).map_err(|e| AnimationError::PathParse {
            path: d.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_bez_path(&path, accuracy)
    }

    pub fn from_bez_path(path: &BezPath, accuracy: f64) -> Result<Self, AnimationError> {
        let count = subpath_count(path);
        if count != 1 {
            return Err(AnimationError::PathSubpathCount { count });
        }
        let start = match path.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => Point::ORIGIN,
        };
        let closed = path
            .elements()
            .iter()
            .any(|el| matches!(el, PathEl::ClosePath));

        let segments: Vec<PathSeg> = path.segments().collect();
        let mut total = 0.0;
        let cumulative = segments
            .iter()
            .map(|seg| {
                total += seg.arclen(accuracy);
                total
            })
            .collect();

        Ok(Self {
            start,
            segments,
            cumulative,
            closed,
            accuracy,
        })
    }

    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn start_point(&self) -> Point {
        self.start
    }

    pub fn end_point(&self) -> Point {
        self.segments.last().map_or(self.start, |seg| seg.end())
    }

    /// Point at relative arc length `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let total = self.length();
        if t.is_nan() || t <= 0.0 || total <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end_point();
        }
        let target = t * total;
        // first segment whose end lies at or beyond the target
        let idx = self.cumulative.partition_point(|&len| len < target);
        let Some(seg) = self.segments.get(idx) else {
            return self.end_point();
        };
        let seg_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        let param = seg.inv_arclen(target - seg_start, self.accuracy);
        seg.eval(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-6
    }

    #[test]
    fn line_is_sampled_by_length() {
        let path = MotionPath::parse("M 0 0 L 1 0 L 1 1", 1e-9).unwrap();
        assert!((path.length() - 2.0).abs() < 1e-9);
        assert!(close(path.point_at(0.25), Point::new(0.5, 0.0)));
        assert!(close(path.point_at(0.5), Point::new(1.0, 0.0)));
        assert!(close(path.point_at(0.75), Point::new(1.0, 0.5)));
    }

    #[test]
    fn out_of_range_parameters_clamp() {
        let path = MotionPath::parse("M 0 0 L 1 0", 1e-9).unwrap();
        assert_eq!(path.point_at(-0.5), Point::ORIGIN);
        assert_eq!(path.point_at(f64::NAN), Point::ORIGIN);
        assert_eq!(path.point_at(3.0), Point::new(1.0, 0.0));
    }

    #[test]
    fn closed_square_returns_to_start() {
        let path = MotionPath::parse("M 0 0 L 1 0 L 1 1 L 0 1 Z", 1e-9).unwrap();
        assert!(path.is_closed());
        assert!((path.length() - 4.0).abs() < 1e-9);
        assert!(close(path.point_at(0.0), Point::ORIGIN));
        assert!(close(path.point_at(1.0), Point::ORIGIN));
        assert!(close(path.point_at(0.875), Point::new(0.0, 0.5)));
    }

    #[test]
    fn subpaths_are_counted() {
        let two = BezPath::from_svg("M 0 0 L 1 0 M 0 1 L 1 1").unwrap();
        assert_eq!(subpath_count(&two), 2);
        let one = BezPath::from_svg("M 0 0 L 1 0 Z").unwrap();
        assert_eq!(subpath_count(&one), 1);
        assert_eq!(subpath_count(&BezPath::new()), 0);
    }

    #[test]
    fn single_point_path_has_no_length() {
        let path = MotionPath::parse("M 0.5 0.5", 1e-9).unwrap();
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.point_at(0.7), Point::new(0.5, 0.5));
    }
}
