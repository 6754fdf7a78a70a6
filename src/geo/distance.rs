use log::debug;

use crate::error::TrackError;
use crate::model::Point;

/// Map units to yards.
pub const YARDS_PER_MAP_UNIT: f64 = 2.0;

/// Scaled distance between two map points, in yards.
///
/// # Errors
///
/// Will return `Err` if either point has a non-finite coordinate
pub fn distance(a: Point, b: Point) -> Result<f64, TrackError> {
    distance_with_scale(a, b, YARDS_PER_MAP_UNIT)
}

/// # Errors
///
/// Will return `Err` if either point is not finite, or the scale is not finite and positive
pub fn distance_with_scale(a: Point, b: Point, scale: f64) -> Result<f64, TrackError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(TrackError::InvalidInput(format!(
            "distance scale {scale} must be finite and positive"
        )));
    }
    let a = a.check()?;
    let b = b.check()?;
    Ok(scale * (a.x - b.x).hypot(a.y - b.y))
}

/// Whole yards for display; partial yards are dropped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn display_yards(distance: f64) -> u32 {
    if distance.is_nan() || distance <= 0.0 {
        0
    } else {
        distance.floor().min(f64::from(u32::MAX)) as u32
    }
}

/// A candidate for [`nearest`]: an id, where it is, and whether it is reachable.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub position: Point,
    pub connected: bool,
}

/// Closest connected candidate to `origin`. The first candidate seen wins a tie.
///
/// # Errors
///
/// Will return `Err` if the origin or a connected candidate has a non-finite coordinate
pub fn nearest<'a, I>(origin: Point, candidates: I, scale: f64) -> Result<Option<(&'a str, f64)>, TrackError>
where
    I: IntoIterator<Item = Candidate<'a>>,
{
    let origin = origin.check()?;
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        if !candidate.connected {
            continue;
        }
        let d = distance_with_scale(origin, candidate.position, scale)?;
        match best {
            Some((_, current)) if d >= current => {}
            _ => best = Some((candidate.id, d)),
        }
    }
    debug!("nearest connected candidate: {best:?}");
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(id: &str, x: f64, connected: bool) -> Candidate<'_> {
        Candidate {
            id,
            position: Point::new(x, 0.0),
            connected,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Point::new(123.5, -7.25);
        assert_eq!(distance(a, a).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(12.0, 99.0);
        let b = Point::new(-40.0, 3.5);
        assert_eq!(distance(a, b).unwrap(), distance(b, a).unwrap());
    }

    #[test]
    fn three_four_five_triangle_scales_to_100() {
        let d = distance(Point::new(0.0, 0.0), Point::new(30.0, 40.0)).unwrap();
        assert!((d - 100.0).abs() < 1e-9);
        assert_eq!(display_yards(d), 100);
    }

    #[test]
    fn display_yards_floors() {
        assert_eq!(display_yards(99.99), 99);
        assert_eq!(display_yards(0.4), 0);
        assert_eq!(display_yards(f64::NAN), 0);
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let err = distance(Point::new(f64::NAN, 0.0), Point::new(0.0, 0.0));
        assert!(matches!(err, Err(TrackError::InvalidInput(_))));
    }

    #[test]
    fn bad_scale_is_rejected() {
        let a = Point::new(0.0, 0.0);
        assert!(distance_with_scale(a, a, 0.0).is_err());
        assert!(distance_with_scale(a, a, f64::INFINITY).is_err());
    }

    #[test]
    fn nearest_skips_disconnected_candidates() {
        let candidates = [cand("A", 10.0, true), cand("B", 5.0, true), cand("C", 1.0, false)];
        let found = nearest(Point::new(0.0, 0.0), candidates, YARDS_PER_MAP_UNIT).unwrap();
        assert_eq!(found, Some(("B", 10.0)));
    }

    #[test]
    fn nearest_keeps_first_on_tie() {
        let candidates = [cand("first", 5.0, true), cand("second", -5.0, true)];
        let found = nearest(Point::new(0.0, 0.0), candidates, YARDS_PER_MAP_UNIT).unwrap();
        assert_eq!(found.map(|(id, _)| id), Some("first"));
    }

    #[test]
    fn nearest_with_nothing_connected_is_none() {
        let candidates = [cand("A", 10.0, false)];
        let found = nearest(Point::new(0.0, 0.0), candidates, YARDS_PER_MAP_UNIT).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn disconnected_bad_position_does_not_fail_search() {
        let candidates = [
            Candidate { id: "lost", position: Point::new(f64::NAN, 0.0), connected: false },
            cand("A", 3.0, true),
        ];
        let found = nearest(Point::new(0.0, 0.0), candidates, YARDS_PER_MAP_UNIT).unwrap();
        assert_eq!(found.map(|(id, _)| id), Some("A"));
    }
}
