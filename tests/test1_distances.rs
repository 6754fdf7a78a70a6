use anyhow::Result;
use jacktrack::TrackError;
use jacktrack::controller::CourseSession;
use jacktrack::geo::{
    BallStatus, Candidate, SignalBucket, YARDS_PER_MAP_UNIT, display_yards, distance, nearest,
    signal_bucket,
};
use jacktrack::model::{Point, TrackedBall};

#[test]
fn test1_distance_properties() -> Result<()> {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(30.0, 40.0),
        Point::new(-12.5, 300.25),
        Point::new(250.0, 100.0),
    ];
    for &a in &points {
        assert_eq!(distance(a, a)?, 0.0);
        for &b in &points {
            assert_eq!(distance(a, b)?, distance(b, a)?);
            assert!(distance(a, b)? >= 0.0);
        }
    }
    assert_eq!(display_yards(distance(points[0], points[1])?), 100);
    Ok(())
}

#[test]
fn test1_signal_bucket_edges() {
    assert_eq!(signal_bucket(49.9), SignalBucket::Strong);
    assert_eq!(signal_bucket(50.0), SignalBucket::Good);
    assert_eq!(signal_bucket(199.9), SignalBucket::Fair);
    assert_eq!(signal_bucket(200.0), SignalBucket::Weak);
}

#[test]
fn test1_nearest_ignores_disconnected() -> Result<()> {
    let candidates = vec![
        Candidate { id: "A", position: Point::new(10.0, 0.0), connected: true },
        Candidate { id: "B", position: Point::new(5.0, 0.0), connected: true },
        Candidate { id: "C", position: Point::new(1.0, 0.0), connected: false },
    ];
    let found = nearest(Point::new(0.0, 0.0), candidates, YARDS_PER_MAP_UNIT)?;
    assert_eq!(found.map(|(id, _)| id), Some("B"));
    Ok(())
}

#[test]
fn test1_session_round_trip_on_the_course() -> Result<()> {
    let balls = vec![
        TrackedBall::new("far", "Far", Point::new(0.0, 150.0), true, 20)?,
        TrackedBall::new("near", "Near", Point::new(0.0, 10.0), true, 45)?,
    ];
    let mut session = CourseSession::new("Test Links", Point::new(0.0, 0.0), balls, YARDS_PER_MAP_UNIT)?;

    let readout = session.readout()?;
    assert_eq!(readout.nearest.map(|n| n.id), Some("near".to_string()));

    session.move_player(Point::new(0.0, 140.0))?;
    let readout = session.readout()?;
    assert_eq!(readout.nearest.as_ref().map(|n| n.id.as_str()), Some("far"));
    assert_eq!(readout.nearest.map(|n| n.yards), Some(20));

    let cards = session.ball_cards()?;
    assert_eq!(cards[0].status, BallStatus::Signal(SignalBucket::Strong));
    assert_eq!(cards[1].status, BallStatus::Signal(SignalBucket::Weak));

    let err = session.move_player(Point::new(f64::NAN, 0.0));
    assert!(matches!(err, Err(TrackError::InvalidInput(_))));
    assert_eq!(session.player(), Point::new(0.0, 140.0));
    Ok(())
}
