use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::error::TrackError;
use crate::geo::{
    BallStatus, BatteryTier, Candidate, battery_tier, display_yards, distance_with_scale, nearest,
};
use crate::model::{CourseLayout, MAX_HOLE, MIN_HOLE, Point, TrackedBall};

/// Extent of the drawn course map, in map units.
pub const MAP_WIDTH: f64 = 300.0;
pub const MAP_HEIGHT: f64 = 400.0;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NearestBall {
    pub id: String,
    pub name: String,
    pub yards: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DistanceReadout {
    pub to_hole: u32,
    pub nearest: Option<NearestBall>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BallCard {
    pub id: String,
    pub name: String,
    pub yards: u32,
    pub status: BallStatus,
    pub battery_level: u8,
    pub battery: BatteryTier,
    pub selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Navigation {
    pub ball_id: String,
    pub ball_name: String,
    pub yards: u32,
}

/// Everything the course screen shows: which hole, where the player stands,
/// and the balls being tracked.
#[derive(Clone, Debug)]
pub struct CourseSession {
    course_name: String,
    current_hole: u8,
    layout: CourseLayout,
    player: Point,
    balls: Vec<TrackedBall>,
    selected: Option<String>,
    bluetooth_connected: bool,
    yards_per_unit: f64,
}

impl CourseSession {
    /// # Errors
    ///
    /// Will return `Err` if the player position is not finite, the scale is not finite and
    /// positive, or two balls share an id
    pub fn new(
        course_name: impl Into<String>,
        player: Point,
        balls: Vec<TrackedBall>,
        yards_per_unit: f64,
    ) -> Result<Self, TrackError> {
        if !yards_per_unit.is_finite() || yards_per_unit <= 0.0 {
            return Err(TrackError::InvalidInput(format!(
                "yards per map unit {yards_per_unit} must be finite and positive"
            )));
        }
        for (i, ball) in balls.iter().enumerate() {
            ball.check()?;
            if balls[..i].iter().any(|b| b.id == ball.id) {
                return Err(TrackError::InvalidInput(format!("duplicate ball id {}", ball.id)));
            }
        }
        Ok(Self {
            course_name: course_name.into(),
            current_hole: MIN_HOLE,
            layout: CourseLayout::default(),
            player: player.check()?,
            balls,
            selected: None,
            bluetooth_connected: true,
            yards_per_unit,
        })
    }

    #[must_use]
    pub fn with_layout(mut self, layout: CourseLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    #[must_use]
    pub fn current_hole(&self) -> u8 {
        self.current_hole
    }

    #[must_use]
    pub fn player(&self) -> Point {
        self.player
    }

    #[must_use]
    pub fn balls(&self) -> &[TrackedBall] {
        &self.balls
    }

    #[must_use]
    pub fn selected(&self) -> Option<&TrackedBall> {
        let id = self.selected.as_deref()?;
        self.balls.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn bluetooth_connected(&self) -> bool {
        self.bluetooth_connected
    }

    pub fn next_hole(&mut self) -> u8 {
        self.current_hole = (self.current_hole + 1).min(MAX_HOLE);
        self.current_hole
    }

    pub fn previous_hole(&mut self) -> u8 {
        self.current_hole = self.current_hole.saturating_sub(1).max(MIN_HOLE);
        self.current_hole
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole number is outside 1..=18
    pub fn go_to_hole(&mut self, hole_number: u8) -> Result<(), TrackError> {
        self.current_hole = crate::model::check_hole_number(hole_number)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the position is not finite
    pub fn move_player(&mut self, position: Point) -> Result<(), TrackError> {
        self.player = position.check()?;
        debug!("player moved to ({}, {})", position.x, position.y);
        Ok(())
    }

    pub fn toggle_bluetooth(&mut self) -> bool {
        self.bluetooth_connected = !self.bluetooth_connected;
        info!("bluetooth connected: {}", self.bluetooth_connected);
        self.bluetooth_connected
    }

    /// Registers a found ball as the next player's. Returns its id.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the position is not finite or the battery level is above 100
    pub fn add_ball(&mut self, position: Point, battery_level: u8) -> Result<String, TrackError> {
        let n = self.balls.len() + 1;
        let mut id = format!("ball{n}");
        let mut suffix = n;
        while self.balls.iter().any(|b| b.id == id) {
            suffix += 1;
            id = format!("ball{suffix}");
        }
        let ball = TrackedBall::new(id.clone(), format!("Player {n}"), position, true, battery_level)?;
        info!("tracking {} ({}) at ({}, {})", ball.id, ball.name, position.x, position.y);
        self.balls.push(ball);
        Ok(id)
    }

    /// Simulated scan: a connected ball somewhere on the map with 50-99% battery.
    ///
    /// # Errors
    ///
    /// Will return `Err` only if the generated ball fails validation
    pub fn scan_for_ball<R: Rng>(&mut self, rng: &mut R) -> Result<String, TrackError> {
        let position = Point::new(
            rng.random_range(0.0..MAP_WIDTH),
            rng.random_range(0.0..MAP_HEIGHT),
        );
        let battery_level = rng.random_range(50..100);
        self.add_ball(position, battery_level)
    }

    /// # Errors
    ///
    /// Will return `Err` if no ball has this id
    pub fn set_ball_connected(&mut self, id: &str, connected: bool) -> Result<(), TrackError> {
        let ball = self.ball_mut(id)?;
        ball.connected = connected;
        info!("{id} connected: {connected}");
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if no ball has this id
    pub fn select_ball(&mut self, id: &str) -> Result<(), TrackError> {
        self.ball(id)?;
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Selects the ball and reports how far away it is.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no ball has this id
    pub fn navigate_to(&mut self, id: &str) -> Result<Navigation, TrackError> {
        self.select_ball(id)?;
        let ball = self.ball(id)?;
        let yards = display_yards(self.scaled(ball.position)?);
        info!("navigating to {} ({yards} yds)", ball.name);
        Ok(Navigation {
            ball_id: ball.id.clone(),
            ball_name: ball.name.clone(),
            yards,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the layout's pin is not finite
    pub fn distance_to_hole(&self) -> Result<u32, TrackError> {
        Ok(display_yards(self.scaled(self.layout.pin)?))
    }

    /// # Errors
    ///
    /// Will return `Err` if a connected ball has a non-finite position
    pub fn nearest_ball(&self) -> Result<Option<NearestBall>, TrackError> {
        let candidates = self.balls.iter().map(|b| Candidate {
            id: &b.id,
            position: b.position,
            connected: b.connected,
        });
        let Some((id, d)) = nearest(self.player, candidates, self.yards_per_unit)? else {
            return Ok(None);
        };
        let ball = self.ball(id)?;
        Ok(Some(NearestBall {
            id: ball.id.clone(),
            name: ball.name.clone(),
            yards: display_yards(d),
        }))
    }

    /// # Errors
    ///
    /// Will return `Err` if a position involved is not finite
    pub fn readout(&self) -> Result<DistanceReadout, TrackError> {
        Ok(DistanceReadout {
            to_hole: self.distance_to_hole()?,
            nearest: self.nearest_ball()?,
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if a ball position is not finite
    pub fn ball_cards(&self) -> Result<Vec<BallCard>, TrackError> {
        self.balls
            .iter()
            .map(|ball| {
                let d = self.scaled(ball.position)?;
                Ok(BallCard {
                    id: ball.id.clone(),
                    name: ball.name.clone(),
                    yards: display_yards(d),
                    status: BallStatus::for_ball(ball.connected, d),
                    battery_level: ball.battery_level,
                    battery: battery_tier(ball.battery_level),
                    selected: self.selected.as_deref() == Some(ball.id.as_str()),
                })
            })
            .collect()
    }

    fn scaled(&self, target: Point) -> Result<f64, TrackError> {
        distance_with_scale(self.player, target, self.yards_per_unit)
    }

    fn ball(&self, id: &str) -> Result<&TrackedBall, TrackError> {
        self.balls.iter().find(|b| b.id == id).ok_or_else(|| {
            warn!("no tracked ball with id {id}");
            TrackError::NotFound(format!("ball {id}"))
        })
    }

    fn ball_mut(&mut self, id: &str) -> Result<&mut TrackedBall, TrackError> {
        self.balls
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| TrackError::NotFound(format!("ball {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{SignalBucket, YARDS_PER_MAP_UNIT};
    use crate::model::demo_balls;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> CourseSession {
        CourseSession::new(
            "Pebble Beach Golf Links",
            Point::new(100.0, 180.0),
            demo_balls().unwrap(),
            YARDS_PER_MAP_UNIT,
        )
        .unwrap()
    }

    #[test]
    fn hole_selector_is_clamped() {
        let mut s = session();
        assert_eq!(s.previous_hole(), 1);
        for _ in 0..30 {
            s.next_hole();
        }
        assert_eq!(s.current_hole(), 18);
        assert!(s.go_to_hole(0).is_err());
        s.go_to_hole(7).unwrap();
        assert_eq!(s.current_hole(), 7);
    }

    #[test]
    fn readout_for_mock_state() {
        // pin (250,100) from (100,180): sqrt(150^2 + 80^2) = 170 -> 340 yds
        // ball1 (150,200): sqrt(50^2 + 20^2) = 53.85 -> 107 yds
        let readout = session().readout().unwrap();
        assert_eq!(readout.to_hole, 340);
        let nearest = readout.nearest.unwrap();
        assert_eq!(nearest.id, "ball1");
        assert_eq!(nearest.yards, 107);
    }

    #[test]
    fn disconnected_ball_is_not_nearest() {
        let mut s = session();
        s.set_ball_connected("ball1", false).unwrap();
        let nearest = s.nearest_ball().unwrap().unwrap();
        assert_eq!(nearest.id, "ball2");
        s.set_ball_connected("ball2", false).unwrap();
        assert!(s.nearest_ball().unwrap().is_none());
    }

    #[test]
    fn ball_cards_show_signal_and_selection() {
        let mut s = session();
        s.select_ball("ball2").unwrap();
        s.set_ball_connected("ball1", false).unwrap();
        let cards = s.ball_cards().unwrap();
        assert_eq!(cards[0].status, BallStatus::Disconnected);
        assert_eq!(cards[0].battery, BatteryTier::High);
        assert!(!cards[0].selected);
        assert!(cards[1].selected);
        // ball2 (180,220): sqrt(80^2 + 40^2) = 89.44 -> 178 yds
        assert_eq!(cards[1].yards, 178);
        assert_eq!(cards[1].status, BallStatus::Signal(SignalBucket::Fair));
    }

    #[test]
    fn navigate_selects_and_uses_scaled_yards() {
        let mut s = session();
        let nav = s.navigate_to("ball1").unwrap();
        assert_eq!(nav.yards, 107);
        assert_eq!(s.selected().map(|b| b.id.as_str()), Some("ball1"));
        assert!(matches!(s.navigate_to("nope"), Err(TrackError::NotFound(_))));
    }

    #[test]
    fn scan_adds_connected_ball_on_map() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(7);
        let id = s.scan_for_ball(&mut rng).unwrap();
        assert_eq!(id, "ball3");
        let ball = s.balls().last().unwrap();
        assert_eq!(ball.name, "Player 3");
        assert!(ball.connected);
        assert!((50..100).contains(&ball.battery_level));
        assert!((0.0..MAP_WIDTH).contains(&ball.position.x));
        assert!((0.0..MAP_HEIGHT).contains(&ball.position.y));
    }

    #[test]
    fn add_ball_avoids_id_clash() {
        let balls = vec![
            TrackedBall::new("ball2", "Player 2", Point::new(1.0, 1.0), true, 80).unwrap(),
        ];
        let mut s = CourseSession::new("x", Point::new(0.0, 0.0), balls, 2.0).unwrap();
        assert_eq!(s.add_ball(Point::new(2.0, 2.0), 60).unwrap(), "ball3");
    }

    #[test]
    fn rejects_bad_construction() {
        assert!(CourseSession::new("x", Point::new(f64::NAN, 0.0), vec![], 2.0).is_err());
        assert!(CourseSession::new("x", Point::new(0.0, 0.0), vec![], 0.0).is_err());
        let dup = vec![
            TrackedBall::new("a", "A", Point::new(1.0, 1.0), true, 80).unwrap(),
            TrackedBall::new("a", "B", Point::new(2.0, 1.0), true, 80).unwrap(),
        ];
        assert!(CourseSession::new("x", Point::new(0.0, 0.0), dup, 2.0).is_err());
    }

    #[test]
    fn rejects_battery_over_100_from_a_struct_literal() {
        let ball = TrackedBall {
            id: "ball9".to_string(),
            name: "Overcharged".to_string(),
            position: Point::new(1.0, 1.0),
            connected: true,
            battery_level: 150,
        };
        assert!(matches!(
            CourseSession::new("x", Point::new(0.0, 0.0), vec![ball], 2.0),
            Err(TrackError::InvalidInput(_))
        ));
    }

    #[test]
    fn custom_layout_moves_the_pin() {
        let layout = CourseLayout {
            pin: Point::new(100.0, 130.0),
            tee: Point::new(100.0, 350.0),
        };
        let mut s = session().with_layout(layout);
        assert_eq!(s.distance_to_hole().unwrap(), 100);
        s.select_ball("ball1").unwrap();
        s.clear_selection();
        assert!(s.selected().is_none());
    }

    #[test]
    fn bluetooth_toggles() {
        let mut s = session();
        assert!(s.bluetooth_connected());
        assert!(!s.toggle_bluetooth());
        assert!(s.toggle_bluetooth());
    }
}
