use crate::{BallEvent, Events, Score, Side};

/// Record what the ball did this tick. Returns the side that won the point,
/// if any; the caller is responsible for starting the next round.
pub fn check_scoring(event: BallEvent, score: &mut Score, events: &mut Events) -> Option<Side> {
    match event {
        BallEvent::BounceLeftPaddle => {
            events.ball_hit_paddle = Some(Side::Left);
            tracing::debug!(side = ?Side::Left, "ball hit paddle");
        }
        BallEvent::BounceRightPaddle => {
            events.ball_hit_paddle = Some(Side::Right);
            tracing::debug!(side = ?Side::Right, "ball hit paddle");
        }
        BallEvent::None | BallEvent::ExitLeft | BallEvent::ExitRight => {}
    }

    let scorer = event.scorer()?;
    score.increment(scorer);
    events.scored(scorer);
    tracing::info!(
        scorer = ?scorer,
        left = score.left,
        right = score.right,
        "point scored"
    );
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let mut score = Score::new();
        let mut events = Events::new();

        let scorer = check_scoring(BallEvent::ExitLeft, &mut score, &mut events);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let mut score = Score::new();
        let mut events = Events::new();

        let scorer = check_scoring(BallEvent::ExitRight, &mut score, &mut events);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
    }

    #[test]
    fn test_bounce_is_recorded_without_scoring() {
        let mut score = Score::new();
        let mut events = Events::new();

        let scorer = check_scoring(BallEvent::BounceRightPaddle, &mut score, &mut events);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new());
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let mut score = Score::new();
        let mut events = Events::new();

        check_scoring(BallEvent::ExitRight, &mut score, &mut events);
        events = Events::new();
        check_scoring(BallEvent::ExitRight, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
