use keyquest::progress::{LevelUp, PlayerProgress};
use keyquest::session::Session;
use keyquest::stats::{ProgressHistory, SessionResult};

fn run_session(reference: &str, ticks_before_finish: u32) -> SessionResult {
    let mut session = Session::new(reference.to_string());

    let mut chars = reference.chars();
    if let Some(first) = chars.next() {
        session.write(first);
    }
    for _ in 0..ticks_before_finish {
        session.on_tick();
    }
    for c in chars {
        session.write(c);
    }

    assert!(session.has_finished());
    session.result().expect("finished session has a result")
}

#[test]
fn history_accumulates_across_sessions() {
    let mut history = ProgressHistory::new();

    for reference in ["cat", "dog house", "quick brown fox"] {
        history.record(run_session(reference, 30));
    }

    assert_eq!(history.len(), 3);
    assert_eq!(history.entries()[2].label, "Test 3");
    assert_eq!(history.wpm_series().len(), 3);
    assert_eq!(history.accuracy_series().len(), 3);
    // x coordinates are the 1-based test indices
    assert_eq!(history.wpm_series()[2].0, 3.0);
}

#[test]
fn half_window_session_scores_one_wpm() {
    // "cat" typed with 30 of 60 seconds gone
    let result = run_session("cat", 30);

    assert_eq!(result.wpm, 1);
    assert_eq!(result.accuracy, 100);
}

#[test]
fn player_levels_up_across_sessions() {
    let mut player = PlayerProgress::default();

    // 60 wpm at 100% earns 30 xp per test; the fourth test crosses 100.
    let result = SessionResult {
        wpm: 60,
        accuracy: 100,
    };
    let mut level_ups: Vec<LevelUp> = Vec::new();
    for _ in 0..4 {
        level_ups.extend(player.apply(&result));
    }

    assert_eq!(level_ups, vec![LevelUp { level: 2 }]);
    assert_eq!(player.level, 2);
    assert_eq!(player.xp, 20);
    assert_eq!(player.xp_threshold, 150);
}

#[test]
fn single_overflow_rolls_into_level_and_grows_threshold() {
    let mut player = PlayerProgress {
        level: 1,
        xp: 90,
        xp_threshold: 100,
    };

    let ups = player.apply(&SessionResult {
        wpm: 60,
        accuracy: 100,
    });

    assert_eq!(ups, vec![LevelUp { level: 2 }]);
    assert_eq!(player.level, 2);
    assert_eq!(player.xp, 20);
    assert_eq!(player.xp_threshold, 150);
}
