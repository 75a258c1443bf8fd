use connect_four::config::AppConfig;
use connect_four::game::{Cell, Outcome, COLS, ROWS};
use connect_four::session::Session;

fn session() -> Session {
    Session::new(&AppConfig::default())
}

#[test]
fn scenario_d_new_game_mid_animation_clears_pieces() {
    let mut session = session();
    for col in [3, 3, 4] {
        session.apply_move(col);
    }
    for _ in 0..10 {
        session.tick();
    }
    assert!(session.animation().in_flight() > 0);

    session.start_new_game();
    session.tick();

    for col in 0..COLS {
        for row in 0..ROWS {
            assert_eq!(session.engine().cell(col, row), Cell::Empty);
            assert_eq!(session.animation().position(col, row), None);
        }
    }
    assert_eq!(session.animation().pieces().count(), 0);

    session.apply_move(3);
    let spawn = session.animation().config().spawn_position();
    assert_eq!(session.animation().position(3, 5), Some(spawn));
}

#[test]
fn pieces_settle_on_their_rows_and_stay() {
    let mut session = session();
    session.apply_move(0);
    session.apply_move(0);
    for _ in 0..200 {
        session.tick();
    }
    let config = session.animation().config().clone();
    assert_eq!(session.animation().position(0, 5), Some(config.target_for_row(5)));
    assert_eq!(session.animation().position(0, 4), Some(config.target_for_row(4)));
    assert!(session.animation().all_settled());

    session.tick();
    assert_eq!(session.animation().position(0, 5), Some(config.target_for_row(5)));
}

#[test]
fn animation_never_changes_game_state() {
    let mut session = session();
    session.apply_move(2);
    let board = *session.engine().board();
    let state = session.engine().state();
    for _ in 0..100 {
        session.tick();
        assert_eq!(*session.engine().board(), board);
        assert_eq!(session.engine().state(), state);
    }
}

#[test]
fn same_moves_and_ticks_give_same_positions() {
    let run = || {
        let mut session = session();
        for col in [1, 2, 1, 2] {
            session.apply_move(col);
            for _ in 0..7 {
                session.tick();
            }
        }
        session
            .animation()
            .pieces()
            .map(|(c, r, p)| (c, r, p.current()))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn click_coordinates_map_to_columns() {
    let mut session = session();
    let cell = session.animation().config().cell_size;
    assert_eq!(session.apply_move_at(cell * 6 + 1), Outcome::InProgress);
    assert_eq!(session.engine().cell(6, 5), Cell::Taken(connect_four::game::Player::One));
    session.apply_move_at(cell * COLS as i32);
    assert_eq!(session.engine().move_count(), 1);
}
